pub mod networks;
mod types;

pub use types::{Network, DEFAULT_SECONDS_PER_SLOT, DEFAULT_SLOTS_PER_EPOCH};

use std::{collections::HashSet, fs, path::Path};

use crate::errors::ConfigError;

/// Load the network set from a YAML file.
///
/// The file holds a list of [Network] records; omitted timing fields default
/// to mainnet values (12 second slots, 32 slots per epoch).
pub fn load_networks(path: &Path) -> Result<Vec<Network>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let networks: Vec<Network> = serde_yaml::from_str(&contents)?;
    validate_networks(&networks)?;
    Ok(networks)
}

fn validate_networks(networks: &[Network]) -> Result<(), ConfigError> {
    if networks.is_empty() {
        return Err(ConfigError::NoNetworks);
    }
    let mut seen = HashSet::new();
    for network in networks {
        if !seen.insert(network.name.as_str()) {
            return Err(ConfigError::DuplicateNetwork(network.name.clone()));
        }
        if network.seconds_per_slot == 0 || network.slots_per_epoch == 0 {
            return Err(ConfigError::InvalidTiming(network.name.clone()));
        }
    }
    Ok(())
}
