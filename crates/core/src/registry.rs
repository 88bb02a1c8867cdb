use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{config::Network, errors::ConfigError, store::SelectionStore};

/// Name preferred when nothing usable is persisted.
const DEFAULT_NETWORK: &str = "mainnet";

/// Owns the set of available networks and the user's current selection.
///
/// Cheap to clone; clones share the selection. All mutation goes through
/// [NetworkRegistry::select], which persists the choice and notifies
/// subscribers synchronously.
#[derive(Clone)]
pub struct NetworkRegistry {
    networks: Arc<Vec<Network>>,
    store: Arc<dyn SelectionStore>,
    selection: watch::Sender<Network>,
}

impl NetworkRegistry {
    /// Builds the registry and restores the persisted selection.
    ///
    /// Selection fallback, in order: the persisted name when it matches a
    /// known network, then `"mainnet"` when present, then the first network
    /// in configuration order.
    pub fn new(
        networks: Vec<Network>,
        store: Arc<dyn SelectionStore>,
    ) -> Result<Self, ConfigError> {
        if networks.is_empty() {
            return Err(ConfigError::NoNetworks);
        }

        let persisted = store.load().unwrap_or_else(|err| {
            warn!(%err, "unable to load persisted network selection");
            None
        });
        let initial = persisted
            .and_then(|name| networks.iter().find(|network| network.name == name))
            .or_else(|| {
                networks
                    .iter()
                    .find(|network| network.name == DEFAULT_NETWORK)
            })
            .unwrap_or(&networks[0])
            .clone();
        debug!(network = %initial.name, "restored network selection");

        let (selection, _) = watch::channel(initial);
        Ok(Self {
            networks: Arc::new(networks),
            store,
            selection,
        })
    }

    /// The currently selected network.
    pub fn current(&self) -> Network {
        self.selection.borrow().clone()
    }

    /// All known networks, in configuration order.
    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    /// Observe selection changes.
    pub fn subscribe(&self) -> watch::Receiver<Network> {
        self.selection.subscribe()
    }

    /// Switch to the named network.
    ///
    /// Selection is user-driven: an unknown name (stale persisted state, a
    /// removed network) is logged and ignored rather than surfaced.
    pub fn select(&self, name: &str) {
        let Some(network) = self.networks.iter().find(|network| network.name == name) else {
            warn!(name, "ignoring selection of unknown network");
            return;
        };

        let switched = self.selection.send_if_modified(|current| {
            if current.name == network.name {
                return false;
            }
            *current = network.clone();
            true
        });

        if switched {
            debug!(network = name, "network selected");
            if let Err(err) = self.store.save(name) {
                warn!(%err, "unable to persist network selection");
            }
        }
    }
}
