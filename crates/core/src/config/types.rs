use serde::{Deserialize, Serialize};

/// Slot duration used by every preset network.
pub const DEFAULT_SECONDS_PER_SLOT: u32 = 12;

/// Epoch length used by every preset network.
pub const DEFAULT_SLOTS_PER_EPOCH: u32 = 32;

/// A beacon network known to the dashboard.
///
/// Immutable once loaded; the active set is only ever replaced wholesale
/// when configuration reloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Unique key, used for selection and persistence.
    pub name: String,
    /// Human-readable name shown in the network switcher.
    pub display_name: String,
    /// Unix timestamp at which slot 0 begins.
    pub genesis_time: i64,
    #[serde(default = "default_seconds_per_slot")]
    pub seconds_per_slot: u32,
    #[serde(default = "default_slots_per_epoch")]
    pub slots_per_epoch: u32,
}

fn default_seconds_per_slot() -> u32 {
    DEFAULT_SECONDS_PER_SLOT
}

fn default_slots_per_epoch() -> u32 {
    DEFAULT_SLOTS_PER_EPOCH
}
