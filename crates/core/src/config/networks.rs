use super::types::{Network, DEFAULT_SECONDS_PER_SLOT, DEFAULT_SLOTS_PER_EPOCH};

pub fn mainnet() -> Network {
    Network {
        name: "mainnet".to_string(),
        display_name: "Mainnet".to_string(),
        genesis_time: 1_606_824_023,
        seconds_per_slot: DEFAULT_SECONDS_PER_SLOT,
        slots_per_epoch: DEFAULT_SLOTS_PER_EPOCH,
    }
}

pub fn sepolia() -> Network {
    Network {
        name: "sepolia".to_string(),
        display_name: "Sepolia".to_string(),
        genesis_time: 1_655_733_600,
        seconds_per_slot: DEFAULT_SECONDS_PER_SLOT,
        slots_per_epoch: DEFAULT_SLOTS_PER_EPOCH,
    }
}

pub fn holesky() -> Network {
    Network {
        name: "holesky".to_string(),
        display_name: "Holesky".to_string(),
        genesis_time: 1_695_902_400,
        seconds_per_slot: DEFAULT_SECONDS_PER_SLOT,
        slots_per_epoch: DEFAULT_SLOTS_PER_EPOCH,
    }
}

pub fn hoodi() -> Network {
    Network {
        name: "hoodi".to_string(),
        display_name: "Hoodi".to_string(),
        genesis_time: 1_742_213_400,
        seconds_per_slot: DEFAULT_SECONDS_PER_SLOT,
        slots_per_epoch: DEFAULT_SLOTS_PER_EPOCH,
    }
}

/// The preset networks, in switcher order.
pub fn all() -> Vec<Network> {
    vec![mainnet(), sepolia(), holesky(), hoodi()]
}
