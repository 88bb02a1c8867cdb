use std::{
    sync::atomic::{AtomicI64, Ordering},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use crate::config::Network;

/// A slot/epoch pair derived from wall-clock time. Derived, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotEpoch {
    pub slot: i64,
    pub epoch: i64,
}

/// Wall-clock seconds provider, swapped for [MockTime] in tests.
pub trait TimeSource: Send + Sync {
    /// Current unix timestamp in seconds.
    fn now(&self) -> i64;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn now(&self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("`now` is ahead of `UNIX_EPOCH`");
        now.as_secs() as i64
    }
}

/// Settable time source for tests.
#[derive(Debug, Default)]
pub struct MockTime(AtomicI64);

impl MockTime {
    pub fn new(now: i64) -> Self {
        Self(AtomicI64::new(now))
    }

    pub fn set(&self, now: i64) {
        self.0.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.0.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl TimeSource for MockTime {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Derives slots and epochs from a network's genesis time.
///
/// Pure arithmetic with floor semantics: a timestamp before genesis yields a
/// negative slot (and epoch), which consumers use to count down to slot 0.
#[derive(Clone, Copy, Debug)]
pub struct BeaconClock {
    genesis_time: i64,
    seconds_per_slot: i64,
    slots_per_epoch: i64,
}

impl BeaconClock {
    pub fn new(network: &Network) -> Self {
        Self {
            genesis_time: network.genesis_time,
            seconds_per_slot: i64::from(network.seconds_per_slot),
            slots_per_epoch: i64::from(network.slots_per_epoch),
        }
    }

    /// The slot in progress at the given timestamp.
    pub fn slot_at(&self, now: i64) -> i64 {
        (now - self.genesis_time).div_euclid(self.seconds_per_slot)
    }

    /// The epoch containing the given slot.
    pub fn epoch_of(&self, slot: i64) -> i64 {
        slot.div_euclid(self.slots_per_epoch)
    }

    pub fn slot_epoch_at(&self, now: i64) -> SlotEpoch {
        let slot = self.slot_at(now);
        SlotEpoch {
            slot,
            epoch: self.epoch_of(slot),
        }
    }

    /// Timestamp at which the given slot begins.
    pub fn timestamp_of_slot(&self, slot: i64) -> i64 {
        self.genesis_time + slot * self.seconds_per_slot
    }

    /// Time remaining until the next slot boundary.
    pub fn duration_until_next_slot(&self, now: i64) -> Duration {
        let next = self.timestamp_of_slot(self.slot_at(now) + 1);
        Duration::from_secs((next - now) as u64)
    }
}
