use std::{sync::Arc, time::Duration};

use tokio::{sync::watch, task::JoinHandle, time};
use tracing::debug;

use crate::{
    clock::{BeaconClock, SlotEpoch, TimeSource},
    config::Network,
};

/// Interval at which the live feed re-checks the wall clock.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Cheap-to-clone view of the current slot on the selected network.
///
/// Recomputes on demand, so a network switch is visible to the very next
/// call rather than to the next tick.
#[derive(Clone)]
pub struct LiveHead {
    network: watch::Receiver<Network>,
    time: Arc<dyn TimeSource>,
}

impl LiveHead {
    pub fn new(network: watch::Receiver<Network>, time: Arc<dyn TimeSource>) -> Self {
        Self { network, time }
    }

    pub fn network(&self) -> Network {
        self.network.borrow().clone()
    }

    pub fn clock(&self) -> BeaconClock {
        BeaconClock::new(&self.network.borrow())
    }

    pub fn now(&self) -> i64 {
        self.time.now()
    }

    pub fn current(&self) -> SlotEpoch {
        self.clock().slot_epoch_at(self.now())
    }

    pub(crate) fn subscribe_network(&self) -> watch::Receiver<Network> {
        self.network.clone()
    }
}

/// Publishes the live slot once per tick while anyone is listening.
pub struct SlotTicker {
    live: LiveHead,
    sender: watch::Sender<SlotEpoch>,
}

impl SlotTicker {
    pub fn new(live: LiveHead) -> Self {
        let (sender, _) = watch::channel(live.current());
        Self { live, sender }
    }

    pub fn subscribe(&self) -> watch::Receiver<SlotEpoch> {
        self.sender.subscribe()
    }

    /// Runs the feed until the last subscriber is gone.
    ///
    /// Subscribe before calling this: with no subscribers the task exits
    /// immediately. While the selected network is unchanged, published slots
    /// only move forward; a wall clock stepping backwards does not regress
    /// subscribers. A network switch republishes immediately, wherever the
    /// new network's clock lands.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(self) {
        let SlotTicker { live, sender } = self;
        let mut network_rx = live.subscribe_network();

        loop {
            tokio::select! {
                biased;

                _ = sender.closed() => break,

                changed = network_rx.changed() => {
                    if changed.is_err() {
                        // Registry gone; nothing will ever change again.
                        break;
                    }
                    let head = live.current();
                    debug!(
                        network = %network_rx.borrow_and_update().name,
                        slot = head.slot,
                        "network switched, resyncing live feed"
                    );
                    sender.send_replace(head);
                }

                _ = time::sleep(TICK_INTERVAL) => {
                    let head = live.current();
                    sender.send_if_modified(|current| {
                        if head.slot > current.slot {
                            *current = head;
                            true
                        } else {
                            false
                        }
                    });
                }
            }
        }
    }
}
