use strum::Display;
use tokio::{sync::watch, task::JoinHandle};
use tracing::debug;

use crate::{clock::SlotEpoch, head::LiveHead};

/// How the displayed slot is currently being driven.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum PlayMode {
    /// Tracking the wall clock.
    Live,
    /// Frozen by an explicit user pause.
    Paused,
    /// Pinned to a user-chosen historical slot.
    Scrubbed,
}

/// The displayed slot and how it is being driven, observed as one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub slot: i64,
    pub mode: PlayMode,
}

impl PlayerState {
    pub fn is_live(&self) -> bool {
        self.mode == PlayMode::Live
    }
}

/// Play/pause/scrub coordinator for live-updating slot displays.
///
/// Starts live at the clock's current slot. Clones share one state; every
/// transition is published atomically, so subscribers never observe a slot
/// and a mode from different transitions.
#[derive(Clone)]
pub struct SlotPlayer {
    live: LiveHead,
    state: watch::Sender<PlayerState>,
}

impl SlotPlayer {
    pub fn new(live: LiveHead) -> Self {
        let initial = PlayerState {
            slot: live.current().slot,
            mode: PlayMode::Live,
        };
        let (state, _) = watch::channel(initial);
        Self { live, state }
    }

    pub fn state(&self) -> PlayerState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlayerState> {
        self.state.subscribe()
    }

    /// Freeze the displayed slot at its current value.
    ///
    /// Only meaningful while live; a scrub position is already frozen and an
    /// extra pause must not disturb it.
    pub fn pause(&self) {
        let paused = self.state.send_if_modified(|state| {
            if state.mode != PlayMode::Live {
                return false;
            }
            state.mode = PlayMode::Paused;
            true
        });
        if paused {
            debug!(slot = self.state().slot, "player paused");
        }
    }

    /// Return to tracking the wall clock, at the clock's current slot.
    ///
    /// The displayed slot jumps straight to the live value rather than
    /// replaying the slots missed while frozen.
    pub fn resume(&self) {
        let head = self.live.current().slot;
        let resumed = self.state.send_if_modified(|state| {
            if state.is_live() {
                return false;
            }
            *state = PlayerState {
                slot: head,
                mode: PlayMode::Live,
            };
            true
        });
        if resumed {
            debug!(slot = head, "player resumed");
        }
    }

    /// Pin the displayed slot to an explicit choice.
    pub fn scrub_to(&self, slot: i64) {
        self.state.send_replace(PlayerState {
            slot,
            mode: PlayMode::Scrubbed,
        });
        debug!(slot, "player scrubbed");
    }

    /// Advance the displayed slot while live; ignored when frozen.
    pub(crate) fn apply_tick(&self, head: SlotEpoch) {
        self.state.send_if_modified(|state| {
            if state.is_live() && state.slot != head.slot {
                state.slot = head.slot;
                true
            } else {
                false
            }
        });
    }

    /// A network switch invalidates any frozen slot: back to live on the new
    /// network's clock, regardless of a pending pause or scrub.
    pub(crate) fn sync_to_network(&self) {
        let head = self.live.current().slot;
        debug!(
            network = %self.live.network().name,
            slot = head,
            mode = %PlayMode::Live,
            "network switched, player back to live"
        );
        self.state.send_replace(PlayerState {
            slot: head,
            mode: PlayMode::Live,
        });
    }

    /// Drives the player from the live feed until the last state subscriber
    /// is gone. Subscribe before calling this.
    pub fn spawn(&self, mut ticks: watch::Receiver<SlotEpoch>) -> JoinHandle<()> {
        let player = self.clone();
        let mut network_rx = player.live.subscribe_network();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;

                    _ = player.state.closed() => break,

                    changed = network_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        network_rx.borrow_and_update();
                        player.sync_to_network();
                    }

                    changed = ticks.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let head = *ticks.borrow_and_update();
                        player.apply_tick(head);
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::watch;

    use super::*;
    use crate::{
        clock::MockTime,
        config::{
            networks::{mainnet, sepolia},
            Network,
        },
    };

    struct Fixture {
        network_tx: watch::Sender<Network>,
        time: Arc<MockTime>,
        player: SlotPlayer,
    }

    /// A player on mainnet with the clock sitting at the given slot.
    fn fixture(slot: i64) -> Fixture {
        let (network_tx, network_rx) = watch::channel(mainnet());
        let time = Arc::new(MockTime::new(mainnet().genesis_time + slot * 12));
        let live = LiveHead::new(network_rx, time.clone());
        let player = SlotPlayer::new(live);
        Fixture {
            network_tx,
            time,
            player,
        }
    }

    #[test]
    fn starts_live_at_the_current_slot() {
        let Fixture { player, .. } = fixture(100);
        assert_eq!(
            player.state(),
            PlayerState {
                slot: 100,
                mode: PlayMode::Live
            }
        );
        assert!(player.state().is_live());
    }

    #[test]
    fn live_player_follows_ticks() {
        let Fixture { player, .. } = fixture(100);
        player.apply_tick(SlotEpoch {
            slot: 101,
            epoch: 3,
        });
        assert_eq!(player.state().slot, 101);
        assert!(player.state().is_live());
    }

    #[test]
    fn pause_freezes_and_resume_jumps_to_live() {
        let Fixture { player, time, .. } = fixture(100);

        player.pause();
        assert!(!player.state().is_live());
        assert_eq!(player.state().mode, PlayMode::Paused);

        // The clock moves on to slot 105; the frozen player ignores it.
        time.advance(5 * 12);
        for slot in 101..=105 {
            player.apply_tick(SlotEpoch { slot, epoch: 3 });
        }
        assert_eq!(player.state().slot, 100);

        // Resume lands directly on 105, not on the frozen 100.
        player.resume();
        assert_eq!(
            player.state(),
            PlayerState {
                slot: 105,
                mode: PlayMode::Live
            }
        );
    }

    #[test]
    fn scrub_pins_the_slot_from_any_state() {
        let Fixture { player, .. } = fixture(100);

        player.scrub_to(50);
        assert_eq!(
            player.state(),
            PlayerState {
                slot: 50,
                mode: PlayMode::Scrubbed
            }
        );

        player.pause();
        assert_eq!(player.state().mode, PlayMode::Scrubbed);

        player.scrub_to(60);
        assert_eq!(player.state().slot, 60);
    }

    #[test]
    fn resume_leaves_a_scrub() {
        let Fixture { player, time, .. } = fixture(100);

        player.scrub_to(50);
        time.advance(7 * 12);
        player.resume();

        assert_eq!(
            player.state(),
            PlayerState {
                slot: 107,
                mode: PlayMode::Live
            }
        );
    }

    #[test]
    fn network_switch_overrides_pause_and_scrub() {
        let Fixture {
            player,
            time,
            network_tx,
        } = fixture(100);

        player.pause();
        time.set(sepolia().genesis_time + 24);
        network_tx.send_replace(sepolia());
        player.sync_to_network();

        assert_eq!(
            player.state(),
            PlayerState {
                slot: 2,
                mode: PlayMode::Live
            }
        );

        player.scrub_to(9);
        player.sync_to_network();
        assert!(player.state().is_live());
        assert_eq!(player.state().slot, 2);
    }

    #[test]
    fn transitions_publish_atomically() {
        let Fixture { player, .. } = fixture(100);
        let mut state_rx = player.subscribe();

        player.pause();
        assert!(state_rx.has_changed().unwrap());
        let observed = *state_rx.borrow_and_update();
        assert_eq!(observed.slot, 100);
        assert_eq!(observed.mode, PlayMode::Paused);

        // A tick while paused publishes nothing.
        player.apply_tick(SlotEpoch {
            slot: 101,
            epoch: 3,
        });
        assert!(!state_rx.has_changed().unwrap());
    }
}
