//! Drives the composed registry → live feed → player pipeline the way a
//! dashboard view would.

use std::sync::Arc;

use lab_core::{
    clock::{MockTime, SlotEpoch},
    config::networks::{mainnet, sepolia},
    head::{LiveHead, SlotTicker},
    player::{PlayMode, SlotPlayer},
    registry::NetworkRegistry,
    store::{MemoryStore, SelectionStore},
};
use tokio::sync::watch;

#[tokio::test]
async fn player_follows_ticks_and_network_switch_wins() {
    let store = Arc::new(MemoryStore::default());
    let registry = NetworkRegistry::new(vec![mainnet(), sepolia()], store.clone()).unwrap();
    let time = Arc::new(MockTime::new(mainnet().genesis_time + 100 * 12));
    let live = LiveHead::new(registry.subscribe(), time.clone());

    let (ticks_tx, ticks_rx) = watch::channel(live.current());
    let player = SlotPlayer::new(live);
    let mut state_rx = player.subscribe();
    let service = player.spawn(ticks_rx);

    assert_eq!(state_rx.borrow_and_update().slot, 100);

    // Live: the player follows the feed.
    time.advance(12);
    ticks_tx.send_replace(SlotEpoch {
        slot: 101,
        epoch: 3,
    });
    state_rx.changed().await.unwrap();
    assert_eq!(state_rx.borrow_and_update().slot, 101);

    player.pause();
    state_rx.changed().await.unwrap();
    assert_eq!(state_rx.borrow_and_update().mode, PlayMode::Paused);

    // A network switch beats the pause: live again on the new clock,
    // and the selection is persisted.
    time.set(sepolia().genesis_time + 24);
    registry.select("sepolia");
    state_rx.changed().await.unwrap();
    let state = *state_rx.borrow_and_update();
    assert_eq!(state.mode, PlayMode::Live);
    assert_eq!(state.slot, 2);
    assert_eq!(store.load().unwrap(), Some("sepolia".to_string()));

    drop(state_rx);
    service.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn scrub_and_resume_against_a_running_feed() {
    let registry =
        NetworkRegistry::new(vec![mainnet()], Arc::new(MemoryStore::default())).unwrap();
    let time = Arc::new(MockTime::new(mainnet().genesis_time + 100 * 12));
    let live = LiveHead::new(registry.subscribe(), time.clone());

    let ticker = SlotTicker::new(live.clone());
    let player = SlotPlayer::new(live);
    let mut state_rx = player.subscribe();
    let ticks_rx = ticker.subscribe();
    let _ticker_service = ticker.spawn();
    let _player_service = player.spawn(ticks_rx);

    // The feed picks up wall-clock movement and the live player follows.
    time.advance(2 * 12);
    state_rx.changed().await.unwrap();
    assert_eq!(state_rx.borrow_and_update().slot, 102);

    player.scrub_to(50);
    state_rx.changed().await.unwrap();
    let state = *state_rx.borrow_and_update();
    assert_eq!(state.mode, PlayMode::Scrubbed);
    assert_eq!(state.slot, 50);
    assert!(!state.is_live());

    // The clock keeps moving while scrubbed; resume jumps straight to it.
    time.advance(12);
    player.resume();
    state_rx.changed().await.unwrap();
    let state = *state_rx.borrow_and_update();
    assert_eq!(state.mode, PlayMode::Live);
    assert_eq!(state.slot, 103);
}
