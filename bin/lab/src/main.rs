#![warn(clippy::unwrap_used)]

use std::sync::Arc;

use anyhow::Result;
use lab_core::{
    clock::WallClock,
    config::{self, networks},
    head::{LiveHead, SlotTicker},
    registry::NetworkRegistry,
    store::FileStore,
};
use lab_utils::{dir::setup_data_dir, log::init_tracing_logger};
use tracing::info;

mod cli;

use cli::{LabConfig, APP_NAME};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_logger();
    let config = LabConfig::from_cli();

    let networks = match &config.networks_file {
        Some(path) => config::load_networks(path)?,
        None => networks::all(),
    };

    let data_dir = setup_data_dir(APP_NAME, config.data_dir.clone(), config.ephemeral)?;
    let store = Arc::new(FileStore::new(data_dir));

    let registry = NetworkRegistry::new(networks, store)?;
    if let Some(name) = &config.network {
        registry.select(name);
    }

    let live = LiveHead::new(registry.subscribe(), Arc::new(WallClock));
    let ticker = SlotTicker::new(live.clone());
    let mut head_rx = ticker.subscribe();
    let _ticker_task = ticker.spawn();

    let network = registry.current();
    let now = live.now();
    let clock = live.clock();
    info!(
        network = %network.name,
        slot = clock.slot_at(now),
        next_slot_in = ?clock.duration_until_next_slot(now),
        "lab core started"
    );

    let _feed_task = tokio::spawn(async move {
        while head_rx.changed().await.is_ok() {
            let head = *head_rx.borrow_and_update();
            info!(
                network = %live.network().name,
                slot = head.slot,
                epoch = head.epoch,
                "beacon head"
            );
        }
    });

    tokio::signal::ctrl_c()
        .await
        .expect("failed to pause until ctrl-c");

    Ok(())
}
