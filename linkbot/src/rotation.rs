//! Rotation loop: advances the current link on a timer for the life of the
//! process.
//!
//! The interval is re-read from state at the start of each wait, so a settimer
//! mid-cycle applies to the next cycle. A failed tick is logged and followed
//! by a fixed backoff; the loop only exits on shutdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{error, info};

use crate::service::BotService;

const RETRY_DELAY: Duration = Duration::from_secs(60);

/// Runs the rotation loop until a shutdown signal arrives.
pub async fn run_rotation(service: Arc<BotService>, mut shutdown: broadcast::Receiver<()>) {
    info!("Rotation loop started");
    loop {
        let interval = service.rotation_interval().await;
        tokio::select! {
            _ = shutdown.recv() => break,
            _ = tokio::time::sleep(interval) => {}
        }
        if let Err(e) = service.rotate_once().await {
            error!(error = %e, "Rotation tick failed, backing off");
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = tokio::time::sleep(RETRY_DELAY) => {}
            }
        }
    }
    info!("Rotation loop stopped");
}
