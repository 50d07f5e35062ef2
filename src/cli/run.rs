//! Foreground mode: keep stamina recovering until interrupted

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use liferpg::game::{Game, RecoveryTicker};

pub async fn run_command(game: Game, every: Duration) -> Result<()> {
    let game = Arc::new(Mutex::new(game));
    let ticker = RecoveryTicker::spawn(game.clone(), every);
    info!(interval_secs = every.as_secs(), "Recovery ticker started, Ctrl-C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;

    ticker.stop();
    let game = game.lock().expect("game lock");
    game.save();
    info!(stamina = game.player().stamina(), "Stopped");
    Ok(())
}
