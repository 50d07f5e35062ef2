//! Periodic natural stamina recovery
//!
//! A tokio task calls [`Game::natural_recovery`] on a fixed interval until the
//! ticker is stopped or dropped.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::session::Game;

pub const DEFAULT_RECOVERY_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Handle to the running recovery task; aborts it on drop
pub struct RecoveryTicker {
    handle: JoinHandle<()>,
}

impl RecoveryTicker {
    /// Spawn the ticker on the current tokio runtime
    ///
    /// The first tick fires immediately.
    pub fn spawn(game: Arc<Mutex<Game>>, every: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let recovered = game.lock().expect("game lock").natural_recovery();
                if recovered > 0 {
                    info!(recovered, "Stamina recovered");
                } else {
                    debug!("Recovery tick, nothing to recover");
                }
            }
        });
        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for RecoveryTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
