//! Settings configuration types

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Themed quests in each daily batch (the daily challenge comes on top)
    #[serde(default = "default_quests_per_day")]
    pub quests_per_day: usize,

    /// Minutes between natural stamina recovery ticks
    #[serde(default = "default_recovery_interval_minutes")]
    pub recovery_interval_minutes: u64,

    /// Database file, relative to the config directory unless absolute
    #[serde(default = "default_database")]
    pub database: PathBuf,
}

fn default_quests_per_day() -> usize {
    3
}

fn default_recovery_interval_minutes() -> u64 {
    30
}

fn default_database() -> PathBuf {
    PathBuf::from("liferpg.db")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quests_per_day: default_quests_per_day(),
            recovery_interval_minutes: default_recovery_interval_minutes(),
            database: default_database(),
        }
    }
}

impl Settings {
    pub fn recovery_interval(&self) -> Duration {
        Duration::from_secs(self.recovery_interval_minutes.max(1).saturating_mul(60))
    }
}
