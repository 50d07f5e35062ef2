//! Configuration loading and management

mod io;
mod settings;

pub use settings::Settings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Resolve the database path against `base_dir`
    pub fn database_path(&self, base_dir: &Path) -> PathBuf {
        if self.settings.database.is_absolute() {
            self.settings.database.clone()
        } else {
            base_dir.join(&self.settings.database)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[settings]\nquests_per_day = 5\n").unwrap();
        assert_eq!(config.settings.quests_per_day, 5);
        assert_eq!(config.settings.recovery_interval_minutes, 30);
        assert_eq!(config.settings.database, PathBuf::from("liferpg.db"));
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_database_path_resolution() {
        let mut config = Config::default();
        let base = Path::new("/tmp/liferpg");
        assert_eq!(config.database_path(base), base.join("liferpg.db"));

        config.settings.database = PathBuf::from("/var/lib/liferpg/game.db");
        assert_eq!(
            config.database_path(base),
            PathBuf::from("/var/lib/liferpg/game.db")
        );
    }

    #[test]
    fn test_recovery_interval_never_zero() {
        let mut config = Config::default();
        config.settings.recovery_interval_minutes = 0;
        assert_eq!(config.settings.recovery_interval().as_secs(), 60);
    }

    #[test]
    fn test_huge_recovery_interval_saturates() {
        let mut config = Config::default();
        config.settings.recovery_interval_minutes = u64::MAX;
        assert_eq!(config.settings.recovery_interval().as_secs(), u64::MAX);
    }
}
