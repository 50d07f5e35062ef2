//! Key-value persistence for game state
//!
//! Every store saves its whole state as one JSON blob under its own key.
//! Two backends are provided:
//!
//! - [`SqliteStore`]: a single `kv` table in `~/.liferpg/liferpg.db`
//! - [`MemoryStore`]: in-process map, for tests and throwaway sessions

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde_json::Value;

/// Error type for storage backends
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid JSON blob: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to prepare storage: {0}")]
    Io(#[from] std::io::Error),
}

/// Opaque key-value storage for JSON blobs
pub trait KeyValueStore: Send + Sync {
    /// The blob stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Store `value` under `key`, replacing what was there
    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Drop every key
    fn clear(&self) -> Result<(), StorageError>;
}

/// Storage keys, one per store
pub mod keys {
    pub const PLAYER: &str = "player-store";
    pub const QUESTS: &str = "quest-store";
    pub const CUSTOM_QUESTS: &str = "custom-quests-store";
    pub const STREAK: &str = "streak-store";
    pub const ACHIEVEMENTS: &str = "achievement-store";
    pub const COMPANION: &str = "companion-storage";

    pub const ALL: [&str; 6] = [
        PLAYER,
        QUESTS,
        CUSTOM_QUESTS,
        STREAK,
        ACHIEVEMENTS,
        COMPANION,
    ];
}
