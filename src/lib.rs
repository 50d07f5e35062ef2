//! LifeRPG - a gamified self-care tracker
//!
//! Daily quests award XP and cost stamina. Levels, streaks, achievements and
//! a companion whose affection grants bonuses sit on top, all persisted as
//! JSON blobs in a key-value store.
//!
//! - [`game`]: the stores and the [`game::Game`] that owns them
//! - [`storage`]: key-value backends (SQLite and in-memory)
//! - [`config`]: `~/.liferpg/config.toml`

pub mod config;
pub mod game;
pub mod storage;
