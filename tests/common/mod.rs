//! Shared fixtures for game flow tests

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Local, TimeZone};
use liferpg::game::{Game, LogFeedback, ManualClock};
use liferpg::storage::KeyValueStore;

/// A clock parked at 09:00 local time on the given day
pub fn clock_at(year: i32, month: u32, day: u32) -> Arc<ManualClock> {
    let start = Local
        .with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .expect("unambiguous local time");
    Arc::new(ManualClock::new(start))
}

/// A loaded game with today's quests generated
pub fn start_game(storage: Arc<dyn KeyValueStore>, clock: Arc<ManualClock>) -> Game {
    let mut game = Game::new(storage, clock, Arc::new(LogFeedback)).with_rng_seed(7);
    game.load();
    game.start_day();
    game
}

/// Id of the first still-active quest of the daily batch
pub fn first_active_daily(game: &Game) -> String {
    game.quests()
        .daily_quests()
        .iter()
        .find(|q| q.is_active())
        .map(|q| q.id.clone())
        .expect("an active daily quest")
}
