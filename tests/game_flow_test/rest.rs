//! Exhaustion, rest days and stamina recovery

use std::sync::Arc;

use chrono::{Duration, Utc};
use liferpg::game::{Clock, CompletionOutcome, EXHAUSTION_THRESHOLD, Game, LogFeedback};
use liferpg::storage::{KeyValueStore, MemoryStore, keys};
use serde_json::json;

use crate::common::{clock_at, first_active_daily, start_game};

#[test]
fn test_rest_day_lasts_until_midnight() {
    let clock = clock_at(2024, 5, 20);
    let mut game = start_game(Arc::new(MemoryStore::new()), clock.clone());
    let id = first_active_daily(&game);

    game.take_rest_day();
    assert_eq!(game.player().stamina(), 100);
    assert!(matches!(game.complete_quest(&id), CompletionOutcome::Resting));

    clock.advance_days(1);
    game.start_day();
    assert!(!game.is_resting());
    let id = first_active_daily(&game);
    assert!(game.complete_quest(&id).is_completed());
}

#[test]
fn test_recover_ends_rest_day_early() {
    let clock = clock_at(2024, 5, 20);
    let mut game = start_game(Arc::new(MemoryStore::new()), clock);
    let id = first_active_daily(&game);

    game.take_rest_day();
    assert!(game.is_resting());
    game.recover_from_rest();
    assert!(!game.is_resting());
    assert_eq!(game.player().state().rest_day, None);
    assert!(game.complete_quest(&id).is_completed());
}

#[test]
fn test_exhausted_player_recovers_with_rest() {
    let clock = clock_at(2024, 5, 20);
    let storage = Arc::new(MemoryStore::new());
    storage
        .set(
            keys::PLAYER,
            &json!({
                "level": 1,
                "xp": 0,
                "stamina": 12,
                "last_activity_time": clock.now().with_timezone(&Utc),
            }),
        )
        .unwrap();

    let mut game = start_game(storage, clock);
    assert!(game.player().state().exhausted);
    let id = first_active_daily(&game);
    assert!(matches!(game.complete_quest(&id), CompletionOutcome::Resting));

    game.recover_from_rest();
    assert_eq!(game.player().stamina(), 42);
    assert!(!game.is_resting());
    assert!(game.complete_quest(&id).is_completed());
}

#[test]
fn test_spending_below_threshold_exhausts() {
    let clock = clock_at(2024, 5, 20);
    let storage = Arc::new(MemoryStore::new());
    storage
        .set(
            keys::PLAYER,
            &json!({
                "level": 1,
                "xp": 0,
                "stamina": EXHAUSTION_THRESHOLD + 4,
                "last_activity_time": clock.now().with_timezone(&Utc),
            }),
        )
        .unwrap();
    let mut game = start_game(storage, clock);

    let quest = game
        .quests()
        .daily_quests()
        .iter()
        .find(|q| q.energy_cost >= 5 && !q.is_challenge())
        .cloned()
        .unwrap();
    assert!(game.complete_quest(&quest.id).is_completed());
    assert!(game.player().stamina() < EXHAUSTION_THRESHOLD);
    assert!(game.is_resting());
}

#[test]
fn test_natural_recovery_is_hourly_and_capped() {
    let clock = clock_at(2024, 5, 20);
    let mut game = start_game(Arc::new(MemoryStore::new()), clock.clone());
    let id = first_active_daily(&game);
    game.complete_quest(&id);
    let after_quest = game.player().stamina();

    clock.advance(Duration::minutes(59));
    assert_eq!(game.natural_recovery(), 0);

    clock.advance(Duration::hours(12));
    assert_eq!(game.natural_recovery(), 5);
    assert_eq!(game.player().stamina(), after_quest + 5);

    // The clock restarted at the last recovery
    assert_eq!(game.natural_recovery(), 0);
}

#[test]
fn test_resume_recovers_time_spent_away() {
    let clock = clock_at(2024, 5, 20);
    let storage = Arc::new(MemoryStore::new());
    storage
        .set(
            keys::PLAYER,
            &json!({
                "level": 1,
                "xp": 0,
                "stamina": 16,
                "last_activity_time": clock.now().with_timezone(&Utc),
            }),
        )
        .unwrap();

    let game = start_game(storage.clone(), clock.clone());
    assert!(game.is_resting());

    // Next launch, ten hours later
    clock.advance(Duration::hours(10));
    let mut game = Game::new(storage, clock, Arc::new(LogFeedback));
    game.load();
    game.resume();

    assert_eq!(game.player().stamina(), 21);
    assert!(!game.is_resting());
    let id = first_active_daily(&game);
    assert!(game.complete_quest(&id).is_completed());
}
