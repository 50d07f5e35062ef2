//! Game state on disk through the SQLite store

use std::sync::Arc;

use liferpg::game::{AchievementId, Clock, Game, LogFeedback};
use liferpg::storage::{KeyValueStore, SqliteStore, keys};
use tempfile::tempdir;

use crate::common::{clock_at, first_active_daily, start_game};

#[test]
fn test_progress_survives_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("data").join("liferpg.db");
    let clock = clock_at(2024, 7, 1);

    let (player, log, streak) = {
        let storage = Arc::new(SqliteStore::open(&db_path).unwrap());
        let mut game = start_game(storage, clock.clone());
        let id = first_active_daily(&game);
        assert!(game.complete_quest(&id).is_completed());
        game.feed_companion();
        (
            game.player().state().clone(),
            game.quests().log().clone(),
            game.streak().state().clone(),
        )
    };

    let storage = Arc::new(SqliteStore::open(&db_path).unwrap());
    let mut game = Game::new(storage, clock.clone(), Arc::new(LogFeedback));
    game.load();
    assert!(!game.start_day());

    assert_eq!(game.player().state(), &player);
    assert_eq!(game.quests().log(), &log);
    assert_eq!(game.streak().state(), &streak);
    assert_eq!(game.companion().state().affection, 60);
    assert!(game
        .achievements()
        .get(AchievementId::FirstQuest)
        .unwrap()
        .unlocked);
    assert_eq!(streak.last_completed_date, Some(clock.today()));
}

#[test]
fn test_every_store_uses_its_key() {
    let dir = tempdir().unwrap();
    let storage = Arc::new(SqliteStore::open(&dir.path().join("liferpg.db")).unwrap());
    let game = start_game(storage.clone(), clock_at(2024, 7, 1));
    game.save();

    let stored = storage.keys().unwrap();
    for key in keys::ALL {
        assert!(stored.iter().any(|k| k == key), "missing {}", key);
    }
}

#[test]
fn test_dates_are_stored_as_iso_strings() {
    let dir = tempdir().unwrap();
    let storage = Arc::new(SqliteStore::open(&dir.path().join("liferpg.db")).unwrap());
    let mut game = start_game(storage.clone(), clock_at(2024, 7, 1));
    let id = first_active_daily(&game);
    game.complete_quest(&id);

    let streak = storage.get(keys::STREAK).unwrap().unwrap();
    assert_eq!(streak["last_completed_date"], "2024-07-01");
    let quests = storage.get(keys::QUESTS).unwrap().unwrap();
    assert_eq!(quests["last_generated_date"], "2024-07-01");
}

#[test]
fn test_reset_all_empties_database() {
    let dir = tempdir().unwrap();
    let storage = Arc::new(SqliteStore::open(&dir.path().join("liferpg.db")).unwrap());
    let mut game = start_game(storage.clone(), clock_at(2024, 7, 1));
    game.save();

    game.reset_all();
    assert!(storage.keys().unwrap().is_empty());
    assert_eq!(game.player().level(), 1);
    assert_eq!(game.companion().state().affection, 50);
}
