//! Daily quest generation and streaks over several days

use std::sync::Arc;

use liferpg::game::{
    Clock, CompletionOutcome, CustomQuestDraft, GamificationEvent, QuestCategory, QuestKind,
    StreakUpdate, daily_challenge,
};
use liferpg::storage::MemoryStore;

use crate::common::{clock_at, first_active_daily, start_game};

#[test]
fn test_batch_has_themed_quests_then_challenge() {
    let clock = clock_at(2024, 3, 11);
    let game = start_game(Arc::new(MemoryStore::new()), clock.clone());

    let quests = game.quests().daily_quests();
    assert_eq!(quests.len(), 4);
    assert!(quests[..3].iter().all(|q| q.kind == QuestKind::Daily));

    let challenge = &quests[3];
    assert!(challenge.is_challenge());
    assert_eq!(challenge.title, daily_challenge(clock.today()).title);
}

#[test]
fn test_same_day_keeps_batch() {
    let clock = clock_at(2024, 3, 11);
    let mut game = start_game(Arc::new(MemoryStore::new()), clock.clone());
    let before = game.quests().log().clone();

    clock.advance(chrono::Duration::hours(8));
    assert!(!game.start_day());
    assert_eq!(game.quests().log(), &before);
}

#[test]
fn test_new_day_replaces_batch() {
    let clock = clock_at(2024, 3, 11);
    let mut game = start_game(Arc::new(MemoryStore::new()), clock.clone());
    let id = first_active_daily(&game);
    assert!(game.complete_quest(&id).is_completed());

    clock.advance_days(1);
    assert!(game.start_day());
    assert!(game.quests().daily_quests().iter().all(|q| q.is_active()));
    assert!(game.quests().find(&id).is_none());
    // Lifetime count survives regeneration
    assert_eq!(game.quests().total_completed(), 1);
}

#[test]
fn test_streak_extends_then_breaks() {
    let clock = clock_at(2024, 3, 11);
    let mut game = start_game(Arc::new(MemoryStore::new()), clock.clone());

    let id = first_active_daily(&game);
    game.complete_quest(&id);
    assert_eq!(game.streak().current(), 1);

    // A second completion the same day does not count twice
    let id = first_active_daily(&game);
    game.complete_quest(&id);
    assert_eq!(game.streak().current(), 1);

    clock.advance_days(1);
    game.start_day();
    let id = first_active_daily(&game);
    let CompletionOutcome::Completed { events, .. } = game.complete_quest(&id) else {
        panic!("quest should complete");
    };
    assert_eq!(game.streak().current(), 2);
    assert!(events.iter().any(|e| matches!(
        e,
        GamificationEvent::StreakUpdated(StreakUpdate::Extended(2))
    )));

    clock.advance_days(2);
    assert!(!game.streak().is_active(clock.today()));
    game.start_day();
    let id = first_active_daily(&game);
    game.complete_quest(&id);
    assert_eq!(game.streak().current(), 1);
    assert_eq!(game.streak().state().best, 2);
}

#[test]
fn test_skipped_quest_gives_nothing() {
    let clock = clock_at(2024, 3, 11);
    let mut game = start_game(Arc::new(MemoryStore::new()), clock);
    let id = first_active_daily(&game);

    assert!(game.skip_quest(&id));
    assert!(matches!(
        game.complete_quest(&id),
        CompletionOutcome::Unavailable
    ));
    assert_eq!(game.player().state().total_xp, 0);
    assert_eq!(game.streak().current(), 0);
    assert!(!game.skip_quest(&id));
}

#[test]
fn test_custom_quest_repeat_cycle() {
    let clock = clock_at(2024, 3, 11);
    let mut game = start_game(Arc::new(MemoryStore::new()), clock);

    let id = game.add_custom_quest(CustomQuestDraft {
        title: "Call grandma".to_string(),
        category: QuestCategory::Social,
        difficulty: 3,
        description: None,
        icon: None,
    });

    assert!(game.complete_quest(&id).is_completed());
    assert_eq!(game.player().state().total_xp, 30);
    assert!(!game.complete_quest(&id).is_completed());

    assert!(game.repeat_custom_quest(&id));
    assert!(game.complete_quest(&id).is_completed());
    assert_eq!(game.quests().total_completed(), 2);

    assert!(game.remove_custom_quest(&id));
    assert!(game.quests().custom_quests().is_empty());
}
