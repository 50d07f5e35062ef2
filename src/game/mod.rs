//! Gamification core: Quests, XP, Levels, Streaks, Achievements and the Companion
//!
//! Each store owns one piece of state. [`Game`] owns all of them, hydrates
//! them from a [`KeyValueStore`](crate::storage::KeyValueStore) and runs the
//! cross-store flows.
//!
//! # Usage
//!
//! ```ignore
//! let mut game = Game::new(storage, Arc::new(SystemClock), Arc::new(LogFeedback));
//! game.load();
//! game.resume();
//!
//! let id = game.quests().daily_quests()[0].id.clone();
//! game.complete_quest(&id);
//! ```

mod achievements;
mod clock;
mod companion;
mod definitions;
mod feedback;
mod generator;
mod levels;
mod player;
mod quests;
mod recovery;
mod session;
mod streaks;

pub use achievements::{
    AchievementEvaluator, AchievementProgress, AchievementRecord, UnlockedAchievement,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use companion::{
    Companion, CompanionBonuses, CompanionState, Interaction, Mood, daily_line,
};
pub use definitions::{
    ACHIEVEMENTS, Achievement, AchievementCategory, AchievementId, AchievementStats,
};
pub use feedback::{Feedback, LogFeedback, Sound};
pub use generator::{
    ChallengeTemplate, DAILY_CHALLENGES, DailyTheme, QUEST_TEMPLATES, QuestTemplate, Tier,
    daily_challenge, daily_theme, date_hash, generate_daily_quests,
};
pub use levels::{
    CHARACTER_PROFILES, CharacterProfile, SKILL_TREE, SkillNode, XpRewards, current_level_xp,
    next_skill, progress_to_next, unlocked_skills, xp_required_for_level,
};
pub use player::{
    EXHAUSTION_THRESHOLD, LevelUp, MAX_STAMINA, NATURAL_RECOVERY_CAP, Player, PlayerStore,
};
pub use quests::{
    CustomQuestDraft, Quest, QuestCategory, QuestKind, QuestLog, QuestStatus, QuestStore,
};
pub use recovery::{DEFAULT_RECOVERY_INTERVAL, RecoveryTicker};
pub use session::{
    CompletionOutcome, DEFAULT_QUESTS_PER_DAY, Game, GamificationEvent, QuestContext,
    complete_quest,
};
pub use streaks::{Streak, StreakTracker, StreakUpdate, days_between, iso_date};
