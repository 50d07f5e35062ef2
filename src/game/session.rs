//! Game session: owns every store and drives their lifecycle
//!
//! Stores never reach each other directly. Cross-store flows such as quest
//! completion are plain functions that receive the stores they touch, and the
//! [`Game`] lends them out. State is hydrated by [`Game::load`] and written
//! back per store after each mutation; write failures are logged and dropped.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::achievements::{AchievementEvaluator, AchievementRecord, UnlockedAchievement};
use super::clock::Clock;
use super::companion::{CompanionState, Interaction};
use super::definitions::AchievementStats;
use super::feedback::{Feedback, Sound};
use super::player::{LevelUp, PlayerStore};
use super::quests::{CustomQuestDraft, Quest, QuestStatus, QuestStore};
use super::streaks::{StreakTracker, StreakUpdate};
use crate::storage::{KeyValueStore, keys};

pub const DEFAULT_QUESTS_PER_DAY: usize = 3;

/// Events that can happen while completing a quest
#[derive(Debug, Clone)]
pub enum GamificationEvent {
    XpAwarded { amount: u64, multiplier: f64 },
    LevelUp(LevelUp),
    StreakUpdated(StreakUpdate),
    AchievementUnlocked(UnlockedAchievement),
}

/// Result of a completion attempt
#[derive(Debug, Clone)]
pub enum CompletionOutcome {
    Completed {
        quest: Quest,
        events: Vec<GamificationEvent>,
    },
    /// The player is exhausted or on a rest day
    Resting,
    /// No active quest with that id
    Unavailable,
}

impl CompletionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Stores touched by quest completion
pub struct QuestContext<'a> {
    pub player: &'a mut PlayerStore,
    pub quests: &'a mut QuestStore,
    pub streak: &'a mut StreakTracker,
    pub achievements: &'a mut AchievementEvaluator,
    pub companion: &'a CompanionState,
    pub feedback: &'a dyn Feedback,
}

/// Complete quest `id` and apply its rewards across the stores
///
/// Nothing changes while resting or when the quest is missing or finished.
pub fn complete_quest(ctx: QuestContext<'_>, id: &str, now: DateTime<Local>) -> CompletionOutcome {
    let today = now.date_naive();
    if ctx.player.rest_day_active(today) {
        debug!(id, "Quest completion blocked while resting");
        return CompletionOutcome::Resting;
    }

    let Some(mut quest) = ctx.quests.active_quest(id).cloned() else {
        debug!(id, "No active quest to complete");
        return CompletionOutcome::Unavailable;
    };

    let mut events = Vec::new();

    let multiplier = ctx.companion.bonuses().xp_multiplier;
    let (amount, level_up) = ctx.player.add_xp(quest.xp_reward, multiplier);
    events.push(GamificationEvent::XpAwarded { amount, multiplier });
    if let Some(level_up) = level_up {
        ctx.feedback.play(Sound::LevelUp);
        events.push(GamificationEvent::LevelUp(level_up));
    }

    let energy = i32::try_from(quest.energy_cost).unwrap_or(i32::MAX);
    ctx.player.adjust_stamina(-energy, now);

    let streak_update = ctx.streak.register_completion(today);
    if streak_update != StreakUpdate::Unchanged {
        events.push(GamificationEvent::StreakUpdated(streak_update));
    }

    ctx.feedback.play(Sound::QuestComplete);

    let stats = AchievementStats {
        level: ctx.player.level(),
        total_quests_completed: ctx.quests.total_completed() + 1,
        current_streak: ctx.streak.current(),
        total_xp: ctx.player.state().total_xp,
    };
    let unlocked = ctx
        .achievements
        .check_achievements(&stats, now.with_timezone(&Utc));
    if !unlocked.is_empty() {
        ctx.feedback.play(Sound::Achievement);
    }
    events.extend(unlocked.into_iter().map(GamificationEvent::AchievementUnlocked));

    ctx.quests.mark_completed(id);
    info!(id, title = %quest.title, xp = amount, "Quest completed");

    quest.status = QuestStatus::Completed;
    CompletionOutcome::Completed { quest, events }
}

/// Top-level owner of all game stores
pub struct Game {
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    feedback: Arc<dyn Feedback>,
    rng: StdRng,
    quests_per_day: usize,

    player: PlayerStore,
    quests: QuestStore,
    streak: StreakTracker,
    achievements: AchievementEvaluator,
    companion: CompanionState,
}

impl Game {
    /// A fresh game; call [`Game::load`] to hydrate from storage
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        feedback: Arc<dyn Feedback>,
    ) -> Self {
        let now = clock.now();
        Self {
            storage,
            clock,
            feedback,
            rng: StdRng::from_entropy(),
            quests_per_day: DEFAULT_QUESTS_PER_DAY,
            player: PlayerStore::new(now),
            quests: QuestStore::default(),
            streak: StreakTracker::default(),
            achievements: AchievementEvaluator::default(),
            companion: CompanionState::default(),
        }
    }

    pub fn with_quests_per_day(mut self, count: usize) -> Self {
        self.quests_per_day = count;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ========================================
    // LIFECYCLE
    // ========================================

    /// Replace in-memory state with what storage holds
    ///
    /// Stores without a blob, or with one that fails to parse, keep defaults.
    pub fn load(&mut self) {
        if let Some(player) = self.read(keys::PLAYER) {
            self.player = PlayerStore::from_state(player);
        }
        let log = self.read(keys::QUESTS).unwrap_or_default();
        let custom = self.read(keys::CUSTOM_QUESTS).unwrap_or_default();
        self.quests = QuestStore::from_state(log, custom);
        if let Some(streak) = self.read(keys::STREAK) {
            self.streak = StreakTracker::from_state(streak);
        }
        let records: Vec<AchievementRecord> = self.read(keys::ACHIEVEMENTS).unwrap_or_default();
        self.achievements = AchievementEvaluator::from_records(&records);
        if let Some(companion) = self.read(keys::COMPANION) {
            self.companion = CompanionState::from_state(companion);
        }
        debug!(level = self.player.level(), "Game state loaded");
    }

    /// Write every store
    pub fn save(&self) {
        self.save_player();
        self.save_quests();
        self.save_custom_quests();
        self.save_streak();
        self.save_achievements();
        self.save_companion();
    }

    /// Generate today's quests if not done yet; returns true on a new batch
    pub fn start_day(&mut self) -> bool {
        let today = self.clock.today();
        let generated =
            self.quests
                .regenerate_daily_quests(today, self.quests_per_day, &mut self.rng);
        if generated {
            self.save_quests();
        }
        generated
    }

    /// Bring the game up to date after time spent closed
    ///
    /// Generates today's batch if needed, then runs one natural recovery tick
    /// for the hours elapsed since the last activity.
    pub fn resume(&mut self) {
        self.start_day();
        let recovered = self.natural_recovery();
        if recovered > 0 {
            info!(recovered, "Recovered stamina while away");
        }
    }

    // ========================================
    // READ ACCESS
    // ========================================

    pub fn player(&self) -> &PlayerStore {
        &self.player
    }

    pub fn quests(&self) -> &QuestStore {
        &self.quests
    }

    pub fn streak(&self) -> &StreakTracker {
        &self.streak
    }

    pub fn achievements(&self) -> &AchievementEvaluator {
        &self.achievements
    }

    pub fn companion(&self) -> &CompanionState {
        &self.companion
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn stats(&self) -> AchievementStats {
        AchievementStats {
            level: self.player.level(),
            total_quests_completed: self.quests.total_completed(),
            current_streak: self.streak.current(),
            total_xp: self.player.state().total_xp,
        }
    }

    /// Whether quest completion is currently blocked
    pub fn is_resting(&self) -> bool {
        self.player.rest_day_active(self.clock.today())
    }

    // ========================================
    // QUESTS
    // ========================================

    pub fn complete_quest(&mut self, id: &str) -> CompletionOutcome {
        let now = self.clock.now();
        let ctx = QuestContext {
            player: &mut self.player,
            quests: &mut self.quests,
            streak: &mut self.streak,
            achievements: &mut self.achievements,
            companion: &self.companion,
            feedback: self.feedback.as_ref(),
        };
        let outcome = complete_quest(ctx, id, now);

        if outcome.is_completed() {
            self.save_player();
            self.save_quests();
            self.save_streak();
            self.save_achievements();
        }
        outcome
    }

    pub fn skip_quest(&mut self, id: &str) -> bool {
        let skipped = self.quests.skip_quest(id);
        if skipped {
            self.save_quests();
        }
        skipped
    }

    pub fn add_custom_quest(&mut self, draft: CustomQuestDraft) -> String {
        let id = self.quests.add_custom_quest(draft).id.clone();
        self.save_custom_quests();
        id
    }

    pub fn remove_custom_quest(&mut self, id: &str) -> bool {
        let removed = self.quests.remove_custom_quest(id);
        if removed {
            self.save_custom_quests();
        }
        removed
    }

    pub fn repeat_custom_quest(&mut self, id: &str) -> bool {
        let repeated = self.quests.repeat_custom_quest(id);
        if repeated {
            self.save_custom_quests();
        }
        repeated
    }

    pub fn reset_custom_quests(&mut self) {
        self.quests.reset_custom_quests();
        self.save_custom_quests();
    }

    // ========================================
    // STAMINA & REST
    // ========================================

    /// Periodic stamina recovery; returns the stamina restored
    pub fn natural_recovery(&mut self) -> u32 {
        let recovered = self.player.natural_recovery(self.clock.now());
        if recovered > 0 {
            self.save_player();
        }
        recovered
    }

    pub fn take_rest_day(&mut self) {
        self.player.take_rest_day(self.clock.today());
        self.save_player();
    }

    pub fn recover_from_rest(&mut self) {
        let bonus = self.companion.bonuses().stamina_regen_bonus;
        self.player.recover_from_rest(bonus);
        self.save_player();
    }

    // ========================================
    // COMPANION
    // ========================================

    pub fn interact(&mut self, interaction: Interaction) {
        self.companion.interact(interaction, self.clock.now());
        self.save_companion();
    }

    pub fn pet_companion(&mut self) {
        self.interact(Interaction::Pet);
    }

    pub fn feed_companion(&mut self) {
        self.interact(Interaction::Feed);
    }

    pub fn play_with_companion(&mut self) {
        self.interact(Interaction::Play);
    }

    // ========================================
    // RESET
    // ========================================

    /// Reset progression (player, quest count, streak, achievements)
    ///
    /// Today's quests, custom quests and the companion are kept.
    pub fn reset_progress(&mut self) {
        self.player.reset_player(self.clock.now());
        self.quests.reset_total_completed();
        self.streak.reset_streak();
        self.achievements.reset_achievements();
        self.save_player();
        self.save_quests();
        self.save_streak();
        self.save_achievements();
        info!("Progress reset");
    }

    /// Wipe every store and the backing storage
    pub fn reset_all(&mut self) {
        self.player.reset_player(self.clock.now());
        self.quests = QuestStore::default();
        self.streak.reset_streak();
        self.achievements.reset_achievements();
        self.companion.reset();
        if let Err(e) = self.storage.clear() {
            warn!("Failed to clear storage: {}", e);
        }
        info!("All game data reset");
    }

    // ========================================
    // PERSISTENCE
    // ========================================

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = match self.storage.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, "Failed to read store: {}", e);
                return None;
            }
        };
        match serde_json::from_value(value) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(key, "Discarding unreadable store: {}", e);
                None
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, state: &T) {
        let value = match serde_json::to_value(state) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, "Failed to serialize store: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(key, &value) {
            warn!(key, "Failed to persist store: {}", e);
        }
    }

    fn save_player(&self) {
        self.write(keys::PLAYER, self.player.state());
    }

    fn save_quests(&self) {
        self.write(keys::QUESTS, self.quests.log());
    }

    fn save_custom_quests(&self) {
        self.write(keys::CUSTOM_QUESTS, self.quests.custom_quests());
    }

    fn save_streak(&self) {
        self.write(keys::STREAK, self.streak.state());
    }

    fn save_achievements(&self) {
        self.write(keys::ACHIEVEMENTS, &self.achievements.to_records());
    }

    fn save_companion(&self) {
        self.write(keys::COMPANION, self.companion.state());
    }
}
