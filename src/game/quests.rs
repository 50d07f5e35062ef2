//! Quest types and the quest store
//!
//! Daily quests are generated once per calendar day. Custom quests are
//! created by the player, live in their own list and survive regeneration.
//! Every quest moves `Active -> Completed` or `Active -> Skipped`; both end
//! states are terminal for daily quests.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::generator::generate_daily_quests;
use super::levels::XpRewards;

/// Quest category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestCategory {
    Health,
    Mindfulness,
    Productivity,
    Social,
    Creativity,
    Learning,
    /// Reserved for daily challenges
    Special,
}

impl QuestCategory {
    /// Categories eligible for themed daily quests
    pub const THEMED: [QuestCategory; 6] = [
        Self::Health,
        Self::Mindfulness,
        Self::Productivity,
        Self::Social,
        Self::Creativity,
        Self::Learning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Mindfulness => "mindfulness",
            Self::Productivity => "productivity",
            Self::Social => "social",
            Self::Creativity => "creativity",
            Self::Learning => "learning",
            Self::Special => "special",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "health" => Some(Self::Health),
            "mindfulness" => Some(Self::Mindfulness),
            "productivity" => Some(Self::Productivity),
            "social" => Some(Self::Social),
            "creativity" => Some(Self::Creativity),
            "learning" => Some(Self::Learning),
            "special" => Some(Self::Special),
            _ => None,
        }
    }

    pub fn default_icon(&self) -> &'static str {
        match self {
            Self::Health => "💪",
            Self::Mindfulness => "🧘",
            Self::Productivity => "📋",
            Self::Social => "🤝",
            Self::Creativity => "🎨",
            Self::Learning => "📚",
            Self::Special => "⭐",
        }
    }
}

/// Quest lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    Active,
    Completed,
    Skipped,
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}

/// Where a quest came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    /// Part of the themed daily batch
    Daily,
    /// The date-selected daily challenge
    Challenge,
    /// Created by the player
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub category: QuestCategory,
    /// 1-5
    pub difficulty: u8,
    pub xp_reward: u32,
    pub energy_cost: u32,
    pub status: QuestStatus,
    pub icon: String,
    pub kind: QuestKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Quest {
    pub fn is_challenge(&self) -> bool {
        self.kind == QuestKind::Challenge
    }

    pub fn is_active(&self) -> bool {
        self.status == QuestStatus::Active
    }
}

/// Fields the player chooses for a custom quest
#[derive(Debug, Clone)]
pub struct CustomQuestDraft {
    pub title: String,
    pub category: QuestCategory,
    pub difficulty: u8,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Persisted daily quest list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestLog {
    pub quests: Vec<Quest>,
    pub last_generated_date: Option<NaiveDate>,
    /// Lifetime count of completed quests, daily and custom
    #[serde(default)]
    pub total_completed: u64,
}

/// Owns the daily quest log and the custom quest list
#[derive(Debug, Clone, Default)]
pub struct QuestStore {
    log: QuestLog,
    custom: Vec<Quest>,
}

impl QuestStore {
    pub fn from_state(log: QuestLog, custom: Vec<Quest>) -> Self {
        Self { log, custom }
    }

    pub fn log(&self) -> &QuestLog {
        &self.log
    }

    pub fn daily_quests(&self) -> &[Quest] {
        &self.log.quests
    }

    pub fn custom_quests(&self) -> &[Quest] {
        &self.custom
    }

    pub fn total_completed(&self) -> u64 {
        self.log.total_completed
    }

    /// Replace the daily batch if `today` is past the last generated date
    ///
    /// Returns true when a new batch was generated. A date earlier than the
    /// stored one keeps the current batch.
    pub fn regenerate_daily_quests<R: Rng + ?Sized>(
        &mut self,
        today: NaiveDate,
        count: usize,
        rng: &mut R,
    ) -> bool {
        if let Some(last) = self.log.last_generated_date {
            if today <= last {
                debug!(%last, %today, "Daily quests already generated");
                return false;
            }
        }

        self.log.quests = generate_daily_quests(today, count, rng);
        self.log.last_generated_date = Some(today);
        info!(%today, count = self.log.quests.len(), "Generated daily quests");
        true
    }

    pub fn find(&self, id: &str) -> Option<&Quest> {
        self.log
            .quests
            .iter()
            .chain(self.custom.iter())
            .find(|q| q.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Quest> {
        self.log
            .quests
            .iter_mut()
            .chain(self.custom.iter_mut())
            .find(|q| q.id == id)
    }

    /// The quest with `id`, only if it can still be completed
    pub fn active_quest(&self, id: &str) -> Option<&Quest> {
        self.find(id).filter(|q| q.is_active())
    }

    /// Move an active quest to completed; false if missing or terminal
    pub fn mark_completed(&mut self, id: &str) -> bool {
        let Some(quest) = self.find_mut(id).filter(|q| q.is_active()) else {
            return false;
        };
        quest.status = QuestStatus::Completed;
        self.log.total_completed += 1;
        true
    }

    /// Move an active quest to skipped; no rewards
    pub fn skip_quest(&mut self, id: &str) -> bool {
        match self.find_mut(id) {
            Some(quest) if quest.is_active() => {
                quest.status = QuestStatus::Skipped;
                debug!(id, "Quest skipped");
                true
            }
            _ => false,
        }
    }

    pub fn add_custom_quest(&mut self, draft: CustomQuestDraft) -> &Quest {
        let difficulty = draft.difficulty.clamp(1, 5);
        let quest = Quest {
            id: format!("custom-{}", uuid::Uuid::new_v4()),
            title: draft.title,
            category: draft.category,
            difficulty,
            xp_reward: XpRewards::for_difficulty(difficulty),
            energy_cost: XpRewards::energy_for_difficulty(difficulty),
            status: QuestStatus::Active,
            icon: draft
                .icon
                .unwrap_or_else(|| draft.category.default_icon().to_string()),
            kind: QuestKind::Custom,
            description: draft.description,
        };
        self.custom.push(quest);
        &self.custom[self.custom.len() - 1]
    }

    pub fn remove_custom_quest(&mut self, id: &str) -> bool {
        let before = self.custom.len();
        self.custom.retain(|q| q.id != id);
        self.custom.len() != before
    }

    /// Put a finished custom quest back to active
    pub fn repeat_custom_quest(&mut self, id: &str) -> bool {
        match self.custom.iter_mut().find(|q| q.id == id) {
            Some(quest) if !quest.is_active() => {
                quest.status = QuestStatus::Active;
                true
            }
            _ => false,
        }
    }

    pub fn reset_custom_quests(&mut self) {
        self.custom.clear();
    }

    /// Zero the lifetime completion count, keeping today's batch
    pub fn reset_total_completed(&mut self) {
        self.log.total_completed = 0;
    }

    /// Forget the daily batch and lifetime count
    pub fn reset(&mut self) {
        self.log = QuestLog::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    fn store_for(today: NaiveDate) -> QuestStore {
        let mut store = QuestStore::default();
        let mut rng = StdRng::seed_from_u64(7);
        store.regenerate_daily_quests(today, 3, &mut rng);
        store
    }

    fn draft(title: &str) -> CustomQuestDraft {
        CustomQuestDraft {
            title: title.to_string(),
            category: QuestCategory::Creativity,
            difficulty: 4,
            description: None,
            icon: None,
        }
    }

    #[test]
    fn test_regenerate_once_per_day() {
        let mut store = store_for(day(1));
        let first: Vec<_> = store.daily_quests().iter().map(|q| q.id.clone()).collect();
        assert_eq!(first.len(), 4);

        let mut rng = StdRng::seed_from_u64(99);
        assert!(!store.regenerate_daily_quests(day(1), 3, &mut rng));
        let again: Vec<_> = store.daily_quests().iter().map(|q| q.id.clone()).collect();
        assert_eq!(first, again);

        assert!(store.regenerate_daily_quests(day(2), 3, &mut rng));
        assert_eq!(store.log().last_generated_date, Some(day(2)));
        assert!(store.daily_quests().iter().all(|q| !first.contains(&q.id)));
    }

    #[test]
    fn test_backwards_clock_keeps_batch() {
        let mut store = store_for(day(5));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!store.regenerate_daily_quests(day(4), 3, &mut rng));
        assert_eq!(store.log().last_generated_date, Some(day(5)));
    }

    #[test]
    fn test_complete_and_skip_are_terminal() {
        let mut store = store_for(day(1));
        let a = store.daily_quests()[0].id.clone();
        let b = store.daily_quests()[1].id.clone();

        assert!(store.mark_completed(&a));
        assert!(!store.mark_completed(&a));
        assert!(!store.skip_quest(&a));
        assert_eq!(store.total_completed(), 1);

        assert!(store.skip_quest(&b));
        assert!(!store.mark_completed(&b));
        assert_eq!(store.find(&b).unwrap().status, QuestStatus::Skipped);
        assert!(store.active_quest(&b).is_none());
    }

    #[test]
    fn test_unknown_quest_is_ignored() {
        let mut store = store_for(day(1));
        assert!(!store.mark_completed("nope"));
        assert!(!store.skip_quest("nope"));
        assert_eq!(store.total_completed(), 0);
    }

    #[test]
    fn test_custom_quest_lifecycle() {
        let mut store = store_for(day(1));
        let id = store.add_custom_quest(draft("Sketch a bird")).id.clone();

        let quest = store.find(&id).unwrap();
        assert_eq!(quest.kind, QuestKind::Custom);
        assert_eq!(quest.xp_reward, 40);
        assert_eq!(quest.energy_cost, 10);
        assert_eq!(quest.icon, "🎨");

        assert!(store.mark_completed(&id));
        assert!(store.repeat_custom_quest(&id));
        assert!(store.active_quest(&id).is_some());
        assert!(!store.repeat_custom_quest(&id));

        assert!(store.remove_custom_quest(&id));
        assert!(store.find(&id).is_none());
    }

    #[test]
    fn test_custom_quests_survive_regeneration() {
        let mut store = store_for(day(1));
        let id = store.add_custom_quest(draft("Write a haiku")).id.clone();

        let mut rng = StdRng::seed_from_u64(3);
        store.regenerate_daily_quests(day(2), 3, &mut rng);
        assert!(store.find(&id).is_some());

        store.reset_custom_quests();
        assert!(store.custom_quests().is_empty());
    }

    #[test]
    fn test_quest_serializes_lowercase_enums() {
        let store = store_for(day(1));
        let json = serde_json::to_value(&store.daily_quests()[0]).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["kind"], "daily");
    }
}
