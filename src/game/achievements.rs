//! Achievement evaluation
//!
//! Projects a stat snapshot onto every locked achievement and unlocks those
//! that reach their target. Unlocks are permanent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::definitions::{ACHIEVEMENTS, Achievement, AchievementId, AchievementStats};

/// An achievement that was just unlocked
#[derive(Debug, Clone)]
pub struct UnlockedAchievement {
    pub achievement: &'static Achievement,
    pub unlocked_at: DateTime<Utc>,
}

/// Progress of a single achievement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementProgress {
    pub id: AchievementId,
    pub progress: u32,
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl AchievementProgress {
    fn locked(id: AchievementId) -> Self {
        Self {
            id,
            progress: 0,
            unlocked: false,
            unlocked_at: None,
        }
    }

    pub fn definition(&self) -> &'static Achievement {
        Achievement::get(self.id)
    }
}

/// Stored form of [`AchievementProgress`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub id: String,
    pub progress: u32,
    pub unlocked: bool,
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Owns achievement progress for every defined achievement
#[derive(Debug, Clone)]
pub struct AchievementEvaluator {
    entries: Vec<AchievementProgress>,
}

impl Default for AchievementEvaluator {
    fn default() -> Self {
        Self {
            entries: ACHIEVEMENTS
                .iter()
                .map(|a| AchievementProgress::locked(a.id))
                .collect(),
        }
    }
}

impl AchievementEvaluator {
    /// Rebuild from stored records
    ///
    /// Unknown ids are dropped; definitions without a record start locked.
    pub fn from_records(records: &[AchievementRecord]) -> Self {
        let mut evaluator = Self::default();
        for record in records {
            let Some(id) = AchievementId::from_str(&record.id) else {
                warn!(id = %record.id, "Ignoring unknown achievement record");
                continue;
            };
            if let Some(entry) = evaluator.entries.iter_mut().find(|e| e.id == id) {
                let max = entry.definition().max_progress;
                entry.progress = record.progress.min(max);
                entry.unlocked = record.unlocked;
                entry.unlocked_at = record.unlocked_at;
                if entry.unlocked {
                    entry.progress = max;
                }
            }
        }
        evaluator
    }

    pub fn to_records(&self) -> Vec<AchievementRecord> {
        self.entries
            .iter()
            .map(|e| AchievementRecord {
                id: e.id.as_str().to_string(),
                progress: e.progress,
                unlocked: e.unlocked,
                unlocked_at: e.unlocked_at,
            })
            .collect()
    }

    pub fn entries(&self) -> &[AchievementProgress] {
        &self.entries
    }

    pub fn get(&self, id: AchievementId) -> Option<&AchievementProgress> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Update progress from `stats` and unlock what reached its target
    ///
    /// Returns only achievements unlocked by this call, so repeating it with
    /// the same stats returns an empty list.
    pub fn check_achievements(
        &mut self,
        stats: &AchievementStats,
        now: DateTime<Utc>,
    ) -> Vec<UnlockedAchievement> {
        let mut newly_unlocked = Vec::new();

        for entry in self.entries.iter_mut().filter(|e| !e.unlocked) {
            let definition = Achievement::get(entry.id);
            let max = definition.max_progress;
            let stat = definition.category.stat(stats);
            entry.progress = u32::try_from(stat).unwrap_or(u32::MAX).min(max);

            if entry.progress >= max {
                entry.unlocked = true;
                entry.unlocked_at = Some(now);
                info!(id = entry.id.as_str(), title = definition.title, "Achievement unlocked");
                newly_unlocked.push(UnlockedAchievement {
                    achievement: definition,
                    unlocked_at: now,
                });
            }
        }

        newly_unlocked
    }

    pub fn unlocked(&self) -> Vec<&AchievementProgress> {
        self.entries.iter().filter(|e| e.unlocked).collect()
    }

    pub fn unlocked_count(&self) -> usize {
        self.entries.iter().filter(|e| e.unlocked).count()
    }

    /// Most recently unlocked first
    pub fn recent(&self, limit: usize) -> Vec<&AchievementProgress> {
        let mut unlocked: Vec<_> = self
            .entries
            .iter()
            .filter(|e| e.unlocked && e.unlocked_at.is_some())
            .collect();
        unlocked.sort_by(|a, b| b.unlocked_at.cmp(&a.unlocked_at));
        unlocked.truncate(limit);
        unlocked
    }

    pub fn reset_achievements(&mut self) {
        *self = Self::default();
    }
}
