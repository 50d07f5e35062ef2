//! Streak tracking system
//!
//! Counts consecutive calendar days with at least one completed quest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Persisted streak state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    /// Best run ever reached
    #[serde(default)]
    pub best: u32,
    /// ISO date (YYYY-MM-DD) of the last counted completion
    pub last_completed_date: Option<NaiveDate>,
}

/// Outcome of registering a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakUpdate {
    /// First completion ever, or first after a reset
    Started,
    Extended(u32),
    /// Already counted today
    Unchanged,
    /// Gap of more than one day; back to 1
    Broken { previous: u32 },
}

/// Owns and mutates the [`Streak`]
#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    streak: Streak,
}

impl StreakTracker {
    pub fn from_state(streak: Streak) -> Self {
        Self { streak }
    }

    pub fn state(&self) -> &Streak {
        &self.streak
    }

    pub fn current(&self) -> u32 {
        self.streak.current
    }

    /// Count a completion on `today`; idempotent per calendar day
    pub fn register_completion(&mut self, today: NaiveDate) -> StreakUpdate {
        let Some(last) = self.streak.last_completed_date else {
            self.set(1, today);
            return StreakUpdate::Started;
        };

        let gap = days_between(last, today);
        match gap {
            // Negative gap means the device clock went backwards
            i64::MIN..=0 => {
                debug!(%last, %today, "Streak already counted");
                StreakUpdate::Unchanged
            }
            1 => {
                let count = self.streak.current + 1;
                self.set(count, today);
                StreakUpdate::Extended(count)
            }
            _ => {
                let previous = self.streak.current;
                self.set(1, today);
                StreakUpdate::Broken { previous }
            }
        }
    }

    /// Whether the streak can still be extended (last completion today or yesterday)
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.streak
            .last_completed_date
            .is_some_and(|last| (0..=1).contains(&days_between(last, today)))
    }

    pub fn reset_streak(&mut self) {
        self.streak = Streak::default();
    }

    fn set(&mut self, current: u32, today: NaiveDate) {
        self.streak.current = current;
        self.streak.best = self.streak.best.max(current);
        self.streak.last_completed_date = Some(today);
    }
}

/// Whole calendar days from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Format a date as YYYY-MM-DD
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
