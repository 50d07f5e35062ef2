//! Companion state: affection, mood and the passive bonuses they grant

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::generator::date_hash;

pub const MAX_AFFECTION: u32 = 100;
const STARTING_AFFECTION: u32 = 50;

/// Companion mood, derived from affection bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    pub fn from_affection(affection: u32) -> Self {
        if affection > 80 {
            Self::Happy
        } else if affection > 30 {
            Self::Neutral
        } else {
            Self::Sad
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
        }
    }
}

/// Ways to spend time with the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Pet,
    Feed,
    Play,
}

impl Interaction {
    pub fn affection_gain(&self) -> u32 {
        match self {
            Self::Pet => 5,
            Self::Feed => 10,
            Self::Play => 8,
        }
    }
}

/// Bonuses other stores read from the companion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompanionBonuses {
    pub xp_multiplier: f64,
    pub stamina_regen_bonus: u32,
}

impl CompanionBonuses {
    /// Up to +20% XP and +10 stamina regen at full affection
    pub fn from_affection(affection: u32) -> Self {
        Self {
            xp_multiplier: 1.0 + (f64::from(affection) / 100.0) * 0.2,
            stamina_regen_bonus: affection / 10,
        }
    }
}

impl Default for CompanionBonuses {
    fn default() -> Self {
        Self {
            xp_multiplier: 1.0,
            stamina_regen_bonus: 0,
        }
    }
}

/// Persisted companion state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Companion {
    pub affection: u32,
    pub mood: Mood,
    pub interaction_count: u32,
    pub last_interaction: Option<DateTime<Utc>>,
    pub bonuses: CompanionBonuses,
}

impl Default for Companion {
    fn default() -> Self {
        Self {
            affection: STARTING_AFFECTION,
            mood: Mood::Neutral,
            interaction_count: 0,
            last_interaction: None,
            bonuses: CompanionBonuses::default(),
        }
    }
}

/// Owns and mutates the [`Companion`]
#[derive(Debug, Clone, Default)]
pub struct CompanionState {
    companion: Companion,
}

impl CompanionState {
    /// Hydrate from storage; mood and bonuses are re-derived from affection
    pub fn from_state(mut companion: Companion) -> Self {
        companion.affection = companion.affection.min(MAX_AFFECTION);
        companion.mood = Mood::from_affection(companion.affection);
        companion.bonuses = CompanionBonuses::from_affection(companion.affection);
        Self { companion }
    }

    pub fn state(&self) -> &Companion {
        &self.companion
    }

    pub fn mood(&self) -> Mood {
        self.companion.mood
    }

    pub fn bonuses(&self) -> CompanionBonuses {
        self.companion.bonuses
    }

    pub fn pet_companion(&mut self, now: DateTime<Local>) {
        self.interact(Interaction::Pet, now);
    }

    pub fn feed_companion(&mut self, now: DateTime<Local>) {
        self.interact(Interaction::Feed, now);
    }

    pub fn play_with_companion(&mut self, now: DateTime<Local>) {
        self.interact(Interaction::Play, now);
    }

    pub fn interact(&mut self, interaction: Interaction, now: DateTime<Local>) {
        let affection = (self.companion.affection + interaction.affection_gain()).min(MAX_AFFECTION);
        self.companion.affection = affection;
        self.companion.interaction_count += 1;
        self.companion.last_interaction = Some(now.with_timezone(&Utc));
        self.companion.mood = Mood::from_affection(affection);
        self.companion.bonuses = CompanionBonuses::from_affection(affection);
        debug!(?interaction, affection, mood = self.companion.mood.as_str(), "Companion interaction");
    }

    pub fn reset(&mut self) {
        self.companion = Companion::default();
    }
}

static COMPANION_LINES: &[&str] = &[
    "You don't need to rush today.",
    "Consistency grows quietly.",
    "Rest is part of the system.",
    "Showing up gently still counts.",
    "Small steps still matter.",
];

/// The companion's line for a calendar day
pub fn daily_line(date: NaiveDate) -> &'static str {
    COMPANION_LINES[date_hash(date) as usize % COMPANION_LINES.len()]
}
