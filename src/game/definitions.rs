//! Achievement definitions and metadata
//!
//! All achievements are defined here with the stat they track and the
//! threshold that unlocks them.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    // Quest achievements
    FirstQuest,
    QuestNovice,
    QuestExpert,
    QuestMaster,

    // Level achievements
    Level5,
    Level10,
    Level25,

    // Streak achievements
    Streak3,
    Streak7,
    Streak30,

    // XP achievements
    Xp1000,
    Xp10000,
}

impl AchievementId {
    /// Get the string ID for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstQuest => "first-quest",
            Self::QuestNovice => "quest-novice",
            Self::QuestExpert => "quest-expert",
            Self::QuestMaster => "quest-master",
            Self::Level5 => "level-5",
            Self::Level10 => "level-10",
            Self::Level25 => "level-25",
            Self::Streak3 => "streak-3",
            Self::Streak7 => "streak-7",
            Self::Streak30 => "streak-30",
            Self::Xp1000 => "xp-1000",
            Self::Xp10000 => "xp-10000",
        }
    }

    /// Parse from storage string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first-quest" => Some(Self::FirstQuest),
            "quest-novice" => Some(Self::QuestNovice),
            "quest-expert" => Some(Self::QuestExpert),
            "quest-master" => Some(Self::QuestMaster),
            "level-5" => Some(Self::Level5),
            "level-10" => Some(Self::Level10),
            "level-25" => Some(Self::Level25),
            "streak-3" => Some(Self::Streak3),
            "streak-7" => Some(Self::Streak7),
            "streak-30" => Some(Self::Streak30),
            "xp-1000" => Some(Self::Xp1000),
            "xp-10000" => Some(Self::Xp10000),
            _ => None,
        }
    }
}

/// Achievement category; decides which stat drives progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Quests,
    Level,
    Streak,
    Xp,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quests => "Quests",
            Self::Level => "Levels",
            Self::Streak => "Streaks",
            Self::Xp => "Experience",
        }
    }

    /// The stat value this category measures
    pub fn stat(&self, stats: &AchievementStats) -> u64 {
        match self {
            Self::Quests => stats.total_quests_completed,
            Self::Level => u64::from(stats.level),
            Self::Streak => u64::from(stats.current_streak),
            Self::Xp => stats.total_xp,
        }
    }
}

/// Snapshot of player stats fed to the evaluator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AchievementStats {
    pub level: u32,
    pub total_quests_completed: u64,
    pub current_streak: u32,
    pub total_xp: u64,
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    /// Stat value that unlocks the achievement
    pub max_progress: u32,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === QUESTS ===
    Achievement {
        id: AchievementId::FirstQuest,
        title: "Quest Beginner",
        description: "Complete your first quest",
        icon: "🎯",
        category: AchievementCategory::Quests,
        max_progress: 1,
    },
    Achievement {
        id: AchievementId::QuestNovice,
        title: "Quest Novice",
        description: "Complete 10 quests",
        icon: "⚔️",
        category: AchievementCategory::Quests,
        max_progress: 10,
    },
    Achievement {
        id: AchievementId::QuestExpert,
        title: "Quest Expert",
        description: "Complete 50 quests",
        icon: "🏆",
        category: AchievementCategory::Quests,
        max_progress: 50,
    },
    Achievement {
        id: AchievementId::QuestMaster,
        title: "Quest Master",
        description: "Complete 100 quests",
        icon: "👑",
        category: AchievementCategory::Quests,
        max_progress: 100,
    },
    // === LEVEL ===
    Achievement {
        id: AchievementId::Level5,
        title: "Apprentice",
        description: "Reach level 5",
        icon: "⭐",
        category: AchievementCategory::Level,
        max_progress: 5,
    },
    Achievement {
        id: AchievementId::Level10,
        title: "Journeyman",
        description: "Reach level 10",
        icon: "🌟",
        category: AchievementCategory::Level,
        max_progress: 10,
    },
    Achievement {
        id: AchievementId::Level25,
        title: "Hero",
        description: "Reach level 25",
        icon: "⚡",
        category: AchievementCategory::Level,
        max_progress: 25,
    },
    // === STREAK ===
    Achievement {
        id: AchievementId::Streak3,
        title: "Getting Started",
        description: "Maintain a 3-day streak",
        icon: "🔥",
        category: AchievementCategory::Streak,
        max_progress: 3,
    },
    Achievement {
        id: AchievementId::Streak7,
        title: "Week Warrior",
        description: "Maintain a 7-day streak",
        icon: "🔥",
        category: AchievementCategory::Streak,
        max_progress: 7,
    },
    Achievement {
        id: AchievementId::Streak30,
        title: "Monthly Champion",
        description: "Maintain a 30-day streak",
        icon: "🏅",
        category: AchievementCategory::Streak,
        max_progress: 30,
    },
    // === XP ===
    Achievement {
        id: AchievementId::Xp1000,
        title: "Seasoned",
        description: "Earn 1,000 XP in total",
        icon: "💎",
        category: AchievementCategory::Xp,
        max_progress: 1000,
    },
    Achievement {
        id: AchievementId::Xp10000,
        title: "Veteran",
        description: "Earn 10,000 XP in total",
        icon: "💠",
        category: AchievementCategory::Xp,
        max_progress: 10000,
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}
