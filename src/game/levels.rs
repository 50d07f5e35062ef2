//! XP and Level system
//!
//! Level thresholds follow `floor(100 * level^1.5)`: the XP that must be
//! banked at `level` to reach `level + 1`.

/// XP needed at `level` to advance to the next one
pub fn xp_required_for_level(level: u32) -> u64 {
    let level = level.max(1) as f64;
    (100.0 * level.powf(1.5)).floor() as u64
}

/// XP accumulated inside `level`, given lifetime XP
///
/// Subtracts every threshold below `level` from `total_xp`. Saturates at zero
/// when `total_xp` does not cover the levels below.
pub fn current_level_xp(level: u32, total_xp: u64) -> u64 {
    let spent: u64 = (1..level.max(1)).map(xp_required_for_level).sum();
    total_xp.saturating_sub(spent)
}

/// Progress through the current level (0.0 - 1.0)
pub fn progress_to_next(level: u32, xp: u64) -> f32 {
    let needed = xp_required_for_level(level);
    if needed == 0 {
        return 1.0;
    }
    (xp as f32 / needed as f32).min(1.0)
}

/// XP rewards for quests
pub struct XpRewards;

impl XpRewards {
    /// Base XP for a quest of the given difficulty (1-5)
    pub fn for_difficulty(difficulty: u8) -> u32 {
        u32::from(difficulty.clamp(1, 5)) * 10
    }

    /// Stamina spent on a quest of the given difficulty
    pub fn energy_for_difficulty(difficulty: u8) -> u32 {
        if difficulty <= 2 { 5 } else { 10 }
    }
}

/// Character title unlocked by level
#[derive(Debug, Clone)]
pub struct CharacterProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub min_level: u32,
}

/// All character profiles (must be sorted by min_level)
pub static CHARACTER_PROFILES: &[CharacterProfile] = &[
    CharacterProfile {
        name: "Life Warrior",
        title: "Personal Growth Champion",
        description: "A steadfast warrior in the battle for self-improvement",
        min_level: 1,
    },
    CharacterProfile {
        name: "Mind Guardian",
        title: "Mental Fortitude Master",
        description: "Protector of inner peace and mental resilience",
        min_level: 5,
    },
    CharacterProfile {
        name: "Habit Knight",
        title: "Routine Crusader",
        description: "Champion of daily discipline and consistent action",
        min_level: 8,
    },
    CharacterProfile {
        name: "Wisdom Seeker",
        title: "Knowledge Pathfinder",
        description: "Explorer of deeper understanding and self-awareness",
        min_level: 12,
    },
    CharacterProfile {
        name: "Spirit Wanderer",
        title: "Soul Journey Guide",
        description: "Navigator of inner landscapes and personal transformation",
        min_level: 15,
    },
    CharacterProfile {
        name: "Growth Sage",
        title: "Evolution Mentor",
        description: "Ancient wisdom keeper guiding continuous development",
        min_level: 18,
    },
    CharacterProfile {
        name: "Phoenix Rising",
        title: "Resurrection Warrior",
        description: "Born from challenges, rising stronger each time",
        min_level: 22,
    },
    CharacterProfile {
        name: "Harmony Weaver",
        title: "Balance Artisan",
        description: "Master weaver of work, rest, and personal harmony",
        min_level: 25,
    },
];

impl CharacterProfile {
    /// Pick a profile among those the level qualifies for
    ///
    /// The level itself rotates through the eligible profiles, so the choice
    /// is stable for a given level but changes as the player grows.
    pub fn for_level(level: u32) -> &'static CharacterProfile {
        let eligible = CHARACTER_PROFILES
            .iter()
            .take_while(|p| level >= p.min_level)
            .count();
        if eligible == 0 {
            return &CHARACTER_PROFILES[0];
        }
        &CHARACTER_PROFILES[level as usize % eligible]
    }
}

/// Passive skill unlocked by reaching a level
#[derive(Debug, Clone)]
pub struct SkillNode {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub required_level: u32,
    pub passive_bonus: &'static str,
}

const fn skill(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    required_level: u32,
    passive_bonus: &'static str,
) -> SkillNode {
    SkillNode {
        id,
        title,
        description,
        required_level,
        passive_bonus,
    }
}

/// Skill tree, sorted by required level
pub static SKILL_TREE: &[SkillNode] = &[
    skill("focus-1", "Gentle Focus", "Build the habit of showing up calmly.", 1, "+ clarity in daily tasks"),
    skill("energy-1", "Energy Awareness", "Notice when to act and when to rest.", 3, "+ better stamina balance"),
    skill("consistency-1", "Steady Rhythm", "Progress without rushing.", 5, "+ long-term consistency"),
    skill("resilience-1", "Resilience", "Bounce back without pressure.", 8, "+ recovery mindset"),
    skill("mindfulness-1", "Present Moment", "Cultivate awareness of the here and now.", 10, "+ mindful decision making"),
    skill("creativity-1", "Creative Flow", "Express yourself without judgment.", 12, "+ artistic inspiration"),
    skill("relationships-1", "Connection Builder", "Nurture meaningful relationships.", 15, "+ social harmony"),
    skill("learning-1", "Curious Mind", "Embrace learning as a lifelong journey.", 18, "+ knowledge absorption"),
    skill("gratitude-1", "Thankful Heart", "Find joy in what you already have.", 20, "+ positive outlook"),
    skill("discipline-1", "Inner Strength", "Align actions with values consistently.", 22, "+ self-mastery"),
    skill("compassion-1", "Kind Spirit", "Extend kindness to yourself and others.", 25, "+ empathetic connections"),
    skill("wisdom-1", "Wise Choices", "Make decisions from experience and insight.", 28, "+ sound judgment"),
];

impl SkillNode {
    pub fn is_unlocked(&self, level: u32) -> bool {
        level >= self.required_level
    }
}

/// Skills available at `level`
pub fn unlocked_skills(level: u32) -> impl Iterator<Item = &'static SkillNode> {
    SKILL_TREE.iter().filter(move |s| s.is_unlocked(level))
}

/// The next skill still locked at `level`
pub fn next_skill(level: u32) -> Option<&'static SkillNode> {
    SKILL_TREE.iter().find(|s| !s.is_unlocked(level))
}
