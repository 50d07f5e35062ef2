//! Daily quest generation
//!
//! A daily batch is `count` themed quests followed by one challenge. Themed
//! quests pick a random category and difficulty, then a template of that
//! category whose tier matches the difficulty. The challenge is picked by
//! hashing the ISO date, so every session on the same date sees the same one.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;

use super::levels::XpRewards;
use super::quests::{Quest, QuestCategory, QuestKind, QuestStatus};
use super::streaks::iso_date;

/// Difficulty band a template is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Difficulty 1-2
    Gentle,
    /// Difficulty 3
    Normal,
    /// Difficulty 4-5
    Stretch,
}

impl Tier {
    pub fn for_difficulty(difficulty: u8) -> Self {
        match difficulty {
            0..=2 => Self::Gentle,
            3 => Self::Normal,
            _ => Self::Stretch,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuestTemplate {
    pub category: QuestCategory,
    pub tier: Tier,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

const fn template(
    category: QuestCategory,
    tier: Tier,
    title: &'static str,
    icon: &'static str,
    description: &'static str,
) -> QuestTemplate {
    QuestTemplate {
        category,
        tier,
        title,
        icon,
        description,
    }
}

use self::Tier::{Gentle, Normal, Stretch};
use super::quests::QuestCategory::{
    Creativity, Health, Learning, Mindfulness, Productivity, Social,
};

/// Themed quest templates
pub static QUEST_TEMPLATES: &[QuestTemplate] = &[
    // === HEALTH ===
    template(Health, Gentle, "Drink a glass of water", "💧", "Hydrate before anything else"),
    template(Health, Gentle, "Stretch for 5 minutes", "🤸", "Loosen up your shoulders and back"),
    template(Health, Normal, "Walk for 10 minutes", "🚶", "A short walk, outside if you can"),
    template(Health, Stretch, "Do light exercise for 20 minutes", "🏃", "Anything that raises your heart rate"),
    // === MINDFULNESS ===
    template(Mindfulness, Gentle, "Take 3 deep breaths", "🌬️", "Slow inhale, slower exhale"),
    template(Mindfulness, Normal, "Meditate for 10 minutes", "🧘", "Sit quietly and follow your breath"),
    template(Mindfulness, Stretch, "Spend an hour offline", "📵", "No screens, no notifications"),
    // === PRODUCTIVITY ===
    template(Productivity, Gentle, "Clear one small task", "✅", "Pick the easiest item on your list"),
    template(Productivity, Normal, "Organize your desk", "🗂️", "Leave only what you need today"),
    template(Productivity, Stretch, "Complete a focused 30-minute task", "⏱️", "One task, no switching"),
    template(Productivity, Stretch, "Plan tomorrow's top 3 tasks", "📝", "Write them down before bed"),
    // === SOCIAL ===
    template(Social, Gentle, "Send a kind message", "💌", "Tell someone you appreciate them"),
    template(Social, Normal, "Call a friend or family member", "📞", "Voice, not text"),
    template(Social, Stretch, "Plan a meetup", "🗓️", "Put a date in the calendar with someone"),
    // === CREATIVITY ===
    template(Creativity, Gentle, "Doodle for 5 minutes", "✏️", "No goal, just lines"),
    template(Creativity, Normal, "Write a short journal entry", "📓", "A few sentences about today"),
    template(Creativity, Stretch, "Make something from scratch", "🎨", "Cook, draw, build or write"),
    // === LEARNING ===
    template(Learning, Gentle, "Learn one new word", "🔤", "Look it up and use it once"),
    template(Learning, Normal, "Read 5 pages of a book", "📖", "Fiction or not, it all counts"),
    template(Learning, Stretch, "Study a topic for 30 minutes", "🎓", "Take notes as you go"),
];

/// A fixed daily challenge
#[derive(Debug, Clone)]
pub struct ChallengeTemplate {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub difficulty: u8,
    pub xp_reward: u32,
    pub energy_cost: u32,
}

/// Challenge list indexed by date hash
pub static DAILY_CHALLENGES: &[ChallengeTemplate] = &[
    ChallengeTemplate {
        title: "Sunrise Start",
        icon: "🌅",
        description: "Be up and moving before 7am",
        difficulty: 4,
        xp_reward: 75,
        energy_cost: 15,
    },
    ChallengeTemplate {
        title: "Digital Detox",
        icon: "📴",
        description: "Three hours without social media",
        difficulty: 4,
        xp_reward: 70,
        energy_cost: 10,
    },
    ChallengeTemplate {
        title: "10,000 Steps",
        icon: "👟",
        description: "Reach ten thousand steps today",
        difficulty: 5,
        xp_reward: 90,
        energy_cost: 20,
    },
    ChallengeTemplate {
        title: "Gratitude Trio",
        icon: "🙏",
        description: "Write down three things you are grateful for",
        difficulty: 2,
        xp_reward: 40,
        energy_cost: 5,
    },
    ChallengeTemplate {
        title: "Deep Work Hour",
        icon: "🧠",
        description: "One uninterrupted hour on your most important task",
        difficulty: 5,
        xp_reward: 100,
        energy_cost: 20,
    },
    ChallengeTemplate {
        title: "Reach Out",
        icon: "🤗",
        description: "Reconnect with someone you haven't talked to in a month",
        difficulty: 3,
        xp_reward: 55,
        energy_cost: 10,
    },
    ChallengeTemplate {
        title: "Cook Fresh",
        icon: "🥗",
        description: "Prepare a meal from fresh ingredients",
        difficulty: 3,
        xp_reward: 60,
        energy_cost: 15,
    },
];

/// Theme of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyTheme {
    GentleStart,
    MomentumDay,
    RecoveryDay,
    QuietProgress,
    ResetDay,
}

impl DailyTheme {
    pub const ALL: [DailyTheme; 5] = [
        Self::GentleStart,
        Self::MomentumDay,
        Self::RecoveryDay,
        Self::QuietProgress,
        Self::ResetDay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GentleStart => "Gentle Start",
            Self::MomentumDay => "Momentum Day",
            Self::RecoveryDay => "Recovery Day",
            Self::QuietProgress => "Quiet Progress",
            Self::ResetDay => "Reset Day",
        }
    }
}

/// Stable hash of a calendar date's ISO string
///
/// `h = c + (h << 5) - h` over the bytes, in wrapping 32-bit arithmetic.
pub fn date_hash(date: NaiveDate) -> u32 {
    let key = iso_date(date);
    let hash = key.bytes().fold(0i32, |hash, c| {
        i32::from(c).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    hash.unsigned_abs()
}

pub fn daily_challenge(date: NaiveDate) -> &'static ChallengeTemplate {
    &DAILY_CHALLENGES[date_hash(date) as usize % DAILY_CHALLENGES.len()]
}

pub fn daily_theme(date: NaiveDate) -> DailyTheme {
    DailyTheme::ALL[date_hash(date) as usize % DailyTheme::ALL.len()]
}

/// Templates of `category` written for `tier`, falling back to any tier
fn templates_for(category: QuestCategory, tier: Tier) -> Vec<&'static QuestTemplate> {
    let in_category = QUEST_TEMPLATES.iter().filter(|t| t.category == category);
    let matching: Vec<_> = in_category.clone().filter(|t| t.tier == tier).collect();
    if matching.is_empty() {
        in_category.collect()
    } else {
        matching
    }
}

fn themed_quest<R: Rng + ?Sized>(rng: &mut R) -> Quest {
    let category = *QuestCategory::THEMED
        .choose(rng)
        .unwrap_or(&QuestCategory::Health);
    let difficulty: u8 = rng.gen_range(1..=5);
    let candidates = templates_for(category, Tier::for_difficulty(difficulty));
    let template = candidates.choose(rng).copied().unwrap_or(&QUEST_TEMPLATES[0]);

    Quest {
        id: uuid::Uuid::new_v4().to_string(),
        title: template.title.to_string(),
        category,
        difficulty,
        xp_reward: XpRewards::for_difficulty(difficulty),
        energy_cost: XpRewards::energy_for_difficulty(difficulty),
        status: QuestStatus::Active,
        icon: template.icon.to_string(),
        kind: QuestKind::Daily,
        description: Some(template.description.to_string()),
    }
}

fn challenge_quest(date: NaiveDate) -> Quest {
    let challenge = daily_challenge(date);
    Quest {
        id: uuid::Uuid::new_v4().to_string(),
        title: challenge.title.to_string(),
        category: QuestCategory::Special,
        difficulty: challenge.difficulty,
        xp_reward: challenge.xp_reward,
        energy_cost: challenge.energy_cost,
        status: QuestStatus::Active,
        icon: challenge.icon.to_string(),
        kind: QuestKind::Challenge,
        description: Some(challenge.description.to_string()),
    }
}

/// Build the batch for `date`: `count` themed quests, then the challenge
pub fn generate_daily_quests<R: Rng + ?Sized>(
    date: NaiveDate,
    count: usize,
    rng: &mut R,
) -> Vec<Quest> {
    let mut quests: Vec<Quest> = (0..count).map(|_| themed_quest(rng)).collect();
    quests.push(challenge_quest(date));
    quests
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_challenge_is_stable_for_a_date() {
        let d = date(2024, 7, 14);
        assert_eq!(daily_challenge(d).title, daily_challenge(d).title);

        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        let first = generate_daily_quests(d, 3, &mut a);
        let second = generate_daily_quests(d, 3, &mut b);
        assert_eq!(first.last().unwrap().title, second.last().unwrap().title);
    }

    #[test]
    fn test_date_hash_matches_reference_values() {
        // "2024-01-01" folded with h = c + (h << 5) - h
        let expected = "2024-01-01".bytes().fold(0i64, |h, c| {
            let h = (h * 31 + i64::from(c)) as i32;
            i64::from(h)
        });
        assert_eq!(date_hash(date(2024, 1, 1)), (expected as i32).unsigned_abs());
    }

    #[test]
    fn test_batch_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let quests = generate_daily_quests(date(2024, 2, 29), 5, &mut rng);

        assert_eq!(quests.len(), 6);
        assert_eq!(quests.iter().filter(|q| q.is_challenge()).count(), 1);
        assert!(quests[5].is_challenge());
        assert_eq!(quests[5].category, QuestCategory::Special);

        for quest in &quests[..5] {
            assert!((1..=5).contains(&quest.difficulty));
            assert_ne!(quest.category, QuestCategory::Special);
            assert_eq!(quest.xp_reward, u32::from(quest.difficulty) * 10);
            assert!(quest.is_active());
        }
    }

    #[test]
    fn test_template_filter_respects_tier() {
        for category in QuestCategory::THEMED {
            for tier in [Tier::Gentle, Tier::Normal, Tier::Stretch] {
                let templates = templates_for(category, tier);
                assert!(!templates.is_empty());
                assert!(templates.iter().all(|t| t.category == category && t.tier == tier));
            }
        }
    }

    #[test]
    fn test_zero_count_still_yields_challenge() {
        let mut rng = StdRng::seed_from_u64(0);
        let quests = generate_daily_quests(date(2024, 3, 1), 0, &mut rng);
        assert_eq!(quests.len(), 1);
        assert!(quests[0].is_challenge());
    }
}
