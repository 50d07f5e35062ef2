//! Player state: level, XP, stamina and rest gating

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::levels::xp_required_for_level;

pub const MAX_STAMINA: u32 = 100;
/// Below this stamina the player is exhausted and cannot complete quests
pub const EXHAUSTION_THRESHOLD: u32 = 20;
/// Most stamina a single natural recovery pass can restore
pub const NATURAL_RECOVERY_CAP: u32 = 5;
pub const REST_DAY_STAMINA: u32 = 25;
pub const REST_RECOVERY_STAMINA: u32 = 30;

/// A level up event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Persisted player state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub level: u32,
    /// XP banked toward the next level; always below the current threshold
    pub xp: u64,
    /// Lifetime XP across all levels
    #[serde(default)]
    pub total_xp: u64,
    pub stamina: u32,
    /// Set automatically while stamina is below the exhaustion threshold
    #[serde(default)]
    pub exhausted: bool,
    /// Calendar day the player chose to rest
    #[serde(default)]
    pub rest_day: Option<NaiveDate>,
    pub last_activity_time: DateTime<Utc>,
}

impl Player {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            level: 1,
            xp: 0,
            total_xp: 0,
            stamina: MAX_STAMINA,
            exhausted: false,
            rest_day: None,
            last_activity_time: now,
        }
    }
}

/// Owns and mutates the [`Player`]
#[derive(Debug, Clone)]
pub struct PlayerStore {
    player: Player,
}

impl PlayerStore {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            player: Player::new(now.with_timezone(&Utc)),
        }
    }

    pub fn from_state(player: Player) -> Self {
        let mut store = Self { player };
        store.normalize();
        store
    }

    pub fn state(&self) -> &Player {
        &self.player
    }

    pub fn level(&self) -> u32 {
        self.player.level
    }

    pub fn stamina(&self) -> u32 {
        self.player.stamina
    }

    /// Whether quest completion is blocked on `today`
    ///
    /// True while exhausted or on a day the player chose to rest.
    pub fn rest_day_active(&self, today: NaiveDate) -> bool {
        self.player.exhausted || self.player.rest_day == Some(today)
    }

    /// Add `floor(amount * multiplier)` XP and resolve level ups
    pub fn add_xp(&mut self, amount: u32, multiplier: f64) -> (u64, Option<LevelUp>) {
        let gained = (f64::from(amount) * multiplier.max(0.0)).floor() as u64;
        self.player.xp += gained;
        self.player.total_xp += gained;
        (gained, self.handle_level_up())
    }

    /// Roll banked XP through as many thresholds as it covers
    fn handle_level_up(&mut self) -> Option<LevelUp> {
        let old_level = self.player.level;
        let mut needed = xp_required_for_level(self.player.level);

        while self.player.xp >= needed {
            self.player.xp -= needed;
            self.player.level += 1;
            needed = xp_required_for_level(self.player.level);
        }

        if self.player.level > old_level {
            info!(old_level, new_level = self.player.level, "Level up");
            Some(LevelUp {
                old_level,
                new_level: self.player.level,
            })
        } else {
            None
        }
    }

    /// Change stamina by `delta`, clamped to [0, 100]
    pub fn adjust_stamina(&mut self, delta: i32, now: DateTime<Local>) {
        let stamina = (i64::from(self.player.stamina) + i64::from(delta))
            .clamp(0, i64::from(MAX_STAMINA)) as u32;
        self.player.stamina = stamina;
        self.player.exhausted = stamina < EXHAUSTION_THRESHOLD;
        self.player.last_activity_time = now.with_timezone(&Utc);
    }

    /// Recover one stamina per whole hour since the last activity
    ///
    /// Restores at most [`NATURAL_RECOVERY_CAP`] per call. Returns the amount
    /// recovered.
    pub fn natural_recovery(&mut self, now: DateTime<Local>) -> u32 {
        let elapsed_hours = (now.with_timezone(&Utc) - self.player.last_activity_time)
            .num_hours()
            .max(0);
        let hours = u32::try_from(elapsed_hours).unwrap_or(u32::MAX);
        let recovered = hours
            .min(NATURAL_RECOVERY_CAP)
            .min(MAX_STAMINA - self.player.stamina);

        if recovered > 0 {
            self.player.stamina += recovered;
            self.player.last_activity_time = now.with_timezone(&Utc);
            debug!(recovered, stamina = self.player.stamina, "Natural recovery");
        }

        if self.player.stamina >= EXHAUSTION_THRESHOLD {
            self.player.exhausted = false;
        }
        recovered
    }

    /// Declare `today` a rest day: +25 stamina and quest gating for the day
    pub fn take_rest_day(&mut self, today: NaiveDate) {
        self.player.stamina = (self.player.stamina + REST_DAY_STAMINA).min(MAX_STAMINA);
        self.player.rest_day = Some(today);
        info!(%today, stamina = self.player.stamina, "Rest day taken");
    }

    /// End any rest: +30 stamina (plus companion bonus), both gates cleared
    pub fn recover_from_rest(&mut self, regen_bonus: u32) {
        self.player.stamina =
            (self.player.stamina + REST_RECOVERY_STAMINA + regen_bonus).min(MAX_STAMINA);
        self.player.exhausted = false;
        self.player.rest_day = None;
    }

    pub fn reset_player(&mut self, now: DateTime<Local>) {
        self.player = Player::new(now.with_timezone(&Utc));
    }

    /// Bring a loaded record back inside the invariants
    fn normalize(&mut self) {
        self.player.level = self.player.level.max(1);
        self.player.stamina = self.player.stamina.min(MAX_STAMINA);
        if self.player.stamina < EXHAUSTION_THRESHOLD {
            self.player.exhausted = true;
        }
        self.handle_level_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_add_xp_rolls_over() {
        let mut store = PlayerStore::new(morning());
        let (gained, level_up) = store.add_xp(250, 1.0);

        assert_eq!(gained, 250);
        assert_eq!(store.level(), 2);
        assert_eq!(store.state().xp, 150);
        assert_eq!(store.state().total_xp, 250);
        assert_eq!(
            level_up,
            Some(LevelUp {
                old_level: 1,
                new_level: 2
            })
        );
    }

    #[test]
    fn test_add_xp_multi_level_jump() {
        let mut store = PlayerStore::new(morning());
        // 100 + 282 + 519 = 901
        store.add_xp(1000, 1.0);
        assert_eq!(store.level(), 4);
        assert_eq!(store.state().xp, 99);
    }

    #[test]
    fn test_add_xp_applies_multiplier_floor() {
        let mut store = PlayerStore::new(morning());
        let (gained, level_up) = store.add_xp(30, 1.19);
        assert_eq!(gained, 35);
        assert!(level_up.is_none());
    }

    #[test]
    fn test_adjust_stamina_clamps_and_exhausts() {
        let mut store = PlayerStore::new(morning());
        store.adjust_stamina(-90, morning());
        assert_eq!(store.stamina(), 10);

        store.adjust_stamina(-50, morning());
        assert_eq!(store.stamina(), 0);
        assert!(store.state().exhausted);
        assert!(store.rest_day_active(morning().date_naive()));

        store.adjust_stamina(500, morning());
        assert_eq!(store.stamina(), 100);
        assert!(!store.state().exhausted);
    }

    #[test]
    fn test_natural_recovery_caps_at_five() {
        let mut store = PlayerStore::new(morning());
        store.adjust_stamina(-85, morning());
        assert!(store.state().exhausted);

        let recovered = store.natural_recovery(morning() + Duration::hours(12));
        assert_eq!(recovered, 5);
        assert_eq!(store.stamina(), 20);
        assert!(!store.state().exhausted);
    }

    #[test]
    fn test_natural_recovery_within_the_hour_is_noop() {
        let mut store = PlayerStore::new(morning());
        store.adjust_stamina(-50, morning());
        assert_eq!(store.natural_recovery(morning() + Duration::minutes(59)), 0);
        assert_eq!(store.stamina(), 50);

        assert_eq!(store.natural_recovery(morning() + Duration::hours(2)), 2);
        // Clock was reset by the recovery above
        assert_eq!(store.natural_recovery(morning() + Duration::hours(2)), 0);
    }

    #[test]
    fn test_rest_day_gates_only_that_day() {
        let mut store = PlayerStore::new(morning());
        store.adjust_stamina(-60, morning());
        let today = morning().date_naive();

        store.take_rest_day(today);
        assert_eq!(store.stamina(), 65);
        assert!(store.rest_day_active(today));
        assert!(!store.rest_day_active(today.succ_opt().unwrap()));
    }

    #[test]
    fn test_recover_from_rest_clears_both_gates() {
        let mut store = PlayerStore::new(morning());
        let today = morning().date_naive();
        store.adjust_stamina(-95, morning());
        store.take_rest_day(today);

        store.recover_from_rest(3);
        assert_eq!(store.stamina(), 63);
        assert!(!store.rest_day_active(today));
    }

    #[test]
    fn test_reset_player() {
        let mut store = PlayerStore::new(morning());
        store.add_xp(5000, 1.0);
        store.adjust_stamina(-40, morning());

        store.reset_player(morning());
        assert_eq!(store.level(), 1);
        assert_eq!(store.state().xp, 0);
        assert_eq!(store.stamina(), 100);
    }

    #[test]
    fn test_from_state_normalizes_overflowing_xp() {
        let mut player = Player::new(Utc::now());
        player.xp = 150;
        player.stamina = 400;
        let store = PlayerStore::from_state(player);
        assert_eq!(store.level(), 2);
        assert_eq!(store.state().xp, 50);
        assert_eq!(store.stamina(), 100);
    }
}
