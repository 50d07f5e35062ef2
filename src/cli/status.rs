//! Status command implementation

use anyhow::Result;

use liferpg::game::{
    Achievement, CharacterProfile, Game, MAX_STAMINA, daily_line, daily_theme, next_skill,
    progress_to_next, unlocked_skills, xp_required_for_level,
};

/// Show the player sheet
pub fn status_command(game: &Game) -> Result<()> {
    let today = game.now().date_naive();
    let player = game.player().state();
    let profile = CharacterProfile::for_level(player.level);
    let companion = game.companion().state();

    println!("{} - {}", profile.name, profile.title);
    println!("  {}\n", profile.description);

    println!(
        "  Level {}  {}/{} XP ({:.0}%)",
        player.level,
        player.xp,
        xp_required_for_level(player.level),
        progress_to_next(player.level, player.xp) * 100.0
    );
    println!("  Lifetime XP: {}", player.total_xp);
    println!("  Stamina: {}/{}", player.stamina, MAX_STAMINA);
    if game.is_resting() {
        if player.exhausted {
            println!("  Exhausted: rest to recover before taking on quests");
        } else {
            println!("  Rest day: quests resume tomorrow");
        }
    }

    let streak = game.streak().state();
    println!(
        "  Streak: {} day(s) (best {})",
        streak.current, streak.best
    );
    if streak.current > 0 && !game.streak().is_active(today) {
        println!("  Streak lapsed: your next quest starts a new one");
    } else if streak.current > 0 && streak.last_completed_date != Some(today) {
        println!("  Complete a quest today to keep your streak");
    }
    println!(
        "  Quests completed: {}",
        game.quests().total_completed()
    );
    println!(
        "  Achievements: {}/{}",
        game.achievements().unlocked_count(),
        Achievement::total_count()
    );

    println!("\n  Skills:");
    for skill in unlocked_skills(player.level) {
        println!("    {} - {} ({})", skill.title, skill.description, skill.passive_bonus);
    }
    if let Some(skill) = next_skill(player.level) {
        println!("    Next: {} at level {}", skill.title, skill.required_level);
    }

    println!();
    println!(
        "  Companion: {} (affection {}, x{:.2} XP, +{} regen)",
        companion.mood.as_str(),
        companion.affection,
        companion.bonuses.xp_multiplier,
        companion.bonuses.stamina_regen_bonus
    );
    println!("  \"{}\"", daily_line(today));
    println!("\n  Today: {}", daily_theme(today).label());

    Ok(())
}
