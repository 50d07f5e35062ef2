//! Quest commands: list, complete, skip

use anyhow::{Result, bail};

use liferpg::game::{CompletionOutcome, Game, GamificationEvent, StreakUpdate};

use super::{format_quest, resolve_quest_id};

/// List today's quests followed by custom quests
pub fn quests_command(game: &Game) -> Result<()> {
    let quests = game.quests();
    let daily = quests.daily_quests();
    let custom = quests.custom_quests();

    if let Some(date) = quests.log().last_generated_date {
        println!("Daily quests for {}:\n", date);
    }
    for (i, quest) in daily.iter().enumerate() {
        println!("  {}", format_quest(i + 1, quest));
    }

    if !custom.is_empty() {
        println!("\nCustom quests:\n");
        for (i, quest) in custom.iter().enumerate() {
            println!("  {}", format_quest(daily.len() + i + 1, quest));
        }
    }

    if daily.is_empty() && custom.is_empty() {
        println!("No quests yet.");
    }
    Ok(())
}

pub fn complete_command(game: &mut Game, reference: &str) -> Result<()> {
    let id = resolve_quest_id(game, reference)?;

    match game.complete_quest(&id) {
        CompletionOutcome::Completed { quest, events } => {
            println!("Completed: {} {}", quest.icon, quest.title);
            for event in events {
                print_event(&event);
            }
            Ok(())
        }
        CompletionOutcome::Resting => {
            bail!("You are resting today. Use `liferpg recover` when you are ready.")
        }
        CompletionOutcome::Unavailable => bail!("Quest is already finished"),
    }
}

pub fn skip_command(game: &mut Game, reference: &str) -> Result<()> {
    let id = resolve_quest_id(game, reference)?;
    if !game.skip_quest(&id) {
        bail!("Quest is already finished");
    }
    println!("Skipped.");
    Ok(())
}

fn print_event(event: &GamificationEvent) {
    match event {
        GamificationEvent::XpAwarded { amount, multiplier } => {
            if *multiplier > 1.0 {
                println!("  +{} XP (companion x{:.2})", amount, multiplier);
            } else {
                println!("  +{} XP", amount);
            }
        }
        GamificationEvent::LevelUp(level_up) => {
            println!(
                "  Level up! {} -> {}",
                level_up.old_level, level_up.new_level
            );
        }
        GamificationEvent::StreakUpdated(update) => match update {
            StreakUpdate::Started => println!("  Streak started"),
            StreakUpdate::Extended(days) => println!("  Streak: {} days", days),
            StreakUpdate::Broken { previous } => {
                println!("  Streak of {} days broken, starting over", previous)
            }
            StreakUpdate::Unchanged => {}
        },
        GamificationEvent::AchievementUnlocked(unlocked) => {
            let achievement = unlocked.achievement;
            println!(
                "  Achievement unlocked: {} {} - {}",
                achievement.icon, achievement.title, achievement.description
            );
        }
    }
}
