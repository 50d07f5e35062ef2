//! Custom quest commands

use anyhow::{Result, bail};

use liferpg::game::{CustomQuestDraft, Game, QuestCategory};

use super::resolve_quest_id;

pub fn add_command(
    game: &mut Game,
    title: String,
    category: &str,
    difficulty: u8,
    description: Option<String>,
) -> Result<()> {
    let Some(category) = QuestCategory::from_str(category) else {
        bail!("Unknown category: {}", category);
    };
    if title.trim().is_empty() {
        bail!("Quest title cannot be empty");
    }

    let id = game.add_custom_quest(CustomQuestDraft {
        title: title.trim().to_string(),
        category,
        difficulty,
        description,
        icon: None,
    });
    println!("Added custom quest {}", id);
    Ok(())
}

pub fn remove_command(game: &mut Game, reference: &str) -> Result<()> {
    let id = resolve_quest_id(game, reference)?;
    if !game.remove_custom_quest(&id) {
        bail!("Not a custom quest: {}", reference);
    }
    println!("Removed.");
    Ok(())
}

/// Make a finished custom quest available again
pub fn repeat_command(game: &mut Game, reference: &str) -> Result<()> {
    let id = resolve_quest_id(game, reference)?;
    if !game.repeat_custom_quest(&id) {
        bail!("Quest is not a finished custom quest: {}", reference);
    }
    println!("Quest is active again.");
    Ok(())
}
