//! CLI command implementations

pub mod achievements;
pub mod companion;
pub mod custom;
pub mod quest;
pub mod reset;
pub mod rest;
pub mod run;
pub mod status;

use anyhow::{Result, bail};

use liferpg::game::{Game, Quest};

/// Resolve a quest reference to its id
///
/// Accepts a 1-based position in `liferpg quests` output, a full id or a
/// unique id prefix.
pub fn resolve_quest_id(game: &Game, reference: &str) -> Result<String> {
    let quests = game.quests();
    let listed: Vec<&Quest> = quests
        .daily_quests()
        .iter()
        .chain(quests.custom_quests().iter())
        .collect();

    if let Ok(position) = reference.parse::<usize>() {
        return match position.checked_sub(1).and_then(|i| listed.get(i)) {
            Some(quest) => Ok(quest.id.clone()),
            None => bail!("No quest at position {}", position),
        };
    }

    let matches: Vec<&Quest> = listed
        .into_iter()
        .filter(|q| q.id.starts_with(reference))
        .collect();
    match matches.as_slice() {
        [quest] => Ok(quest.id.clone()),
        [] => bail!("Unknown quest: {}", reference),
        _ => bail!("Ambiguous quest id '{}', matches {}", reference, matches.len()),
    }
}

/// One-line quest summary used by several commands
pub fn format_quest(position: usize, quest: &Quest) -> String {
    let tag = if quest.is_challenge() { " [challenge]" } else { "" };
    format!(
        "{:>2}. {} {} [{}]{} +{} XP, -{} stamina ({})",
        position,
        quest.icon,
        quest.title,
        quest.status,
        tag,
        quest.xp_reward,
        quest.energy_cost,
        short_id(&quest.id)
    )
}

fn short_id(id: &str) -> &str {
    let end = id
        .char_indices()
        .nth(15)
        .map(|(i, _)| i)
        .unwrap_or(id.len());
    &id[..end]
}
