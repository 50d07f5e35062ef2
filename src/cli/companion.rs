//! Companion command implementation

use anyhow::Result;

use liferpg::game::{Game, Interaction};

pub fn companion_command(game: &mut Game, interaction: Interaction) -> Result<()> {
    let before = game.companion().state().affection;
    game.interact(interaction);

    let companion = game.companion().state();
    println!(
        "Affection {} -> {} ({})",
        before,
        companion.affection,
        companion.mood.as_str()
    );
    println!(
        "Bonuses: x{:.2} XP, +{} stamina on recovery",
        companion.bonuses.xp_multiplier, companion.bonuses.stamina_regen_bonus
    );
    Ok(())
}
