//! Reset command implementation

use anyhow::Result;

use liferpg::game::Game;

/// Reset progression, or every store with `all`
pub fn reset_command(game: &mut Game, all: bool) -> Result<()> {
    if all {
        game.reset_all();
        println!("All game data erased.");
    } else {
        game.reset_progress();
        println!("Level, streak and achievements reset. Quests and companion kept.");
    }
    Ok(())
}
