//! Rest and recovery commands

use anyhow::Result;

use liferpg::game::{Game, MAX_STAMINA};

pub fn rest_command(game: &mut Game) -> Result<()> {
    game.take_rest_day();
    println!(
        "Taking a rest day. Stamina {}/{}, quests are paused until tomorrow.",
        game.player().stamina(),
        MAX_STAMINA
    );
    Ok(())
}

pub fn recover_command(game: &mut Game) -> Result<()> {
    game.recover_from_rest();
    println!(
        "Recovered. Stamina {}/{}",
        game.player().stamina(),
        MAX_STAMINA
    );
    Ok(())
}
