//! Achievements command implementation

use anyhow::Result;

use liferpg::game::{Achievement, Game};

pub fn achievements_command(game: &Game) -> Result<()> {
    let achievements = game.achievements();
    println!(
        "Achievements ({}/{}):\n",
        achievements.unlocked_count(),
        Achievement::total_count()
    );

    for entry in achievements.entries() {
        let def = entry.definition();
        let marker = if entry.unlocked { "x" } else { " " };
        println!(
            "  [{}] {} {} ({}) {}/{}",
            marker,
            def.icon,
            def.title,
            def.category.label(),
            entry.progress,
            def.max_progress
        );
        println!("        {}", def.description);
    }

    let recent = achievements.recent(3);
    if !recent.is_empty() {
        println!("\nRecently unlocked:");
        for entry in recent {
            if let Some(at) = entry.unlocked_at {
                println!("  {} on {}", entry.definition().title, at.format("%Y-%m-%d"));
            }
        }
    }
    Ok(())
}
