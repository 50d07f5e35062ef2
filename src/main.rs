use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use liferpg::config::Config;
use liferpg::game::{Game, Interaction, LogFeedback, SystemClock};
use liferpg::storage::SqliteStore;

mod cli;

#[derive(Parser)]
#[command(name = "liferpg")]
#[command(about = "Turn everyday self-care into a role-playing game")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.liferpg/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level, stamina, streak and companion
    Status,

    /// List today's quests and custom quests
    Quests,

    /// Complete a quest by list position or id prefix
    Complete { quest: String },

    /// Skip a quest without rewards
    Skip { quest: String },

    /// Take a rest day: quests pause until tomorrow
    Rest,

    /// Recover stamina after resting
    Recover,

    /// Interact with your companion
    Companion {
        #[arg(value_enum)]
        action: CompanionAction,
    },

    /// Show every achievement and its progress
    Achievements,

    /// Manage custom quests
    Custom {
        #[command(subcommand)]
        action: CustomAction,
    },

    /// Reset progression (level, streak, achievements)
    Reset {
        /// Erase every store, including quests and companion
        #[arg(long)]
        all: bool,
    },

    /// Stay in the foreground and recover stamina periodically
    Run,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompanionAction {
    Pet,
    Feed,
    Play,
}

impl From<CompanionAction> for Interaction {
    fn from(action: CompanionAction) -> Self {
        match action {
            CompanionAction::Pet => Interaction::Pet,
            CompanionAction::Feed => Interaction::Feed,
            CompanionAction::Play => Interaction::Play,
        }
    }
}

#[derive(Subcommand)]
enum CustomAction {
    /// Add a custom quest
    Add {
        title: String,
        /// health, mindfulness, productivity, social, creativity, learning or special
        #[arg(long, default_value = "health")]
        category: String,
        /// 1-5
        #[arg(long, default_value_t = 2)]
        difficulty: u8,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a custom quest
    Remove { quest: String },
    /// Reactivate a finished custom quest
    Repeat { quest: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let (config, base_dir) = match &cli.config {
        Some(path) => {
            let base = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            (Config::load_or_init(path)?, base)
        }
        None => (Config::load()?, Config::global_config_dir()),
    };

    let db_path = config.database_path(&base_dir);
    let storage = SqliteStore::open(&db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

    let mut game = Game::new(Arc::new(storage), Arc::new(SystemClock), Arc::new(LogFeedback))
        .with_quests_per_day(config.settings.quests_per_day);
    game.load();
    game.resume();

    match cli.command {
        Some(Commands::Status) | None => cli::status::status_command(&game)?,
        Some(Commands::Quests) => cli::quest::quests_command(&game)?,
        Some(Commands::Complete { quest }) => cli::quest::complete_command(&mut game, &quest)?,
        Some(Commands::Skip { quest }) => cli::quest::skip_command(&mut game, &quest)?,
        Some(Commands::Rest) => cli::rest::rest_command(&mut game)?,
        Some(Commands::Recover) => cli::rest::recover_command(&mut game)?,
        Some(Commands::Companion { action }) => {
            cli::companion::companion_command(&mut game, action.into())?;
        }
        Some(Commands::Achievements) => cli::achievements::achievements_command(&game)?,
        Some(Commands::Custom { action }) => match action {
            CustomAction::Add {
                title,
                category,
                difficulty,
                description,
            } => cli::custom::add_command(&mut game, title, &category, difficulty, description)?,
            CustomAction::Remove { quest } => cli::custom::remove_command(&mut game, &quest)?,
            CustomAction::Repeat { quest } => cli::custom::repeat_command(&mut game, &quest)?,
        },
        Some(Commands::Reset { all }) => cli::reset::reset_command(&mut game, all)?,
        Some(Commands::Run) => {
            cli::run::run_command(game, config.settings.recovery_interval()).await?;
        }
    }

    Ok(())
}
