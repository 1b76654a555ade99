//! LearnQuest CLI - terminal client for the questd fixture daemon.
//!
//! Runs the interactive learning session by default; `status` and
//! `skills` are one-shot reads of the daemon fixtures.

use anyhow::Result;
use clap::{Parser, Subcommand};
use questctl::commands;
use tracing::Level;

#[derive(Parser)]
#[command(name = "questctl")]
#[command(about = "LearnQuest - learn skills, level up your future", long_about = None)]
#[command(version)]
struct Cli {
    /// Fixture server base URL
    #[arg(long, global = true, default_value = quest_common::DEFAULT_SERVER_URL)]
    server: String,

    /// Subcommand (if not provided, starts the interactive session)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive learning session
    Play,

    /// Show daemon health and the user summary
    Status,

    /// List the skill catalog
    Skills,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play(&cli.server).await,
        Commands::Status => commands::status(&cli.server).await,
        Commands::Skills => commands::skills(&cli.server).await,
    }
}
