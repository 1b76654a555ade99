//! LearnQuest fixture daemon.
//!
//! Serves the static user and skill-catalog fixtures over HTTP for the
//! questctl client.

use anyhow::Result;
use questd::config::DaemonConfig;
use questd::fixtures::FixtureSet;
use questd::server::{self, AppState};
use std::path::Path;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("questd v{} starting", env!("CARGO_PKG_VERSION"));

    let config = DaemonConfig::load();
    let fixtures = match &config.fixtures_path {
        Some(path) => FixtureSet::load(Path::new(path))?,
        None => FixtureSet::sample(),
    };
    info!("Serving {} catalog skills", fixtures.skills.len());

    server::run(&config, AppState::new(fixtures)).await
}
