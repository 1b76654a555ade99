//! Command implementations for questctl.

use crate::client::FixtureClient;
use crate::screens::{self, ScreenData};
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use quest_common::Session;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Show daemon health and the served user summary
pub async fn status(server: &str) -> Result<()> {
    let client = FixtureClient::new(server);

    let health = client.health().await?;
    println!(
        "questd {} - {} ({}s up, {} skills)",
        health.version, health.status, health.uptime_seconds, health.skills_available
    );

    let user = client.user_summary().await?;
    println!(
        "{} - {} | Lvl {} | {} XP | Rank #{}",
        user.name.bold(),
        user.role,
        user.level,
        user.xp,
        user.rank
    );
    Ok(())
}

/// List the skill catalog
pub async fn skills(server: &str) -> Result<()> {
    let client = FixtureClient::new(server);
    for skill in client.skills().await? {
        println!("{:<12} {:>4} XP  [{}]", skill.name, skill.xp, skill.id);
    }
    Ok(())
}

/// Run the interactive learning session.
///
/// Fixtures are fetched once up front; if the daemon is unreachable the
/// dependent screens show their loading placeholder and the session
/// continues on local state alone.
pub async fn play(server: &str) -> Result<()> {
    let client = FixtureClient::new(server);

    let data = fetch_screen_data(&client).await;
    let mut session = Session::new();
    session
        .store_mut()
        .record_session_start(Local::now().date_naive());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let screen = session.current_screen();
        screens::render(screen, session.profile(), &data);

        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if matches!(line.trim(), "q" | "quit" | "exit") {
            break;
        }

        match screens::parse_intent(screen, &line) {
            Some(intent) => {
                // Exposed intents always resolve; parse_intent filters first
                if let Err(e) = session.apply(intent) {
                    println!("{}", e.to_string().red());
                }
            }
            None => println!("{}", "Nothing matches that here. Try an action above.".dimmed()),
        }
    }

    Ok(())
}

async fn fetch_screen_data(client: &FixtureClient) -> ScreenData {
    let user = match client.user_summary().await {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("user fixture unavailable: {}", e);
            None
        }
    };
    let skills = match client.skills().await {
        Ok(skills) => Some(skills),
        Err(e) => {
            warn!("skill fixtures unavailable: {}", e);
            None
        }
    };
    let quest = match client.daily_quest().await {
        Ok(quest) => Some(quest),
        Err(e) => {
            warn!("daily quest fixture unavailable: {}", e);
            None
        }
    };
    let badge = match client.badge().await {
        Ok(badge) => Some(badge),
        Err(e) => {
            warn!("badge fixture unavailable: {}", e);
            None
        }
    };
    ScreenData {
        user,
        skills,
        quest,
        badge,
    }
}
