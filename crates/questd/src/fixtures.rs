//! The fixture set served by the API routes.
//!
//! Built-in samples match the original mock API; a JSON file can replace
//! them wholesale but nothing mutates them at runtime.

use anyhow::{Context, Result};
use quest_common::catalog::{self, AchievementBadge, DailyQuest, SkillCatalogEntry, UserSummary};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything the daemon serves, loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    pub user: UserSummary,
    pub skills: Vec<SkillCatalogEntry>,
    pub daily_quest: DailyQuest,
    pub badge: AchievementBadge,
}

impl FixtureSet {
    /// The built-in sample content
    pub fn sample() -> Self {
        Self {
            user: catalog::sample_user(),
            skills: catalog::sample_skills(),
            daily_quest: catalog::sample_daily_quest(),
            badge: catalog::sample_badge(),
        }
    }

    /// Load a replacement set from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read fixtures at {}", path.display()))?;
        let set = serde_json::from_str(&content)
            .with_context(|| format!("invalid fixture JSON at {}", path.display()))?;
        Ok(set)
    }
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self::sample()
    }
}
