//! HTTP client for the questd fixture endpoints.

use quest_common::api::HealthResponse;
use quest_common::catalog::{AchievementBadge, DailyQuest, SkillCatalogEntry, UserSummary};
use quest_common::QuestError;

/// Client for the fixture daemon.
///
/// Both fixture reads are one-shot fetches of the whole set; there is no
/// pagination and no retry.
pub struct FixtureClient {
    http: reqwest::Client,
    base_url: String,
}

impl FixtureClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /api/user`
    pub async fn user_summary(&self) -> Result<UserSummary, QuestError> {
        self.get_json("/api/user").await
    }

    /// `GET /api/skills`
    pub async fn skills(&self) -> Result<Vec<SkillCatalogEntry>, QuestError> {
        self.get_json("/api/skills").await
    }

    /// `GET /api/quest`
    pub async fn daily_quest(&self) -> Result<DailyQuest, QuestError> {
        self.get_json("/api/quest").await
    }

    /// `GET /api/badge`
    pub async fn badge(&self) -> Result<AchievementBadge, QuestError> {
        self.get_json("/api/badge").await
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<HealthResponse, QuestError> {
        self.get_json("/api/health").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, QuestError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                QuestError::ServerUnreachable(self.base_url.clone())
            } else {
                QuestError::Http(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(QuestError::Http(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| QuestError::Http(e.to_string()))
    }
}
