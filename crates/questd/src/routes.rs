//! API routes for questd.
//!
//! Static fixture endpoints plus a health check. Responses are the
//! entire fixture in one reply: no query parameters, no pagination, no
//! auth.

use crate::server::AppState;
use axum::{extract::State, routing::get, Json, Router};
use quest_common::api::HealthResponse;
use quest_common::catalog::{AchievementBadge, DailyQuest, SkillCatalogEntry, UserSummary};
use std::sync::Arc;

type AppStateArc = Arc<AppState>;

pub fn api_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/user", get(get_user))
        .route("/api/skills", get(list_skills))
        .route("/api/quest", get(get_daily_quest))
        .route("/api/badge", get(get_badge))
}

/// `GET /api/user` - the user summary fixture, verbatim
async fn get_user(State(state): State<AppStateArc>) -> Json<UserSummary> {
    Json(state.fixtures.user.clone())
}

/// `GET /api/skills` - the full skill catalog in fixture order
async fn list_skills(State(state): State<AppStateArc>) -> Json<Vec<SkillCatalogEntry>> {
    Json(state.fixtures.skills.clone())
}

/// `GET /api/quest` - today's quest card for the home screen
async fn get_daily_quest(State(state): State<AppStateArc>) -> Json<DailyQuest> {
    Json(state.fixtures.daily_quest.clone())
}

/// `GET /api/badge` - the badge awarded on lesson completion
async fn get_badge(State(state): State<AppStateArc>) -> Json<AchievementBadge> {
    Json(state.fixtures.badge.clone())
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        skills_available: state.fixtures.skills.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;
    use crate::server;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        server::router(Arc::new(AppState::new(FixtureSet::sample())))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_user_serves_fixture() {
        let (status, body) = get_json("/api/user").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Arjun Kumar");
        assert_eq!(body["xp"], 1250);
        assert_eq!(body["topPercentage"], "5%");
        assert_eq!(body["skillsDone"], 12);
        assert_eq!(body["certificates"], 3);
    }

    #[tokio::test]
    async fn test_get_skills_serves_six_in_order() {
        let (status, body) = get_json("/api/skills").await;
        assert_eq!(status, StatusCode::OK);

        let skills = body.as_array().unwrap();
        assert_eq!(skills.len(), 6);
        assert_eq!(skills[0]["id"], "robotics");
        assert_eq!(skills[0]["iconColor"], "text-blue-500");
        assert_eq!(skills[4]["name"], "Mechanics");
        assert_eq!(skills[4]["xp"], 500);
        assert_eq!(skills[5]["name"], "Art & Craft");
    }

    #[tokio::test]
    async fn test_get_quest_serves_daily_fixture() {
        let (status, body) = get_json("/api/quest").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Fix the Leak!");
        assert_eq!(body["skillId"], "plumbing");
    }

    #[tokio::test]
    async fn test_get_badge_serves_reward_fixture() {
        let (status, body) = get_json("/api/badge").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Star Mechanic");
        assert_eq!(body["xpReward"], 50);
    }

    #[tokio::test]
    async fn test_health_reports_catalog_size() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["skillsAvailable"].as_u64(), None); // snake_case wire
        assert_eq!(body["skills_available"], 6);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
