//! HTTP server for questd.

use crate::config::DaemonConfig;
use crate::fixtures::FixtureSet;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub fixtures: FixtureSet,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(fixtures: FixtureSet) -> Self {
        Self {
            fixtures,
            start_time: Instant::now(),
        }
    }
}

/// Build the full router over shared state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until the process is stopped
pub async fn run(config: &DaemonConfig, state: AppState) -> Result<()> {
    let app = router(Arc::new(state));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
