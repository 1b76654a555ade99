//! Shared HTTP payload types used by both the daemon and the client.
//!
//! Keeping these in one place means the wire shape cannot drift between
//! questd's handlers and questctl's client.

use serde::{Deserialize, Serialize};

/// Health payload returned by `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub skills_available: usize,
}
