//! Shared types and session core for LearnQuest.
//!
//! Everything both binaries need lives here: the screen navigator, the
//! profile store, the intent graph, and the fixture payload types served
//! by questd and consumed by questctl.

pub mod api;
pub mod catalog;
pub mod error;
pub mod intent;
pub mod navigator;
pub mod profile;
pub mod progression;
pub mod session;

pub use catalog::{AchievementBadge, DailyQuest, SkillCatalogEntry, UserSummary};
pub use error::QuestError;
pub use intent::Intent;
pub use navigator::{Navigator, Screen};
pub use profile::{ProfileStore, UserProfile};
pub use session::Session;

/// Default port for the fixture daemon
pub const DEFAULT_PORT: u16 = 3000;

/// Default base URL questctl talks to
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// XP awarded for completing a lesson
pub const LESSON_XP_REWARD: u64 = 50;
