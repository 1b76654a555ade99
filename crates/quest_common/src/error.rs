//! Error types for LearnQuest.

use crate::navigator::Screen;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestError {
    #[error("Fixture server not reachable at {0}. Start questd first.")]
    ServerUnreachable(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("'{intent}' is not available on the {screen} screen")]
    IntentNotAvailable { screen: Screen, intent: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
