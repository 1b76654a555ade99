//! Session context: one navigator, one profile store, one user.
//!
//! Intents are the only way state advances. Store mutations and the
//! navigation they belong to are applied synchronously, in issue order,
//! so a `profile()` read after `apply` always sees the result.

use crate::error::QuestError;
use crate::intent::Intent;
use crate::navigator::{Navigator, Screen};
use crate::profile::{ProfileStore, UserProfile};
use crate::LESSON_XP_REWARD;

/// Process-wide session state, single writer.
#[derive(Debug, Clone, Default)]
pub struct Session {
    navigator: Navigator,
    store: ProfileStore,
}

impl Session {
    /// Fresh session: splash screen, fixture profile defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// The active screen
    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Profile snapshot
    pub fn profile(&self) -> &UserProfile {
        self.store.profile()
    }

    /// Mutable access to the store for screen-layer concerns (streaks)
    pub fn store_mut(&mut self) -> &mut ProfileStore {
        &mut self.store
    }

    /// Apply a navigation intent raised by the active screen.
    ///
    /// Performs the store mutation tied to the intent, then the
    /// navigation, and returns the new active screen. An intent the
    /// active screen does not expose is a caller error.
    pub fn apply(&mut self, intent: Intent) -> Result<Screen, QuestError> {
        let from = self.navigator.current();
        let target = intent
            .target(from)
            .ok_or_else(|| QuestError::IntentNotAvailable {
                screen: from,
                intent: intent.label().to_string(),
            })?;

        match &intent {
            Intent::StartLearning { name } => self.store.login(name),
            Intent::MarkCompleted => self.store.add_xp(LESSON_XP_REWARD),
            _ => {}
        }

        self.navigator.navigate(target);
        Ok(target)
    }
}
