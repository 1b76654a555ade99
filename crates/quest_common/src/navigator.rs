//! Screen navigator - the single active-screen tag and its only mutator.
//!
//! The navigator itself does no legality checking; which transitions are
//! reachable is decided by the intents each screen exposes (see intent.rs).

use serde::{Deserialize, Serialize};

/// One full-viewport screen in the navigation graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    Splash,
    Login,
    Home,
    SkillDetail,
    Lesson,
    Achievement,
    Progress,
}

impl Screen {
    /// Display title, matching the original screen headers
    pub fn title(&self) -> &'static str {
        match self {
            Self::Splash => "Crazy Skill",
            Self::Login => "Welcome to LearnQuest",
            Self::Home => "Home",
            Self::SkillDetail => "Your Journey",
            Self::Lesson => "Lesson",
            Self::Achievement => "Congratulations!",
            Self::Progress => "My Progress",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Splash => write!(f, "splash"),
            Self::Login => write!(f, "login"),
            Self::Home => write!(f, "home"),
            Self::SkillDetail => write!(f, "skillDetail"),
            Self::Lesson => write!(f, "lesson"),
            Self::Achievement => write!(f, "achievement"),
            Self::Progress => write!(f, "progress"),
        }
    }
}

/// Owns the active screen tag for the life of a session.
///
/// Transitions are plain assignments: synchronous, infallible, and total.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    /// Start a session at the splash screen
    pub fn new() -> Self {
        Self {
            current: Screen::Splash,
        }
    }

    /// The active screen tag. No side effects.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Set the active screen unconditionally.
    ///
    /// Navigating to the current screen is a no-op (re-render only).
    pub fn navigate(&mut self, target: Screen) {
        self.current = target;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen_is_splash() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Splash);
    }

    #[test]
    fn test_navigate_sets_tag() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Login);
        assert_eq!(nav.current(), Screen::Login);
        nav.navigate(Screen::Home);
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_navigate_same_screen_is_noop() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Home);
        nav.navigate(Screen::Home);
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_screen_wire_names() {
        let json = serde_json::to_string(&Screen::SkillDetail).unwrap();
        assert_eq!(json, "\"skillDetail\"");
        let back: Screen = serde_json::from_str("\"achievement\"").unwrap();
        assert_eq!(back, Screen::Achievement);
    }
}
