//! User profile store - single source of truth for gamification state.
//!
//! The store is owned by the session context and mutated only through
//! `login` and `add_xp`. XP never decreases for the life of the session.
//! Nothing here is persisted; a restart begins from the fixture defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The authenticated user's display and gamification attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Display role, e.g. "Junior Explorer"
    pub role: String,
    /// Consecutive days with activity
    pub streak: u32,
    /// Experience points, monotonically non-decreasing
    pub xp: u64,
    /// Overall level shown on the home badge
    pub level: u32,
    /// Flips to true exactly once, on the login transition
    pub is_authenticated: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Arjun Kumar".to_string(),
            role: "Junior Explorer".to_string(),
            streak: 12,
            xp: 1250,
            level: 5,
            is_authenticated: false,
        }
    }
}

/// Single-writer store wrapping the profile.
///
/// Mutations are synchronous; every `profile()` call after a mutation
/// observes it.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: UserProfile,
    last_active: Option<NaiveDate>,
}

impl ProfileStore {
    /// Create a store with the fixture defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Set the name and mark the user authenticated.
    ///
    /// The name is accepted as given; validation belongs to the screen
    /// layer, if anywhere.
    pub fn login(&mut self, name: &str) {
        self.profile.name = name.to_string();
        self.profile.is_authenticated = true;
    }

    /// Add a non-negative XP delta.
    pub fn add_xp(&mut self, amount: u64) {
        self.profile.xp = self.profile.xp.saturating_add(amount);
    }

    /// Update the streak for a session starting on `today`.
    ///
    /// Consecutive day extends the streak, a gap resets it to 1, the same
    /// day leaves it unchanged.
    pub fn record_session_start(&mut self, today: NaiveDate) {
        if let Some(last) = self.last_active {
            let gap = (today - last).num_days();
            if gap == 1 {
                self.profile.streak += 1;
            } else if gap > 1 {
                self.profile.streak = 1;
            }
        }
        self.last_active = Some(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_defaults() {
        let store = ProfileStore::new();
        let p = store.profile();
        assert_eq!(p.name, "Arjun Kumar");
        assert_eq!(p.role, "Junior Explorer");
        assert_eq!(p.streak, 12);
        assert_eq!(p.xp, 1250);
        assert_eq!(p.level, 5);
        assert!(!p.is_authenticated);
    }

    #[test]
    fn test_login_touches_name_and_auth_only() {
        let mut store = ProfileStore::new();
        store.login("Ravi");

        let p = store.profile();
        assert_eq!(p.name, "Ravi");
        assert!(p.is_authenticated);
        assert_eq!(p.xp, 1250);
        assert_eq!(p.streak, 12);
        assert_eq!(p.level, 5);
    }

    #[test]
    fn test_add_xp_is_monotonic_sum() {
        let mut store = ProfileStore::new();
        let start = store.profile().xp;

        let deltas = [50u64, 0, 120, 30];
        let mut last_seen = start;
        for d in deltas {
            store.add_xp(d);
            let now = store.profile().xp;
            assert!(now >= last_seen);
            last_seen = now;
        }
        assert_eq!(store.profile().xp, start + deltas.iter().sum::<u64>());
    }

    #[test]
    fn test_add_xp_zero_is_noop() {
        let mut store = ProfileStore::new();
        store.add_xp(0);
        assert_eq!(store.profile().xp, 1250);
    }

    #[test]
    fn test_streak_same_day_unchanged() {
        let mut store = ProfileStore::new();
        let day = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
        store.record_session_start(day);
        store.record_session_start(day);
        assert_eq!(store.profile().streak, 12);
    }

    #[test]
    fn test_streak_consecutive_day_extends() {
        let mut store = ProfileStore::new();
        let day = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
        store.record_session_start(day);
        store.record_session_start(day.succ_opt().unwrap());
        assert_eq!(store.profile().streak, 13);
    }

    #[test]
    fn test_streak_gap_resets() {
        let mut store = ProfileStore::new();
        let day = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
        store.record_session_start(day);
        store.record_session_start(NaiveDate::from_ymd_opt(2024, 11, 10).unwrap());
        assert_eq!(store.profile().streak, 1);
    }
}
