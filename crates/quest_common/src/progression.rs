//! Skill level progress helpers.
//!
//! Linear curve: each skill level spans 1000 XP. Display-only; the
//! profile's overall level comes from the fixture and is never derived
//! from XP here.

use serde::{Deserialize, Serialize};

/// XP span of one skill level
pub const XP_PER_LEVEL: u64 = 1000;

/// Position within the skill level curve for a given XP total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level (1-based)
    pub level: u32,
    /// XP accumulated inside the current level
    pub xp_into_level: u64,
    /// XP still needed to reach the next level
    pub xp_to_next: u64,
}

impl LevelProgress {
    /// Derive progress from a total XP count
    pub fn from_xp(total_xp: u64) -> Self {
        let level = (total_xp / XP_PER_LEVEL) as u32 + 1;
        let xp_into_level = total_xp % XP_PER_LEVEL;
        Self {
            level,
            xp_into_level,
            xp_to_next: XP_PER_LEVEL - xp_into_level,
        }
    }

    /// Percent of the current level completed (0-100)
    pub fn percent(&self) -> u8 {
        ((self.xp_into_level * 100) / XP_PER_LEVEL) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_four_sample() {
        // The journey screen sample: 3650 XP = level 4, 650/1000, 350 to go
        let p = LevelProgress::from_xp(3650);
        assert_eq!(p.level, 4);
        assert_eq!(p.xp_into_level, 650);
        assert_eq!(p.xp_to_next, 350);
        assert_eq!(p.percent(), 65);
    }

    #[test]
    fn test_zero_xp_is_level_one() {
        let p = LevelProgress::from_xp(0);
        assert_eq!(p.level, 1);
        assert_eq!(p.xp_into_level, 0);
        assert_eq!(p.xp_to_next, 1000);
        assert_eq!(p.percent(), 0);
    }

    #[test]
    fn test_level_boundary() {
        let p = LevelProgress::from_xp(1000);
        assert_eq!(p.level, 2);
        assert_eq!(p.xp_into_level, 0);
    }

    #[test]
    fn test_percent_is_monotonic_within_level() {
        let mut last = 0;
        for xp in (0..1000).step_by(50) {
            let pct = LevelProgress::from_xp(xp).percent();
            assert!(pct >= last);
            last = pct;
        }
    }
}
