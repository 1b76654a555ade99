//! Fixture payload types and the sample content set.
//!
//! These are the wire shapes served verbatim by questd: a user summary,
//! the skill catalog, and the two static display fixtures (daily quest,
//! achievement badge). All of it is read-only descriptive data; none of
//! it feeds back into the mutable profile model.

use serde::{Deserialize, Serialize};

/// User record served by `GET /api/user`.
///
/// A superset of the profile shape: rank, top percentage, skills done and
/// certificates are display-only and never mutated by the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub name: String,
    pub role: String,
    pub streak: u32,
    pub xp: u64,
    pub level: u32,
    pub rank: u32,
    pub top_percentage: String,
    pub skills_done: u32,
    pub certificates: u32,
    pub avatar: String,
}

/// One entry of the skill catalog served by `GET /api/skills`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCatalogEntry {
    pub id: String,
    pub name: String,
    pub xp: u64,
    /// Icon reference by name, resolved by the presentation layer
    pub icon: String,
    /// Background color token
    pub color: String,
    /// Icon color token
    pub icon_color: String,
}

/// The daily quest card shown on Home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuest {
    pub title: String,
    pub description: String,
    pub skill_id: String,
}

/// Badge granted on the achievement screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementBadge {
    pub name: String,
    pub xp_reward: u64,
}

/// Sample user summary matching the mock API
pub fn sample_user() -> UserSummary {
    UserSummary {
        name: "Arjun Kumar".to_string(),
        role: "Junior Explorer".to_string(),
        streak: 12,
        xp: 1250,
        level: 5,
        rank: 4,
        top_percentage: "5%".to_string(),
        skills_done: 12,
        certificates: 3,
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Arjun".to_string(),
    }
}

/// Sample skill catalog: six entries, fixed order
pub fn sample_skills() -> Vec<SkillCatalogEntry> {
    fn entry(id: &str, name: &str, xp: u64, icon: &str, color: &str, icon_color: &str) -> SkillCatalogEntry {
        SkillCatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
            xp,
            icon: icon.to_string(),
            color: color.to_string(),
            icon_color: icon_color.to_string(),
        }
    }

    vec![
        entry("robotics", "Robotics", 450, "Bot", "bg-blue-50", "text-blue-500"),
        entry("ai", "AI Basics", 320, "Cpu", "bg-purple-50", "text-purple-500"),
        entry("carpentry", "Carpentry", 210, "Hammer", "bg-yellow-50", "text-yellow-500"),
        entry("plumbing", "Plumbing", 150, "Droplets", "bg-cyan-50", "text-cyan-500"),
        entry("mechanics", "Mechanics", 500, "Settings", "bg-red-50", "text-red-500"),
        entry("art", "Art & Craft", 120, "Palette", "bg-pink-50", "text-pink-500"),
    ]
}

/// The home screen's daily quest fixture
pub fn sample_daily_quest() -> DailyQuest {
    DailyQuest {
        title: "Fix the Leak!".to_string(),
        description: "Complete the plumbing simulation within 5 minutes to earn bonus XP."
            .to_string(),
        skill_id: "plumbing".to_string(),
    }
}

/// Badge granted when a lesson is completed
pub fn sample_badge() -> AchievementBadge {
    AchievementBadge {
        name: "Star Mechanic".to_string(),
        xp_reward: crate::LESSON_XP_REWARD,
    }
}
