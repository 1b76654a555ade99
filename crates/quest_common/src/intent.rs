//! Navigation intents and the screen graph.
//!
//! Each screen exposes a fixed set of intents; every exposed (screen,
//! intent) pair maps to exactly one target screen. The graph is cyclic
//! through Home and has no exit transition.

use crate::navigator::Screen;
use serde::{Deserialize, Serialize};

/// A user-triggered request to move between screens or mutate the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Splash: "Get Started" button
    GetStarted,
    /// Login: "Start Learning" button, carries the student name
    StartLearning { name: String },
    /// Home: "Resume Lesson" on the continue-learning card
    ResumeLesson,
    /// Home: tap on a catalog skill tile
    OpenSkill { id: String },
    /// Home: "Start Quest" on the daily quest card
    StartQuest,
    /// Home: "Rank" / "Profile" tab
    OpenProgress,
    /// SkillDetail: "Continue Level" on the current journey item
    ContinueLevel,
    /// Lesson: "Mark as Completed" button
    MarkCompleted,
    /// Achievement: "Continue Learning" button
    ContinueLearning,
    /// Back chevron on SkillDetail, Lesson, Achievement, Progress
    Back,
}

impl Intent {
    /// Button label as rendered in the original screens
    pub fn label(&self) -> &'static str {
        match self {
            Self::GetStarted => "Get Started",
            Self::StartLearning { .. } => "Start Learning",
            Self::ResumeLesson => "Resume Lesson",
            Self::OpenSkill { .. } => "Open Skill",
            Self::StartQuest => "Start Quest",
            Self::OpenProgress => "Rank / Profile",
            Self::ContinueLevel => "Continue Level",
            Self::MarkCompleted => "Mark as Completed",
            Self::ContinueLearning => "Continue Learning",
            Self::Back => "Back",
        }
    }

    /// Target screen when this intent is raised from `from`.
    ///
    /// Returns None when `from` does not expose this intent.
    pub fn target(&self, from: Screen) -> Option<Screen> {
        use Screen::*;
        match (from, self) {
            (Splash, Self::GetStarted) => Some(Login),
            (Login, Self::StartLearning { .. }) => Some(Home),
            (Home, Self::ResumeLesson) => Some(SkillDetail),
            (Home, Self::OpenSkill { .. }) => Some(SkillDetail),
            (Home, Self::StartQuest) => Some(Lesson),
            (Home, Self::OpenProgress) => Some(Progress),
            (SkillDetail, Self::Back) => Some(Home),
            (SkillDetail, Self::ContinueLevel) => Some(Lesson),
            (Lesson, Self::Back) => Some(SkillDetail),
            (Lesson, Self::MarkCompleted) => Some(Achievement),
            (Achievement, Self::ContinueLearning) => Some(Home),
            (Achievement, Self::Back) => Some(Home),
            (Progress, Self::Back) => Some(Home),
            _ => None,
        }
    }
}

/// Labels of the intents a screen exposes, in display order
pub fn exposed_intents(screen: Screen) -> &'static [&'static str] {
    match screen {
        Screen::Splash => &["Get Started"],
        Screen::Login => &["Start Learning"],
        Screen::Home => &["Resume Lesson", "Open Skill", "Start Quest", "Rank / Profile"],
        Screen::SkillDetail => &["Continue Level", "Back"],
        Screen::Lesson => &["Mark as Completed", "Back"],
        Screen::Achievement => &["Continue Learning", "Back"],
        Screen::Progress => &["Back"],
    }
}
