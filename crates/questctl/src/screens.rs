//! Terminal renderings of the seven screens and intent parsing.
//!
//! Each screen is a pure function of the profile snapshot and the fetched
//! fixture data; the only output of user input is an `Intent`. Fixture
//! data may be absent (fetch failed or still pending) - dependent screens
//! render a loading placeholder in that case.

use owo_colors::OwoColorize;
use quest_common::catalog::{AchievementBadge, DailyQuest, SkillCatalogEntry, UserSummary};
use quest_common::intent::exposed_intents;
use quest_common::progression::LevelProgress;
use quest_common::{Intent, Screen, UserProfile, LESSON_XP_REWARD};

/// Fixture data the screens render from. `None` means not yet available.
#[derive(Debug, Clone, Default)]
pub struct ScreenData {
    pub user: Option<UserSummary>,
    pub skills: Option<Vec<SkillCatalogEntry>>,
    pub quest: Option<DailyQuest>,
    pub badge: Option<AchievementBadge>,
}

/// Map an input line to an intent of the active screen.
///
/// Returns None for input that matches nothing the screen exposes.
pub fn parse_intent(screen: Screen, line: &str) -> Option<Intent> {
    let input = line.trim();
    let lower = input.to_lowercase();

    match screen {
        Screen::Splash => match lower.as_str() {
            "" | "start" | "go" => Some(Intent::GetStarted),
            _ => None,
        },
        // The whole line is the student name; empty keeps the default.
        Screen::Login => {
            let name = if input.is_empty() { "Arjun Kumar" } else { input };
            Some(Intent::StartLearning {
                name: name.to_string(),
            })
        }
        Screen::Home => {
            if let Some(id) = lower.strip_prefix("skill ") {
                return Some(Intent::OpenSkill {
                    id: id.trim().to_string(),
                });
            }
            match lower.as_str() {
                "resume" => Some(Intent::ResumeLesson),
                "quest" => Some(Intent::StartQuest),
                "rank" | "profile" => Some(Intent::OpenProgress),
                _ => None,
            }
        }
        Screen::SkillDetail => match lower.as_str() {
            "continue" => Some(Intent::ContinueLevel),
            "back" | "b" => Some(Intent::Back),
            _ => None,
        },
        Screen::Lesson => match lower.as_str() {
            "done" | "complete" => Some(Intent::MarkCompleted),
            "back" | "b" => Some(Intent::Back),
            _ => None,
        },
        Screen::Achievement => match lower.as_str() {
            "" | "continue" => Some(Intent::ContinueLearning),
            "back" | "b" => Some(Intent::Back),
            _ => None,
        },
        Screen::Progress => match lower.as_str() {
            "back" | "b" => Some(Intent::Back),
            _ => None,
        },
    }
}

/// Render the active screen to stdout
pub fn render(screen: Screen, profile: &UserProfile, data: &ScreenData) {
    println!();
    match screen {
        Screen::Splash => render_splash(),
        Screen::Login => render_login(),
        Screen::Home => render_home(profile, data),
        Screen::SkillDetail => render_skill_detail(data),
        Screen::Lesson => render_lesson(),
        Screen::Achievement => render_achievement(profile, data),
        Screen::Progress => render_progress(profile, data),
    }
    println!(
        "{} {}",
        "Actions:".dimmed(),
        exposed_intents(screen).join(" | ").dimmed()
    );
}

fn render_splash() {
    println!("  {}", "Crazy Skill".bold().yellow());
    println!("  Learn Skills. Level Up Your Future.");
    println!();
    println!("  Press Enter to get started.");
}

fn render_login() {
    println!("  {}", "Welcome to LearnQuest".bold());
    println!("  Start Your Adventure - log in to track your progress.");
    println!();
    println!("  Enter your student name (Enter keeps the default):");
}

fn render_home(profile: &UserProfile, data: &ScreenData) {
    println!(
        "  {}  Lvl {} | {} | {} Day Streak",
        profile.name.bold(),
        profile.level,
        profile.role,
        profile.streak
    );
    println!("  {} XP", profile.xp.to_string().yellow());
    println!();

    match &data.skills {
        Some(skills) => {
            println!("  {}", "Explore Skills".bold());
            for skill in skills {
                println!(
                    "    {:<12} {:>4} XP   (skill {})",
                    skill.name,
                    skill.xp,
                    skill.id.dimmed()
                );
            }
        }
        None => println!("  {}", "Loading skills...".dimmed()),
    }
    println!();
    match &data.quest {
        Some(quest) => println!("  {} {}", "Daily Quest:".bold(), quest_summary(quest)),
        None => println!("  {}", "Loading daily quest...".dimmed()),
    }
}

fn quest_summary(quest: &DailyQuest) -> String {
    format!("{} {}", quest.title, quest.description)
}

fn render_skill_detail(data: &ScreenData) {
    println!("  {}", "Robotics - Your Journey".bold());

    // Sample journey position from the original screen
    let progress = LevelProgress::from_xp(3650);
    println!(
        "  Level {} Progress: {} / 1000 XP ({}%)  -  {} XP to Level {}",
        progress.level,
        progress.xp_into_level,
        progress.percent(),
        progress.xp_to_next,
        progress.level + 1
    );

    if data.skills.is_none() {
        println!("  {}", "Loading journey...".dimmed());
    }
}

fn render_lesson() {
    println!("  {}", "Introduction to Circuits".bold());
    println!("  Level 1 - Basic Electronics");
    println!("  Reward: {} XP", LESSON_XP_REWARD.to_string().yellow());
}

fn render_achievement(profile: &UserProfile, data: &ScreenData) {
    println!("  {}", "Congratulations!".bold().yellow());
    match &data.badge {
        Some(badge) => {
            println!("  {}", badge_unlock_line(badge));
            println!("  +{} XP  (total: {})", badge.xp_reward, profile.xp);
        }
        None => {
            println!("  {}", "Loading badge...".dimmed());
            println!("  +{} XP  (total: {})", LESSON_XP_REWARD, profile.xp);
        }
    }
}

fn badge_unlock_line(badge: &AchievementBadge) -> String {
    format!("You've unlocked the {} badge.", badge.name)
}

fn render_progress(profile: &UserProfile, data: &ScreenData) {
    println!("  {}", "My Progress".bold());
    match &data.user {
        Some(user) => {
            println!(
                "  Rank #{} - Top {} of your class",
                user.rank, user.top_percentage
            );
            println!(
                "  {} XP | {} Skills Done | {} Certificates",
                profile.xp, user.skills_done, user.certificates
            );
        }
        None => println!("  {}", "Loading rank...".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_enter_starts() {
        assert_eq!(parse_intent(Screen::Splash, ""), Some(Intent::GetStarted));
        assert_eq!(parse_intent(Screen::Splash, "start"), Some(Intent::GetStarted));
        assert_eq!(parse_intent(Screen::Splash, "nonsense"), None);
    }

    #[test]
    fn test_login_line_is_the_name() {
        assert_eq!(
            parse_intent(Screen::Login, "Ravi"),
            Some(Intent::StartLearning { name: "Ravi".into() })
        );
        assert_eq!(
            parse_intent(Screen::Login, ""),
            Some(Intent::StartLearning { name: "Arjun Kumar".into() })
        );
    }

    #[test]
    fn test_home_skill_tap() {
        assert_eq!(
            parse_intent(Screen::Home, "skill robotics"),
            Some(Intent::OpenSkill { id: "robotics".into() })
        );
        assert_eq!(parse_intent(Screen::Home, "quest"), Some(Intent::StartQuest));
        assert_eq!(parse_intent(Screen::Home, "rank"), Some(Intent::OpenProgress));
        assert_eq!(parse_intent(Screen::Home, "profile"), Some(Intent::OpenProgress));
        assert_eq!(parse_intent(Screen::Home, "back"), None);
    }

    #[test]
    fn test_lesson_completion_words() {
        assert_eq!(parse_intent(Screen::Lesson, "done"), Some(Intent::MarkCompleted));
        assert_eq!(parse_intent(Screen::Lesson, "back"), Some(Intent::Back));
    }

    #[test]
    fn test_progress_only_goes_back() {
        assert_eq!(parse_intent(Screen::Progress, "back"), Some(Intent::Back));
        assert_eq!(parse_intent(Screen::Progress, "quest"), None);
    }

    #[test]
    fn test_quest_card_renders_fetched_data() {
        let quest = DailyQuest {
            title: "Patch the Roof!".into(),
            description: "Seal three shingles before sundown.".into(),
            skill_id: "carpentry".into(),
        };
        let line = quest_summary(&quest);
        assert!(line.contains("Patch the Roof!"));
        assert!(line.contains("Seal three shingles before sundown."));
    }

    #[test]
    fn test_achievement_names_fetched_badge() {
        let badge = AchievementBadge {
            name: "Master Plumber".into(),
            xp_reward: 75,
        };
        assert_eq!(
            badge_unlock_line(&badge),
            "You've unlocked the Master Plumber badge."
        );
    }
}
