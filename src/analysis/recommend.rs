//! Rule-based dedication and skill feedback.
//!
//! Dedication looks at habits (days per year, hours per session); the first
//! matching rule wins. Skill looks only at total annual hours, with each
//! tier's lower bound inclusive.

use std::fmt;

/// Days per year at or above which a climber counts as frequent.
pub const FREQUENT_DAYS: u32 = 80;

/// Days per year below which a climber counts as new.
pub const NEW_CLIMBER_DAYS: u32 = 10;

/// Session length separating long sessions from short ones.
pub const LONG_SESSION_HOURS: f64 = 2.0;

pub const INTERMEDIATE_HOURS: f64 = 21.0;
pub const ADVANCED_HOURS: f64 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedicationTier {
    ExtremelyDedicated,
    Frequent,
    JustStarting,
    NewButDedicated,
    Balanced,
}

impl DedicationTier {
    pub fn classify(days_per_year: u32, hours_per_session: f64) -> Self {
        if days_per_year >= FREQUENT_DAYS && hours_per_session >= LONG_SESSION_HOURS {
            DedicationTier::ExtremelyDedicated
        } else if days_per_year >= FREQUENT_DAYS {
            DedicationTier::Frequent
        } else if days_per_year < NEW_CLIMBER_DAYS && hours_per_session <= LONG_SESSION_HOURS {
            DedicationTier::JustStarting
        } else if days_per_year < NEW_CLIMBER_DAYS {
            DedicationTier::NewButDedicated
        } else {
            DedicationTier::Balanced
        }
    }

    fn message(self, name: &str) -> String {
        match self {
            DedicationTier::ExtremelyDedicated => format!(
                "{}, you are extremely dedicated! Frequent, long sessions like yours build real strength.",
                name
            ),
            DedicationTier::Frequent => {
                "You climb frequently. Try stretching a few sessions longer to build endurance.".to_string()
            }
            DedicationTier::JustStarting => {
                "You're just starting out. Climbing a little more often will help you build the habit.".to_string()
            }
            DedicationTier::NewButDedicated => {
                "You're a new climber but very dedicated when you do climb. More frequent visits will speed up your progress."
                    .to_string()
            }
            DedicationTier::Balanced => "You keep a healthy, balanced schedule. Keep it up!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillTier {
    pub fn classify(total_hours: f64) -> Self {
        if total_hours >= ADVANCED_HOURS {
            SkillTier::Advanced
        } else if total_hours >= INTERMEDIATE_HOURS {
            SkillTier::Intermediate
        } else {
            SkillTier::Beginner
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillTier::Beginner => "BEGINNER",
            SkillTier::Intermediate => "INTERMEDIATE",
            SkillTier::Advanced => "ADVANCED",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            SkillTier::Beginner => "Focus on footwork and easy routes while your technique develops.",
            SkillTier::Intermediate => "Start projecting harder routes and mix in some strength training.",
            SkillTier::Advanced => "Push into your hardest grades and consider sharing what you know with newer climbers.",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both tiers plus the text shown to the climber.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub dedication: DedicationTier,
    pub skill: SkillTier,
    pub lines: Vec<String>,
}

pub fn evaluate(days_per_year: u32, hours_per_session: f64, total_hours: f64, name: &str) -> Recommendation {
    let dedication = DedicationTier::classify(days_per_year, hours_per_session);
    let skill = SkillTier::classify(total_hours);

    let lines = vec![
        dedication.message(name),
        format!("Total annual climbing hours: {:.2}", total_hours),
        format!("Recommended skill level: {}", skill),
        skill.advice().to_string(),
    ];

    Recommendation {
        dedication,
        skill,
        lines,
    }
}

/// Just the text of [`evaluate`].
pub fn recommend(days_per_year: u32, hours_per_session: f64, total_hours: f64, name: &str) -> Vec<String> {
    evaluate(days_per_year, hours_per_session, total_hours, name).lines
}
