//! Pure calculations over profile data.

pub mod grades;
pub mod recommend;

pub use grades::{GradeSummary, analyze_grades};
pub use recommend::{
    ADVANCED_HOURS, DedicationTier, INTERMEDIATE_HOURS, Recommendation, SkillTier, evaluate, recommend,
};
