//! Domain types for Climblog
//!
//! - DifficultyRating: the four-level difficulty scale
//! - SessionRecord: one climbing session (date, hours, difficulty)
//! - ClimbingProfile: the climber, their schedule, logged sessions and monthly grades

pub mod difficulty;
pub mod profile;
pub mod session;

pub use difficulty::{DifficultyRating, describe_code, difficulty_text, prompt_for_difficulty};
pub use profile::{ClimbingProfile, MAX_MONTHLY_GRADES, MAX_SESSIONS};
pub use session::{SessionRecord, prompt_for_session};
