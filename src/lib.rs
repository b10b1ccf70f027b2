//! Climblog - a console logbook for climbing sessions
//!
//! Records a climber's profile and sessions, rates difficulty, summarizes
//! monthly grades and recommends a skill level. Everything runs over an
//! injectable reader/writer so the full menu can be driven from tests.

pub mod analysis;
pub mod console;
pub mod domain;
pub mod error;
pub mod menu;
pub mod report;

pub use error::{ClimbError, Result};
