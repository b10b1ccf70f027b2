//! Difficulty scale for a climb.

use std::fmt;
use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::Result;

/// How hard a climb felt, from 1 (Easy) to 4 (Extreme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DifficultyRating {
    Easy = 1,
    Moderate = 2,
    Hard = 3,
    Extreme = 4,
}

impl DifficultyRating {
    /// All ratings in ascending order.
    pub const ALL: [DifficultyRating; 4] = [
        DifficultyRating::Easy,
        DifficultyRating::Moderate,
        DifficultyRating::Hard,
        DifficultyRating::Extreme,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(DifficultyRating::Easy),
            2 => Some(DifficultyRating::Moderate),
            3 => Some(DifficultyRating::Hard),
            4 => Some(DifficultyRating::Extreme),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyRating::Easy => "Easy",
            DifficultyRating::Moderate => "Moderate",
            DifficultyRating::Hard => "Hard",
            DifficultyRating::Extreme => "Extreme",
        }
    }

    /// One line of encouragement for this level.
    pub fn describe(self) -> &'static str {
        match self {
            DifficultyRating::Easy => "A relaxed climb. Great for warming up and working on technique.",
            DifficultyRating::Moderate => "A solid effort. You're building strength and confidence.",
            DifficultyRating::Hard => "A tough route! Pushing your limits is how you improve.",
            DifficultyRating::Extreme => "An extreme challenge! Rest well, you earned it.",
        }
    }
}

impl fmt::Display for DifficultyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text for an arbitrary code; anything outside 1-4 is "Unknown".
pub fn difficulty_text(code: i64) -> &'static str {
    DifficultyRating::from_code(code).map_or("Unknown", DifficultyRating::as_str)
}

pub fn describe_code(code: i64) -> &'static str {
    DifficultyRating::from_code(code).map_or("Unknown difficulty.", DifficultyRating::describe)
}

/// List the four levels and read a choice between 1 and 4.
pub fn prompt_for_difficulty<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<DifficultyRating> {
    console.say("Rate the difficulty:")?;
    for rating in DifficultyRating::ALL {
        console.say(&format!("  {}. {}", rating.code(), rating))?;
    }
    let code = console.require_ranged_choice("Difficulty (1-4): ", 1, 4)?;
    // The range check above guarantees a match
    Ok(DifficultyRating::from_code(code).unwrap_or(DifficultyRating::Easy))
}
