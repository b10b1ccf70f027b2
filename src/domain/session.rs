//! A single logged climbing session.

use std::io::{BufRead, Write};

use super::difficulty::{DifficultyRating, prompt_for_difficulty};
use crate::console::Console;
use crate::error::Result;

/// One session: when, how long, how hard. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    date: String,
    hours: f64,
    difficulty: DifficultyRating,
}

impl SessionRecord {
    pub fn new(date: impl Into<String>, hours: f64, difficulty: DifficultyRating) -> Self {
        Self {
            date: date.into(),
            hours,
            difficulty,
        }
    }

    /// Free-text date as the climber typed it
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn difficulty(&self) -> DifficultyRating {
        self.difficulty
    }

    /// Single-line summary used by the weekly log listing.
    pub fn summary(&self) -> String {
        format!("{} | {} hrs | {}", self.date, self.hours, self.difficulty)
    }
}

/// Collect date, hours and difficulty from the console.
pub fn prompt_for_session<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<SessionRecord> {
    let date = console.require_non_empty_text("Session date (e.g. 2024-05-01): ")?;
    let hours = console.require_positive_real("Hours climbed: ")?;
    let difficulty = prompt_for_difficulty(console)?;
    Ok(SessionRecord::new(date, hours, difficulty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::PlainStyler;
    use std::io::Cursor;

    #[test]
    fn test_accessors() {
        let record = SessionRecord::new("2024-05-01", 2.5, DifficultyRating::Moderate);
        assert_eq!(record.date(), "2024-05-01");
        assert_eq!(record.hours(), 2.5);
        assert_eq!(record.difficulty(), DifficultyRating::Moderate);
    }

    #[test]
    fn test_summary() {
        let record = SessionRecord::new("Sat morning", 1.5, DifficultyRating::Extreme);
        assert_eq!(record.summary(), "Sat morning | 1.5 hrs | Extreme");
    }

    #[test]
    fn test_prompt_for_session() {
        let input = Cursor::new(b"\n2024-06-10\n-2\n3\n2\n".to_vec());
        let mut console = Console::new(input, Vec::new(), Box::new(PlainStyler));
        let record = prompt_for_session(&mut console).unwrap();
        assert_eq!(record, SessionRecord::new("2024-06-10", 3.0, DifficultyRating::Moderate));
    }
}
