//! Whole-file writes of reports and sessions.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::render::{render_report, render_session};
use crate::analysis::GradeSummary;
use crate::domain::{ClimbingProfile, SessionRecord};
use crate::error::{ClimbError, Result};

pub const REPORT_FILE: &str = "climbing_report.txt";
pub const SESSION_FILE: &str = "climbing_session.txt";

fn overwrite(path: PathBuf, content: &str) -> Result<PathBuf> {
    match fs::write(&path, content) {
        Ok(()) => {
            info!("Wrote {}", path.display());
            Ok(path)
        }
        Err(source) => Err(ClimbError::Persist { path, source }),
    }
}

/// Write the report to `<dir>/climbing_report.txt`, replacing any earlier report.
pub fn persist(profile: &ClimbingProfile, summary: &GradeSummary, dir: &Path) -> Result<PathBuf> {
    overwrite(dir.join(REPORT_FILE), &render_report(profile, summary))
}

/// Write one session to `<dir>/climbing_session.txt`, replacing any earlier one.
pub fn persist_session(record: &SessionRecord, dir: &Path) -> Result<PathBuf> {
    overwrite(dir.join(SESSION_FILE), &render_session(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_grades;
    use crate::domain::DifficultyRating;
    use tempfile::TempDir;

    #[test]
    fn test_persist_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut profile = ClimbingProfile::new();
        profile.name = "Alex".to_string();

        let path = persist(&profile, &GradeSummary::default(), temp.path()).unwrap();
        assert_eq!(path, temp.path().join(REPORT_FILE));

        profile.name = "Sam".to_string();
        profile.set_monthly_grades(&[5]);
        persist(&profile, &analyze_grades(profile.monthly_grades()), temp.path()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Climber: Sam"));
        assert!(!content.contains("Alex"));
        assert!(content.contains("Month 1: 5"));
    }

    #[test]
    fn test_persist_session() {
        let temp = TempDir::new().unwrap();
        let record = SessionRecord::new("Friday", 1.5, DifficultyRating::Easy);
        let path = persist_session(&record, temp.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), SESSION_FILE);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Date: Friday\nHours: 1.5\nDifficulty: Easy\n"));
    }

    #[test]
    fn test_unwritable_destination_is_persist_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no").join("such").join("dir");
        let record = SessionRecord::new("Friday", 1.5, DifficultyRating::Easy);

        match persist_session(&record, &missing) {
            Err(ClimbError::Persist { path, .. }) => assert_eq!(path, missing.join(SESSION_FILE)),
            other => panic!("expected persist error, got {:?}", other),
        }
    }
}
