//! The climber's profile: identity, schedule, sessions and monthly grades.
//!
//! Lives for one run of the program. Sessions and grades are bounded;
//! adding past the session limit declines without touching state, and
//! grades beyond the twelfth are dropped.

use std::io::{BufRead, Write};

use log::{debug, info};

use super::session::SessionRecord;
use crate::console::Console;
use crate::error::Result;

/// Maximum sessions kept in the weekly log.
pub const MAX_SESSIONS: usize = 50;

/// One grade per month.
pub const MAX_MONTHLY_GRADES: usize = 12;

#[derive(Debug, Clone, Default)]
pub struct ClimbingProfile {
    pub name: String,
    pub style: String,
    pub location: String,
    days_per_year: u32,
    hours_per_session: f64,
    sessions: Vec<SessionRecord>,
    monthly_grades: Vec<u32>,
}

impl ClimbingProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for name, style, location and schedule, replacing earlier values.
    pub fn initialize<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        self.name = console.require_non_empty_text("Enter your name: ")?;
        self.style = console.require_non_empty_text("Preferred climbing style (e.g. bouldering, sport): ")?;
        self.location = console.require_non_empty_text("Where do you usually climb? ")?;
        let days = console.require_positive_integer("How many days per year do you climb? ")?;
        self.set_days_per_year(i64::from(days));
        let hours = console.require_positive_real("Average hours per session: ")?;
        self.set_hours_per_session(hours);

        info!(
            "Profile initialized for {} ({} days/year, {} hrs/session)",
            self.name, self.days_per_year, self.hours_per_session
        );
        Ok(())
    }

    pub fn days_per_year(&self) -> u32 {
        self.days_per_year
    }

    pub fn hours_per_session(&self) -> f64 {
        self.hours_per_session
    }

    /// Negative values are stored as 0.
    pub fn set_days_per_year(&mut self, days: i64) {
        self.days_per_year = u32::try_from(days.max(0)).unwrap_or(u32::MAX);
    }

    /// Negative (or NaN) values are stored as 0.
    pub fn set_hours_per_session(&mut self, hours: f64) {
        self.hours_per_session = if hours > 0.0 { hours } else { 0.0 };
    }

    pub fn total_annual_hours(&self) -> f64 {
        f64::from(self.days_per_year) * self.hours_per_session
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Append to the log. Returns false and leaves the log unchanged when full.
    pub fn add_session(&mut self, record: SessionRecord) -> bool {
        if self.sessions.len() >= MAX_SESSIONS {
            debug!("Session log full, declining session on {}", record.date());
            return false;
        }
        self.sessions.push(record);
        true
    }

    pub fn monthly_grades(&self) -> &[u32] {
        &self.monthly_grades
    }

    pub fn grade_count(&self) -> usize {
        self.monthly_grades.len()
    }

    /// Replace all grades with the first twelve of `grades`.
    pub fn set_monthly_grades(&mut self, grades: &[u32]) {
        let kept = grades.len().min(MAX_MONTHLY_GRADES);
        if kept < grades.len() {
            debug!("Dropping {} grades beyond month {}", grades.len() - kept, MAX_MONTHLY_GRADES);
        }
        self.monthly_grades = grades[..kept].to_vec();
    }
}
