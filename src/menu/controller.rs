//! Menu loop dispatching choices to the profile, analysis and reports.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::choice::MenuChoice;
use crate::analysis::{analyze_grades, recommend};
use crate::console::Console;
use crate::domain::{ClimbingProfile, MAX_MONTHLY_GRADES, MAX_SESSIONS, prompt_for_difficulty, prompt_for_session};
use crate::error::{ClimbError, Result};
use crate::report;

const FAREWELL: &str = "Thanks for climbing with us. See you on the wall!";

/// What the loop does after a choice has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the console and the single profile for this run.
pub struct MenuController<R, W> {
    console: Console<R, W>,
    profile: ClimbingProfile,
    output_dir: PathBuf,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(console: Console<R, W>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            console,
            profile: ClimbingProfile::new(),
            output_dir: output_dir.into(),
        }
    }

    pub fn profile(&self) -> &ClimbingProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ClimbingProfile {
        &mut self.profile
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Tear down into the profile and console (for inspecting output).
    pub fn into_parts(self) -> (ClimbingProfile, Console<R, W>) {
        (self.profile, self.console)
    }

    /// Collect the profile, then serve menu choices until Exit.
    ///
    /// End of input ends the run the same way Exit does.
    pub fn run(&mut self) -> Result<()> {
        match self.run_until_exit() {
            Err(ClimbError::InputClosed) => {
                info!("Input closed, leaving menu");
                self.console.say("")?;
                self.console.say(FAREWELL)?;
                Ok(())
            }
            other => other,
        }
    }

    fn run_until_exit(&mut self) -> Result<()> {
        self.console.heading("Welcome to Climblog!")?;
        self.console.say("Let's set up your climbing profile.")?;
        self.profile.initialize(&mut self.console)?;

        loop {
            self.show_menu()?;
            let line = self.console.read_line("Enter your choice: ")?;
            let Some(choice) = MenuChoice::parse(&line) else {
                debug!("Rejected menu input {:?}", line);
                self.console.error("Invalid choice. Please enter a number from 1 to 8.")?;
                continue;
            };
            if self.handle(choice)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.say("")?;
        self.console.heading("===== Climblog Menu =====")?;
        for choice in MenuChoice::ALL {
            self.console.say(&format!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    /// Run one menu action.
    pub fn handle(&mut self, choice: MenuChoice) -> Result<Flow> {
        info!("Menu choice {} ({:?})", choice.number(), choice);
        match choice {
            MenuChoice::ViewReport => self.view_report()?,
            MenuChoice::Recommend => self.show_recommendation()?,
            MenuChoice::LogSession => self.log_single_session()?,
            MenuChoice::RateDifficulty => self.rate_difficulty()?,
            MenuChoice::MonthlyGrades => self.enter_monthly_grades()?,
            MenuChoice::Exit => {
                self.console.say(FAREWELL)?;
                return Ok(Flow::Exit);
            }
            MenuChoice::AddToWeeklyLog => self.add_to_weekly_log()?,
            MenuChoice::ViewWeeklyLog => self.view_weekly_log()?,
        }
        Ok(Flow::Continue)
    }

    fn view_report(&mut self) -> Result<()> {
        let summary = analyze_grades(self.profile.monthly_grades());
        report::present(&mut self.console, &self.profile, &summary)?;
        let written = report::persist(&self.profile, &summary, &self.output_dir);
        self.report_write(written, "Report")
    }

    fn show_recommendation(&mut self) -> Result<()> {
        let lines = recommend(
            self.profile.days_per_year(),
            self.profile.hours_per_session(),
            self.profile.total_annual_hours(),
            &self.profile.name,
        );
        self.console.heading("Recommendation")?;
        for line in &lines {
            self.console.say(line)?;
        }
        Ok(())
    }

    /// Shown and saved to file only; the weekly log is untouched.
    fn log_single_session(&mut self) -> Result<()> {
        let record = prompt_for_session(&mut self.console)?;
        self.console.heading("Session logged")?;
        self.console.say(&format!("Date: {}", record.date()))?;
        self.console.say(&format!("Hours: {}", record.hours()))?;
        self.console.say(&format!("Difficulty: {}", record.difficulty()))?;
        let written = report::persist_session(&record, &self.output_dir);
        self.report_write(written, "Session")
    }

    fn rate_difficulty(&mut self) -> Result<()> {
        let rating = prompt_for_difficulty(&mut self.console)?;
        self.console.say(&format!("{}: {}", rating, rating.describe()))
    }

    fn enter_monthly_grades(&mut self) -> Result<()> {
        let months = self.console.require_ranged_choice(
            &format!("How many months to rate (1-{})? ", MAX_MONTHLY_GRADES),
            1,
            MAX_MONTHLY_GRADES as i64,
        )?;

        let mut grades = Vec::new();
        for month in 1..=months {
            let grade = self
                .console
                .require_ranged_choice(&format!("Month {} difficulty (1-10): ", month), 1, 10)?;
            grades.push(grade as u32);
        }
        self.profile.set_monthly_grades(&grades);
        self.console.success(&format!("Saved {} monthly grades.", self.profile.grade_count()))
    }

    fn add_to_weekly_log(&mut self) -> Result<()> {
        let record = prompt_for_session(&mut self.console)?;
        if self.profile.add_session(record) {
            let count = self.profile.session_count();
            self.console
                .success(&format!("Session added to weekly log ({}/{}).", count, MAX_SESSIONS))
        } else {
            warn!("Weekly log full, session dropped");
            self.console
                .warning(&format!("Weekly log is full ({} sessions). Session not added.", MAX_SESSIONS))
        }
    }

    fn view_weekly_log(&mut self) -> Result<()> {
        if self.profile.sessions().is_empty() {
            return self.console.say("No sessions logged yet.");
        }
        self.console.heading("Weekly Log")?;
        let lines: Vec<String> = self
            .profile
            .sessions()
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s.summary()))
            .collect();
        for line in &lines {
            self.console.say(line)?;
        }
        Ok(())
    }

    /// An unwritable destination is a warning, never fatal.
    fn report_write(&mut self, written: Result<PathBuf>, what: &str) -> Result<()> {
        match written {
            Ok(path) => self.console.success(&format!("{} saved to {}", what, path.display())),
            Err(ClimbError::Persist { path, source }) => {
                warn!("Could not write {}: {}", path.display(), source);
                self.console
                    .warning(&format!("Warning: could not save {} to {}: {}", what.to_lowercase(), path.display(), source))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::PlainStyler;
    use crate::domain::{DifficultyRating, SessionRecord};
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestController = MenuController<Cursor<Vec<u8>>, Vec<u8>>;

    fn controller(input: &str, dir: &Path) -> TestController {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Box::new(PlainStyler));
        MenuController::new(console, dir)
    }

    fn output(controller: TestController) -> String {
        let (_, console) = controller.into_parts();
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_exit_returns_exit_flow() {
        let temp = TempDir::new().unwrap();
        let mut c = controller("", temp.path());
        assert_eq!(c.handle(MenuChoice::Exit).unwrap(), Flow::Exit);
        assert!(output(c).contains(FAREWELL));
    }

    #[test]
    fn test_rate_difficulty_has_no_side_effects() {
        let temp = TempDir::new().unwrap();
        let mut c = controller("4\n", temp.path());
        assert_eq!(c.handle(MenuChoice::RateDifficulty).unwrap(), Flow::Continue);
        assert_eq!(c.profile().session_count(), 0);
        assert!(std::fs::read_dir(temp.path()).unwrap().next().is_none());
        assert!(output(c).contains(DifficultyRating::Extreme.describe()));
    }

    #[test]
    fn test_monthly_grades_prompts_for_each_month() {
        let temp = TempDir::new().unwrap();
        let mut c = controller("13\n3\n5\n11\n7\n2\n", temp.path());
        c.handle(MenuChoice::MonthlyGrades).unwrap();
        assert_eq!(c.profile().monthly_grades(), &[5, 7, 2]);
        let out = output(c);
        assert!(out.contains("between 1 and 12"));
        assert!(out.contains("between 1 and 10"));
        assert!(out.contains("Saved 3 monthly grades."));
    }

    #[test]
    fn test_weekly_log_full_message() {
        let temp = TempDir::new().unwrap();
        let mut c = controller("Sunday\n2\n1\n", temp.path());
        for n in 0..MAX_SESSIONS {
            c.profile_mut()
                .add_session(SessionRecord::new(format!("day {}", n), 1.0, DifficultyRating::Easy));
        }
        c.handle(MenuChoice::AddToWeeklyLog).unwrap();
        assert_eq!(c.profile().session_count(), MAX_SESSIONS);
        assert!(output(c).contains("Weekly log is full (50 sessions)"));
    }

    #[test]
    fn test_empty_weekly_log() {
        let temp = TempDir::new().unwrap();
        let mut c = controller("", temp.path());
        c.handle(MenuChoice::ViewWeeklyLog).unwrap();
        assert!(output(c).contains("No sessions logged yet."));
    }

    #[test]
    fn test_unwritable_report_is_warning() {
        let temp = TempDir::new().unwrap();
        let mut c = controller("", &temp.path().join("missing"));
        assert_eq!(c.handle(MenuChoice::ViewReport).unwrap(), Flow::Continue);
        assert!(output(c).contains("Warning: could not save report"));
    }

    #[test]
    fn test_end_of_input_during_setup_exits_cleanly() {
        let temp = TempDir::new().unwrap();
        let mut c = controller("Alex\n", temp.path());
        c.run().unwrap();
        assert!(output(c).ends_with(&format!("{}\n", FAREWELL)));
    }
}
