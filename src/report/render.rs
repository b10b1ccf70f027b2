//! Console and file renderings of the profile and sessions.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use crate::analysis::GradeSummary;
use crate::console::{Console, Styler};
use crate::domain::{ClimbingProfile, SessionRecord};
use crate::error::Result;

const REPORT_TITLE: &str = "Climbing Progress Report";
const SESSION_TITLE: &str = "Climbing Session";
const FRAME_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 14;

fn underline(title: &str) -> String {
    "=".repeat(title.len())
}

fn summary_line(summary: &GradeSummary) -> String {
    format!(
        "Average: {:.2} | High: {} | Low: {}",
        summary.average, summary.high, summary.low
    )
}

/// Plain-text report body, one field per line.
pub fn render_report(profile: &ClimbingProfile, summary: &GradeSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", REPORT_TITLE);
    let _ = writeln!(out, "{}", underline(REPORT_TITLE));
    let _ = writeln!(out, "Climber: {}", profile.name);
    let _ = writeln!(out, "Style: {}", profile.style);
    let _ = writeln!(out, "Location: {}", profile.location);
    let _ = writeln!(out, "Days/year: {}", profile.days_per_year());
    let _ = writeln!(out, "Hrs/session: {}", profile.hours_per_session());
    let _ = writeln!(out, "Total Hours: {:.2}", profile.total_annual_hours());

    if !profile.monthly_grades().is_empty() {
        let _ = writeln!(out, "Monthly Difficulty Ratings:");
        for (month, grade) in profile.monthly_grades().iter().enumerate() {
            let _ = writeln!(out, "Month {}: {}", month + 1, grade);
        }
        let _ = writeln!(out, "{}", summary_line(summary));
    }
    out
}

/// Framed, column-aligned report for the terminal.
pub fn render_console_report(profile: &ClimbingProfile, summary: &GradeSummary, styler: &dyn Styler) -> String {
    let frame = "=".repeat(FRAME_WIDTH);
    let rule = "-".repeat(FRAME_WIDTH);
    let field = |label: &str, value: String| format!("{}{}\n", styler.label(&format!("{:<LABEL_WIDTH$}", label)), value);

    let mut out = String::new();
    out.push_str(&frame);
    out.push('\n');
    out.push_str(&styler.heading(&format!("{:^FRAME_WIDTH$}", REPORT_TITLE.to_uppercase())));
    out.push('\n');
    out.push_str(&frame);
    out.push('\n');
    out.push_str(&field("Climber:", profile.name.clone()));
    out.push_str(&field("Style:", profile.style.clone()));
    out.push_str(&field("Location:", profile.location.clone()));
    out.push_str(&field("Days/year:", profile.days_per_year().to_string()));
    out.push_str(&field("Hrs/session:", profile.hours_per_session().to_string()));
    out.push_str(&field("Total Hours:", format!("{:.2}", profile.total_annual_hours())));

    if !profile.monthly_grades().is_empty() {
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&styler.label("Monthly Difficulty Ratings:"));
        out.push('\n');
        for (month, grade) in profile.monthly_grades().iter().enumerate() {
            let _ = writeln!(out, "  Month {:>2}: {:>2}", month + 1, grade);
        }
        out.push_str(&summary_line(summary));
        out.push('\n');
    }
    out.push_str(&frame);
    out.push('\n');
    out
}

pub fn present<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    profile: &ClimbingProfile,
    summary: &GradeSummary,
) -> Result<()> {
    let block = render_console_report(profile, summary, console.styler());
    console.print_block(&block)
}

pub fn render_session(record: &SessionRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", SESSION_TITLE);
    let _ = writeln!(out, "{}", underline(SESSION_TITLE));
    let _ = writeln!(out, "Date: {}", record.date());
    let _ = writeln!(out, "Hours: {}", record.hours());
    let _ = writeln!(out, "Difficulty: {}", record.difficulty());
    out
}
