//! Report rendering and persistence.
//!
//! Rendering builds strings from already-computed values; nothing here
//! recomputes the grade summary. Persistence overwrites a fixed-name file
//! in the given directory.

mod render;
mod write;

pub use render::{present, render_console_report, render_report, render_session};
pub use write::{REPORT_FILE, SESSION_FILE, persist, persist_session};
