//! Console I/O for the interactive menu.
//!
//! `Console` wraps any reader/writer pair so the menu can run against
//! stdin/stdout or a scripted buffer. Styling is injected as a `Styler`.

mod prompt;
mod style;

pub use prompt::Console;
pub use style::{ColorStyler, PlainStyler, Styler, styler_for};
