//! Presentation strategies for console text.

use colored::*;

/// Turns plain text into console-ready text.
pub trait Styler {
    fn heading(&self, text: &str) -> String;
    fn label(&self, text: &str) -> String;
    fn success(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn prompt(&self, text: &str) -> String;
}

/// ANSI colors via the `colored` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorStyler;

impl Styler for ColorStyler {
    fn heading(&self, text: &str) -> String {
        text.cyan().bold().to_string()
    }

    fn label(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn success(&self, text: &str) -> String {
        text.green().to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.yellow().to_string()
    }

    fn error(&self, text: &str) -> String {
        text.red().to_string()
    }

    fn prompt(&self, text: &str) -> String {
        text.white().bold().to_string()
    }
}

/// Leaves text untouched. Used for `--no-color` and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn heading(&self, text: &str) -> String {
        text.to_string()
    }

    fn label(&self, text: &str) -> String {
        text.to_string()
    }

    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn prompt(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a styler from the resolved color setting.
pub fn styler_for(color: bool) -> Box<dyn Styler> {
    if color { Box::new(ColorStyler) } else { Box::new(PlainStyler) }
}
