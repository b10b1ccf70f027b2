//! Prompting and input validation.
//!
//! Every `require_*` method re-prompts until the input satisfies its
//! constraint. The only way out without a value is end-of-input, which
//! surfaces as `ClimbError::InputClosed`.

use std::io::{BufRead, Write};

use log::debug;

use super::style::Styler;
use crate::error::{ClimbError, Result};

/// Line-oriented console over an injectable reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    styler: Box<dyn Styler>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, styler: Box<dyn Styler>) -> Self {
        Self { reader, writer, styler }
    }

    pub fn styler(&self) -> &dyn Styler {
        self.styler.as_ref()
    }

    /// Consume the console and hand back the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print one line as-is.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    /// Print a block of text that already ends lines itself.
    pub fn print_block(&mut self, block: &str) -> Result<()> {
        write!(self.writer, "{}", block)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn heading(&mut self, text: &str) -> Result<()> {
        let line = self.styler.heading(text);
        self.say(&line)
    }

    pub fn success(&mut self, text: &str) -> Result<()> {
        let line = self.styler.success(text);
        self.say(&line)
    }

    pub fn warning(&mut self, text: &str) -> Result<()> {
        let line = self.styler.warning(text);
        self.say(&line)
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        let line = self.styler.error(text);
        self.say(&line)
    }

    /// Show the prompt and read one line, without the trailing newline.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", self.styler.prompt(prompt))?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("End of input while waiting on prompt {:?}", prompt);
            return Err(ClimbError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn require_non_empty_text(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            self.error("Input cannot be empty. Please try again.")?;
        }
    }

    pub fn require_positive_integer(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(n) if n > 0 => match u32::try_from(n) {
                    Ok(n) => return Ok(n),
                    Err(_) => self.error("That number is too large. Please try again.")?,
                },
                Ok(_) => self.error("Please enter a number greater than zero.")?,
                Err(e) => {
                    debug!("Rejected integer input {:?}: {}", line, e);
                    self.error("Invalid input. Please enter a whole number.")?;
                }
            }
        }
    }

    pub fn require_positive_real(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<f64>() {
                Ok(x) if x.is_finite() && x > 0.0 => return Ok(x),
                Ok(_) => self.error("Please enter a number greater than zero.")?,
                Err(e) => {
                    debug!("Rejected real input {:?}: {}", line, e);
                    self.error("Invalid input. Please enter a number.")?;
                }
            }
        }
    }

    /// Integer within `[low, high]`, inclusive on both ends.
    pub fn require_ranged_choice(&mut self, prompt: &str, low: i64, high: i64) -> Result<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(n) if (low..=high).contains(&n) => return Ok(n),
                _ => self.error(&format!("Please enter a number between {} and {}.", low, high))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::PlainStyler;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Box::new(PlainStyler))
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_non_empty_text_skips_blank_lines() {
        let mut c = console("\n   \n  Alex  \n");
        assert_eq!(c.require_non_empty_text("Name: ").unwrap(), "Alex");
        let out = output(c);
        assert_eq!(out.matches("Input cannot be empty").count(), 2);
        assert_eq!(out.matches("Name: ").count(), 3);
    }

    #[test]
    fn test_positive_integer_retries_bad_input() {
        let mut c = console("abc\n0\n-4\n2.5\n12\n");
        assert_eq!(c.require_positive_integer("Days: ").unwrap(), 12);
        let out = output(c);
        assert_eq!(out.matches("whole number").count(), 2);
        assert_eq!(out.matches("greater than zero").count(), 2);
    }

    #[test]
    fn test_positive_integer_rejects_overflow() {
        let mut c = console("99999999999\n7\n");
        assert_eq!(c.require_positive_integer("Days: ").unwrap(), 7);
        assert!(output(c).contains("too large"));
    }

    #[test]
    fn test_positive_real_retries_bad_input() {
        let mut c = console("two\n0\n-1.5\ninf\nNaN\n2.5\n");
        assert_eq!(c.require_positive_real("Hours: ").unwrap(), 2.5);
        let out = output(c);
        assert_eq!(out.matches("Please enter a number.").count(), 1);
        assert_eq!(out.matches("greater than zero").count(), 4);
    }

    #[test]
    fn test_ranged_choice_bounds_inclusive() {
        let mut c = console("0\n5\nx\n4\n");
        assert_eq!(c.require_ranged_choice("Pick: ", 1, 4).unwrap(), 4);
        assert_eq!(output(c).matches("between 1 and 4").count(), 3);

        let mut c = console("1\n");
        assert_eq!(c.require_ranged_choice("Pick: ", 1, 4).unwrap(), 1);
    }

    #[test]
    fn test_end_of_input_is_input_closed() {
        let mut c = console("");
        assert!(matches!(c.require_non_empty_text("Name: "), Err(ClimbError::InputClosed)));

        let mut c = console("nope\n");
        assert!(matches!(c.require_positive_integer("Days: "), Err(ClimbError::InputClosed)));
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let mut c = console("2024-05-01\r\n");
        assert_eq!(c.read_line("Date: ").unwrap(), "2024-05-01");
    }
}
