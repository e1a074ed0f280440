//! Line-oriented console used by the session and the raw-data paginator.
//!
//! Generic over the input/output streams so the whole interaction can be scripted in tests.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::error::BikeshareResult;

/// Width of the `-----` separator printed between sections.
pub const SEPARATOR_WIDTH: usize = 40;

/// Prompt/answer console over an input reader and an output writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    delay: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `delay` is slept after every [`Console::say`] line.
    pub fn new(input: R, output: W, delay: Duration) -> Self {
        Self { input, output, delay }
    }

    /// Print a status message, then pause.
    pub fn say(&mut self, message: &str) -> BikeshareResult<()> {
        self.print(message)?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }

    /// Print without pausing.
    pub fn print(&mut self, text: &str) -> BikeshareResult<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print the `-----` section separator.
    pub fn separator(&mut self) -> BikeshareResult<()> {
        self.say(&"-".repeat(SEPARATOR_WIDTH))
    }

    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> BikeshareResult<Option<String>> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Give back the output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// `true` when the answer contains "yes" in any case.
pub fn is_affirmative(answer: &str) -> bool {
    answer.to_lowercase().contains("yes")
}

/// `true` only for an explicit "no", ignoring case and surrounding whitespace.
pub fn is_decline(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("no")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{is_affirmative, is_decline, Console};

    #[test]
    fn ask_strips_line_endings_and_reports_eof() {
        let mut console = Console::new("Chicago\r\nall\n".as_bytes(), Vec::new(), Duration::ZERO);
        assert_eq!(console.ask("city?").unwrap().as_deref(), Some("Chicago"));
        assert_eq!(console.ask("month?").unwrap().as_deref(), Some("all"));
        assert_eq!(console.ask("day?").unwrap(), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "city?\nmonth?\nday?\n");
    }

    #[test]
    fn affirmative_matches_yes_anywhere() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES please"));
        assert!(!is_affirmative("y"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn decline_is_an_explicit_no_only() {
        assert!(is_decline("no"));
        assert!(is_decline(" NO \n"));
        assert!(!is_decline("nope"));
        assert!(!is_decline("y"));
        assert!(!is_decline(""));
    }
}
