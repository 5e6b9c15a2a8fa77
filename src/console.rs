use std::fmt::Display;
use std::io::{BufRead, Write};

use log::debug;

use crate::error::Result;

/// Only an answer whose first character is 'y' (any case, surrounding
/// whitespace ignored) counts as yes.
pub fn parse_answer(line: &str) -> bool {
    line.trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase() == 'y')
        .unwrap_or(false)
}

/// Line-oriented prompt and narration over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints the question and reads one answer. End of input and lines
    /// that are not valid UTF-8 are a "no".
    pub fn ask(&mut self, question: &str) -> Result<bool> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            debug!("end of input at {question:?}");
            return Ok(false);
        }
        Ok(parse_answer(&String::from_utf8_lossy(&line)))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_parse_answer() {
        assert!(parse_answer("y"));
        assert!(parse_answer("  Yes please\n"));
        assert!(parse_answer("YEAH"));
        assert!(!parse_answer(""));
        assert!(!parse_answer("   \n"));
        assert!(!parse_answer("no"));
        assert!(!parse_answer("sure"));
        assert!(!parse_answer("ok y"));
    }

    #[test]
    fn test_ask_reads_one_line_per_question() {
        let mut console = Console::new(Cursor::new("y\nn\n"), Vec::new());
        assert!(console.ask("First?").unwrap());
        assert!(!console.ask("Second?").unwrap());
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "First?\nSecond?\n");
    }

    #[test]
    fn test_end_of_input_is_no() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert!(!console.ask("Anyone?").unwrap());
    }

    #[test]
    fn test_invalid_utf8_line_is_no() {
        let input: &[u8] = b"\xff\xfe\ny\n";
        let mut console = Console::new(input, Vec::new());
        assert!(!console.ask("Garbled?").unwrap());
        assert!(console.ask("Clean?").unwrap());
    }
}
