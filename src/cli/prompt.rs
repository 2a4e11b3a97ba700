use std::io::{self, BufRead, StdinLock, Stdout, Write};

use console::{style, Emoji};
use tracing::debug;

use crate::utils::validation::{
    validate_bounded_integer, validate_product_id, validate_yes_no, YesNo,
};

static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");

/// Line-based console. Every `read_*` helper keeps asking until it gets a
/// valid value, so callers never see bad input. Only I/O failures and end
/// of input escape.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn error(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}{} {}", CROSS, style("Error:").red(), message)
    }

    /// Prints `prompt` without a newline and reads one line, stripping only
    /// the line terminator.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn read_bounded_integer(&mut self, prompt: &str, min: u32, max: u32) -> io::Result<u32> {
        loop {
            let line = self.read_line(prompt)?;
            match validate_bounded_integer(&line, min, max) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected number {:?}: {:?}", line, e);
                    self.error(e)?;
                }
            }
        }
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> io::Result<YesNo> {
        loop {
            let line = self.read_line(prompt)?;
            match validate_yes_no(&line) {
                Ok(answer) => return Ok(answer),
                Err(e) => {
                    debug!("Rejected answer {:?}: {:?}", line, e);
                    self.say(e)?;
                }
            }
        }
    }

    pub fn read_product_id<F>(&mut self, prompt: &str, is_valid: F) -> io::Result<String>
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let line = self.read_line(prompt)?;
            match validate_product_id(&line, &is_valid) {
                Ok(id) => return Ok(id),
                Err(e) => {
                    debug!("Rejected product ID {:?}: {:?}", line, e);
                    self.error(e)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::has_product_id_length;
    use std::io::Cursor;

    fn terminal(script: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        console::set_colors_enabled(false);
        Terminal::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(terminal: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(terminal.into_output()).unwrap()
    }

    #[test]
    fn test_bounded_integer_retries_until_valid() {
        let mut term = terminal("\nabc\n9\n3\n");
        assert_eq!(term.read_bounded_integer("Pick: ", 1, 4).unwrap(), 3);

        let out = output(term);
        assert_eq!(out.matches("Pick: ").count(), 4);
        assert!(out.contains("Error: Input cannot be empty! Please enter a valid whole number."));
        assert!(out.contains("Error: Invalid input! Please enter a valid whole number."));
        assert!(out.contains("Error: Input out of range! Please try again."));
    }

    #[test]
    fn test_bounded_integer_handles_crlf() {
        let mut term = terminal("2\r\n");
        assert_eq!(term.read_bounded_integer("Pick: ", 1, 4).unwrap(), 2);
    }

    #[test]
    fn test_yes_no_retries() {
        let mut term = terminal("\nmaybe\ny\n");
        assert_eq!(term.read_yes_no("Continue? ").unwrap(), YesNo::Yes);

        let out = output(term);
        assert!(out.contains("Input cannot be empty! Please try again."));
        assert!(out.contains("Invalid input! Please enter Y or N."));
    }

    #[test]
    fn test_product_id_retries_and_normalizes() {
        let mut term = terminal("\nab\nabcd\nghi\n");
        let id = term
            .read_product_id("ID: ", has_product_id_length)
            .unwrap();
        assert_eq!(id, "GHI");

        let out = output(term);
        assert!(out.contains("Error: Input cannot be empty! Please enter a valid product ID."));
        assert_eq!(
            out.matches("Error: Invalid input! Please enter a valid product ID.").count(),
            2
        );
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut term = terminal("abc\n");
        let err = term.read_bounded_integer("Pick: ", 1, 4).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
