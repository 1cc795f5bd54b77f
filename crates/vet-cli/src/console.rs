//! Line-based console I/O in the toolkit's colors.

use std::io::{self, BufRead, IsTerminal, Write};

use colored::{Color, ColoredString, Colorize};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Reads lines from `input` and writes red text, yellow errors, and
/// screen clears to `output`. Without color the same text goes out plain.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear: bool,
    color: bool,
}

impl<R: BufRead> Console<R, io::Stdout> {
    /// A console on stdout. Clearing only happens on a terminal.
    pub fn new(input: R, output: io::Stdout, color: bool) -> Self {
        let clear = output.is_terminal();
        Self {
            input,
            output,
            clear,
            color,
        }
    }
}

#[cfg(test)]
impl<R: BufRead, W: Write> Console<R, W> {
    /// A console that never clears the screen or colors text.
    pub fn plain(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear: false,
            color: false,
        }
    }

    /// Everything written so far.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print text in the toolkit color.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        let text = self.paint(text, Color::Red);
        writeln!(self.output, "{text}")
    }

    /// Print an error message.
    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        let text = self.paint(text, Color::Yellow);
        writeln!(self.output, "{text}")
    }

    fn paint(&self, text: &str, color: Color) -> ColoredString {
        if self.color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Print a blank line.
    pub fn gap(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !prompt.is_empty() {
            let prompt = self.paint(prompt, Color::Red);
            write!(self.output, "{prompt}")?;
        }
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Clear the screen when writing to a terminal.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        if self.clear {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_console_writes_no_escapes() {
        let mut console = Console::plain(b"first\r\nsecond".as_slice(), Vec::new());
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line("").unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line("").unwrap(), None);
        console.say("hello").unwrap();
        console.warn("careful").unwrap();
        console.clear_screen().unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "> hello\ncareful\n");
    }
}
