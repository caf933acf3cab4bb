//! Line-oriented question/answer I/O over any reader and writer.
//!
//! The binary wires this to locked stdin/stdout; tests use byte buffers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tracing::trace;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    /// Reads one line without its line terminator. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            trace!("End of input");
            return Ok(None);
        }

        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Prints `question` and reads the answer.
    ///
    /// A missing answer (end of input) reads as the empty string.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        self.say(question)?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Writes `text` followed by a newline and flushes.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
