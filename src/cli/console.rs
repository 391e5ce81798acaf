use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Line-oriented prompt over any reader/writer pair.
///
/// The menus are written against this instead of stdin/stdout directly so
/// they can be driven from in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for menu text.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label` without a newline and read one trimmed line.
    /// Returns `None` once input is exhausted. Bytes that are not UTF-8
    /// come back as replacement characters, so a garbled line is just a
    /// bad answer.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read input")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}
