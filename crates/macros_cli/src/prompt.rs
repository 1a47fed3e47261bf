//! Line-oriented interactive input.
//!
//! Every prompt reads exactly one line. Malformed numbers are reported as
//! errors and never re-prompted.

use crate::error::{CliError, CliResult};
use std::io::{BufRead, ErrorKind, Write};
use std::str::FromStr;

/// Interactive terminal session over any reader/writer pair.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `label` without a newline and reads one line, newline stripped.
    pub fn line(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(CliError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )));
        }
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(buf)
    }

    /// Reads one line and parses it as `T`, surrounding whitespace ignored.
    pub fn number<T: FromStr>(&mut self, label: &str, field: &'static str) -> CliResult<T> {
        let raw = self.line(label)?;
        raw.trim().parse().map_err(|_| CliError::InvalidNumber {
            field,
            value: raw.trim().to_string(),
        })
    }

    /// Yes/no question where only `n`/`N` answers no.
    pub fn confirm_default_yes(&mut self, label: &str) -> CliResult<bool> {
        let answer = self.line(label)?;
        Ok(!answer.trim().eq_ignore_ascii_case("n"))
    }
}
