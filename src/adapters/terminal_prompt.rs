//! Terminal-backed dialogs.
//!
//! Confirmations read a `y`/`n` line from the input stream; alerts are
//! written to the error stream so stdout only carries rendered output.

use std::io::{self, BufRead, Write};

use crate::traits::UserPrompt;

/// [`UserPrompt`] on a line-oriented terminal.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    /// Answer every confirmation with yes without reading input
    assume_yes: bool,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on the process stdin/stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Prompt on arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
        }
    }

    /// Skip confirmation questions (`--yes`).
    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> UserPrompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        if write!(self.output, "{} [y/N] ", message).is_err() || self.output.flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            tracing::warn!("Failed to show alert: {}", e);
        }
    }
}
