//! Error category classification.
//!
//! Categories decide how a failure is surfaced: transport failures get a
//! retry-oriented message, application failures prefer the server's own
//! message.

use std::fmt;

/// High-level categorization of sync failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The request never completed (connection, timeout, body read).
    Transport,

    /// The backend answered with a non-2xx status.
    Application,

    /// The exchange completed but a payload could not be encoded or decoded.
    Protocol,
}

impl ErrorCategory {
    /// Returns true if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Transport)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Application => "application",
            ErrorCategory::Protocol => "protocol",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
