//! Failures of a single collection operation.

use thiserror::Error;

use super::{ErrorCategory, Operation};
use crate::traits::HttpError;

/// Error returned by the sync engine.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The request did not complete.
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    /// The backend answered with a non-2xx status.
    #[error("server returned {status}{}", message_suffix(.message))]
    Application {
        status: u16,
        /// `message` field of the JSON error body, when there was one
        message: Option<String>,
    },

    /// A 2xx body did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The request body could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl SyncError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::Transport(_) => ErrorCategory::Transport,
            SyncError::Application { .. } => ErrorCategory::Application,
            SyncError::InvalidResponse(_) | SyncError::Encode(_) => ErrorCategory::Protocol,
        }
    }

    /// Server-provided message, if the backend sent a non-empty one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SyncError::Application { message, .. } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }

    /// What the user is told when `operation` fails with this error.
    ///
    /// List failures never show technical or server detail. Mutation
    /// failures prefer the server message and are prefixed with `Error:`.
    pub fn user_message(&self, operation: Operation) -> String {
        match (operation, self) {
            (Operation::List, SyncError::Transport(_)) => operation.retry_message().to_string(),
            (Operation::List, _) => operation.failure_message().to_string(),
            (_, SyncError::Transport(_)) | (_, SyncError::Encode(_)) => {
                operation.retry_message().to_string()
            }
            (_, err) => format!(
                "Error: {}",
                err.server_message()
                    .unwrap_or_else(|| operation.failure_message())
            ),
        }
    }
}
