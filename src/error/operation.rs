//! Collection operations and their fixed user-facing messages.

use std::fmt;

/// An operation against the book collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Fallback shown when the server gave no usable message.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::List => "Failed to load books.",
            Operation::Create => "Failed to add book",
            Operation::Update => "Failed to update book",
            Operation::Delete => "Failed to delete book",
        }
    }

    /// Shown when the request could not complete at all.
    pub fn retry_message(&self) -> &'static str {
        match self {
            Operation::List => "Failed to load books. Please try again later.",
            Operation::Create => "Failed to add book. Please try again.",
            Operation::Update => "Failed to update book. Please try again.",
            Operation::Delete => "Failed to delete book. Please try again.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
