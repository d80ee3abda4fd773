//! Contents of the books container.

use crate::models::Book;

/// What the books container currently shows.
///
/// Each reconciliation replaces the whole value; nothing is patched in
/// place.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListView {
    /// A list request is in flight
    #[default]
    Loading,
    /// The last list request failed; the message is user-facing
    Failed(String),
    /// Snapshot returned by the backend, in server order
    Loaded(Vec<Book>),
}

impl ListView {
    /// Books on screen, empty unless a snapshot is loaded.
    pub fn books(&self) -> &[Book] {
        match self {
            ListView::Loaded(books) => books,
            _ => &[],
        }
    }

    /// Find a rendered book by id.
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books().iter().find(|book| book.id == id)
    }
}

/// Monotonic sequence number handed out when a list request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReconcileTicket(pub(crate) u64);

impl ReconcileTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}
