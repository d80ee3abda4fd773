//! UI state record.
//!
//! Everything the page would otherwise keep in the document (form values,
//! filter controls, form visibility, the books container) lives in one
//! [`UiState`] owned by the controller and read by the renderer, so each
//! piece can be tested against a constructed state.
//!
//! ```text
//! gesture ──▶ App ──▶ BooksApi ──▶ backend
//!              │                     │
//!              ▼                     ▼
//!           UiState ◀── reconcile(snapshot)
//!              │
//!              ▼
//!             ui (pure rendering)
//! ```

mod list_view;
mod mode;

pub use list_view::{ListView, ReconcileTicket};
pub use mode::{Mode, SubmitIntent};

use crate::models::{Book, BookForm, FormField, ListFilter, StatusFilter};

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Active submit intent
    pub mode: Mode,
    /// Whether the form panel is shown
    pub form_visible: bool,
    /// Current form field values
    pub form: BookForm,
    /// Raw value of the status dropdown
    pub status_value: String,
    /// Raw text of the search box
    pub search_text: String,
    /// Filter the current list snapshot was requested with
    pub applied_filter: ListFilter,
    /// Books container
    pub list: ListView,
    issued: u64,
    applied: Option<ReconcileTicket>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            status_value: StatusFilter::ALL_VALUE.to_string(),
            ..Self::default()
        }
    }

    /// Reset the form and bind it to a new book.
    pub fn open_create(&mut self) {
        self.form = BookForm::default();
        self.mode = Mode::Creating;
        self.form_visible = true;
    }

    /// Seed the form from `book` and bind the submit intent to its id.
    ///
    /// Replaces any earlier binding.
    pub fn open_edit(&mut self, book: &Book) {
        self.form = BookForm::from_book(book);
        self.mode = Mode::Editing {
            id: book.id.clone(),
        };
        self.form_visible = true;
    }

    /// Hide the form and drop the submit intent.
    pub fn close_form(&mut self) {
        self.form_visible = false;
        self.mode = Mode::Browsing;
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn submit_intent(&self) -> SubmitIntent {
        SubmitIntent::from(&self.mode)
    }

    /// Filter derived from the current control values.
    pub fn control_filter(&self) -> ListFilter {
        ListFilter::from_controls(&self.status_value, &self.search_text)
    }

    /// Put the filter controls back to the unfiltered view.
    pub fn reset_filter_controls(&mut self) {
        self.status_value = StatusFilter::ALL_VALUE.to_string();
        self.search_text.clear();
    }

    /// Start a reconciliation: show the loading placeholder and hand out
    /// the next ticket.
    pub fn begin_reconciliation(&mut self) -> ReconcileTicket {
        self.issued += 1;
        self.list = ListView::Loading;
        ReconcileTicket(self.issued)
    }

    /// Replace the container with the outcome of a reconciliation.
    ///
    /// Returns `false` and leaves the state untouched when a newer
    /// reconciliation has already been applied.
    pub fn apply_reconciliation(
        &mut self,
        ticket: ReconcileTicket,
        filter: ListFilter,
        view: ListView,
    ) -> bool {
        if self.applied.is_some_and(|applied| ticket < applied) {
            tracing::debug!(
                "Discarding stale reconciliation #{} (applied #{})",
                ticket.sequence(),
                self.applied.map(|t| t.sequence()).unwrap_or_default()
            );
            return false;
        }
        self.applied = Some(ticket);
        self.applied_filter = filter;
        self.list = view;
        true
    }
}
