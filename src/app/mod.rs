//! View state controller.
//!
//! [`App`] routes user gestures to the sync engine and folds the results
//! back into the [`UiState`]. Every gesture runs to completion on the
//! calling task; failures are reported to the user through the prompt and
//! never returned as errors.

pub mod sync;

pub use sync::BooksApi;

use crate::config::ShelfConfig;
use crate::error::{Operation, SyncError};
use crate::models::{Book, FormField, ListFilter};
use crate::traits::{HttpClient, UserPrompt};
use crate::ui::{self, RenderOptions};
use crate::view_state::{ListView, Mode, SubmitIntent, UiState};

/// Confirmation asked before a delete request is sent.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this book?";

/// Result of a user gesture that may touch the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The request succeeded and the list was reconciled
    Completed,
    /// The user declined the confirmation; nothing was sent
    Declined,
    /// The request failed; the user has been alerted
    Failed,
}

/// The book list controller.
pub struct App<C, P> {
    api: BooksApi<C>,
    prompt: P,
    state: UiState,
    render_options: RenderOptions,
}

impl<C: HttpClient, P: UserPrompt> App<C, P> {
    pub fn new(client: C, prompt: P, config: ShelfConfig) -> Self {
        let render_options = RenderOptions::from_config(&config);
        Self {
            api: BooksApi::new(client, config),
            prompt,
            state: UiState::new(),
            render_options,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn mode(&self) -> &Mode {
        &self.state.mode
    }

    pub fn api(&self) -> &BooksApi<C> {
        &self.api
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    /// Books currently on screen.
    pub fn books(&self) -> &[Book] {
        self.state.list.books()
    }

    /// Initial load of the unfiltered list.
    pub async fn start(&mut self) {
        self.reconcile(ListFilter::default()).await;
    }

    // ---------------------------------------------------------------------
    // Form gestures
    // ---------------------------------------------------------------------

    /// "Add book": blank form bound to create.
    pub fn open_create(&mut self) {
        tracing::debug!("Opening create form (was {})", self.state.mode.as_str());
        self.state.open_create();
    }

    /// "Edit" on a card: form seeded from `book`, bound to its id.
    pub fn open_edit(&mut self, book: &Book) {
        tracing::debug!("Opening edit form for book {}", book.id);
        self.state.open_edit(book);
    }

    /// "Edit" on the card with `id`, if that book is on screen.
    pub fn open_edit_by_id(&mut self, id: &str) -> bool {
        match self.state.list.find(id).cloned() {
            Some(book) => {
                self.open_edit(&book);
                true
            }
            None => false,
        }
    }

    /// "Cancel": hide the form and drop any edit binding.
    pub fn cancel(&mut self) {
        tracing::debug!("Form cancelled (was {})", self.state.mode.as_str());
        self.state.close_form();
    }

    /// Typing into a form field.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state.set_field(field, value);
    }

    /// Form submission. Creates or updates depending on the active mode.
    pub async fn submit(&mut self) -> ActionOutcome {
        let intent = self.state.submit_intent();
        let form = self.state.form.clone();

        let (operation, result) = match &intent {
            SubmitIntent::Create => (Operation::Create, self.api.create(&form).await),
            SubmitIntent::Update { id } => (Operation::Update, self.api.update(id, &form).await),
        };

        match result {
            Ok(()) => {
                self.state.close_form();
                self.reconcile_after_mutation().await;
                ActionOutcome::Completed
            }
            Err(err) => {
                self.report_failure(operation, &err);
                ActionOutcome::Failed
            }
        }
    }

    // ---------------------------------------------------------------------
    // Card gestures
    // ---------------------------------------------------------------------

    /// "Delete" on a card. Asks first; a declined confirmation sends nothing.
    pub async fn delete(&mut self, id: &str) -> ActionOutcome {
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            tracing::debug!("Delete of book {} declined", id);
            return ActionOutcome::Declined;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                self.reconcile_after_mutation().await;
                ActionOutcome::Completed
            }
            Err(err) => {
                self.report_failure(Operation::Delete, &err);
                ActionOutcome::Failed
            }
        }
    }

    // ---------------------------------------------------------------------
    // Filter gestures
    // ---------------------------------------------------------------------

    /// Status dropdown changed.
    pub async fn select_status(&mut self, value: &str) {
        self.state.status_value = value.to_string();
        self.apply_filter_controls().await;
    }

    /// Text typed into the search box; nothing is fetched yet.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
    }

    /// Search button clicked.
    pub async fn search(&mut self) {
        self.apply_filter_controls().await;
    }

    /// Key pressed in the search box; only Enter triggers a search.
    pub async fn search_key(&mut self, key: &str) {
        if key == "Enter" {
            self.apply_filter_controls().await;
        }
    }

    /// Re-derive the filter from the controls and reconcile.
    pub async fn apply_filter_controls(&mut self) {
        let filter = self.state.control_filter();
        self.reconcile(filter).await;
    }

    /// Re-fetch with the filter the list is currently showing.
    pub async fn refresh(&mut self) {
        let filter = self.state.applied_filter.clone();
        self.reconcile(filter).await;
    }

    // ---------------------------------------------------------------------
    // Rendering and navigation
    // ---------------------------------------------------------------------

    /// Where the export button navigates.
    pub fn export_url(&self) -> String {
        self.api.config().export_url()
    }

    /// Books container markup.
    pub fn render_list(&self) -> String {
        ui::render_list_view(&self.state.list, &self.render_options)
    }

    /// Whole page markup.
    pub fn render_page(&self) -> String {
        ui::render_page(&self.state, &self.render_options)
    }

    // ---------------------------------------------------------------------
    // Reconciliation
    // ---------------------------------------------------------------------

    /// Replace the container with a fresh snapshot for `filter`.
    async fn reconcile(&mut self, filter: ListFilter) {
        let ticket = self.state.begin_reconciliation();
        if filter.is_unfiltered() {
            tracing::debug!("Reconciling full list");
        } else {
            tracing::debug!("Reconciling with {:?}", filter);
        }

        let view = match self.api.list(&filter).await {
            Ok(books) => {
                tracing::debug!("Reconciled {} books", books.len());
                ListView::Loaded(books)
            }
            Err(err) => {
                Self::log_failure(Operation::List, &err);
                ListView::Failed(err.user_message(Operation::List))
            }
        };

        self.state.apply_reconciliation(ticket, filter, view);
    }

    /// After a successful mutation the list returns to the unfiltered view.
    async fn reconcile_after_mutation(&mut self) {
        self.state.reset_filter_controls();
        self.reconcile(ListFilter::default()).await;
    }

    fn report_failure(&mut self, operation: Operation, err: &SyncError) {
        Self::log_failure(operation, err);
        self.prompt.alert(&err.user_message(operation));
    }

    fn log_failure(operation: Operation, err: &SyncError) {
        if err.category().is_retryable() {
            tracing::error!("{} failed: {}", operation, err);
        } else {
            tracing::warn!("{} failed ({}): {}", operation, err.category(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, ScriptedPrompt};
    use crate::traits::{HttpError, Response};

    const BASE: &str = "http://shelf.test/api";
    const BOOKS: &str = "http://shelf.test/api/books";

    fn app(prompt: ScriptedPrompt) -> (App<MockHttpClient, ScriptedPrompt>, MockHttpClient) {
        let client = MockHttpClient::new();
        let app = App::new(client.clone(), prompt, ShelfConfig::new().with_api_url(BASE));
        (app, client)
    }

    fn list_response(client: &MockHttpClient, body: serde_json::Value) {
        client.set_response("GET", BOOKS, MockResponse::Success(Response::json_body(200, &body)));
    }

    #[tokio::test]
    async fn test_start_loads_unfiltered_list() {
        let (mut app, client) = app(ScriptedPrompt::new());
        list_response(&client, serde_json::json!([{"id": 1, "title": "A", "author": "x"}]));

        app.start().await;

        assert_eq!(app.books().len(), 1);
        assert_eq!(client.get_requests()[0].url, BOOKS);
    }

    #[tokio::test]
    async fn test_list_failure_renders_message() {
        let (mut app, client) = app(ScriptedPrompt::new());
        client.set_response("GET", BOOKS, MockResponse::Success(Response::new(500, "")));

        app.start().await;
        assert_eq!(app.state().list, ListView::Failed("Failed to load books.".to_string()));
        assert!(app.prompt().alerts.is_empty());
    }

    #[tokio::test]
    async fn test_list_transport_failure_renders_retry_message() {
        let (mut app, client) = app(ScriptedPrompt::new());
        client.set_response(
            "GET",
            BOOKS,
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        app.start().await;
        assert_eq!(
            app.render_list(),
            r#"<div class="loading">Failed to load books. Please try again later.</div>"#
        );
    }

    #[tokio::test]
    async fn test_search_key_only_enter() {
        let (mut app, client) = app(ScriptedPrompt::new());
        list_response(&client, serde_json::json!([]));

        app.set_search_text("dune");
        app.search_key("d").await;
        assert!(client.get_requests().is_empty());

        app.search_key("Enter").await;
        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://shelf.test/api/books?query=dune");
    }

    #[tokio::test]
    async fn test_failed_create_keeps_form_open() {
        let (mut app, client) = app(ScriptedPrompt::new());
        client.set_response(
            "POST",
            BOOKS,
            MockResponse::Success(Response::json_body(
                400,
                &serde_json::json!({"message": "Title and author are required"}),
            )),
        );

        app.open_create();
        app.set_field(FormField::Genre, "Poetry");
        let outcome = app.submit().await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert!(app.state().form_visible);
        assert_eq!(app.mode(), &Mode::Creating);
        assert_eq!(app.state().form.genre, "Poetry");
        assert_eq!(
            app.prompt().last_alert(),
            Some("Error: Title and author are required")
        );
        assert!(client.requests_with_method("GET").is_empty());
    }

    #[tokio::test]
    async fn test_successful_update_restores_create_intent() {
        let (mut app, client) = app(ScriptedPrompt::new());
        list_response(&client, serde_json::json!([]));
        client.set_response(
            "PUT",
            "http://shelf.test/api/books/4",
            MockResponse::Success(Response::new(200, "{}")),
        );

        app.open_edit(&Book::new("4", "Dune", "Frank Herbert"));
        assert_eq!(app.submit().await, ActionOutcome::Completed);

        assert_eq!(app.mode(), &Mode::Browsing);
        assert!(!app.state().form_visible);
        assert_eq!(app.state().submit_intent(), SubmitIntent::Create);
    }

    #[tokio::test]
    async fn test_mutation_resets_filters() {
        let (mut app, client) = app(ScriptedPrompt::accepting());
        list_response(&client, serde_json::json!([]));
        client.set_response(
            "DELETE",
            "http://shelf.test/api/books/4",
            MockResponse::Success(Response::new(200, "{}")),
        );

        app.select_status("reading").await;
        assert_eq!(app.state().applied_filter, ListFilter::from_controls("reading", ""));

        assert_eq!(app.delete("4").await, ActionOutcome::Completed);
        assert!(app.state().applied_filter.is_unfiltered());
        assert_eq!(app.state().status_value, "all");

        let gets = client.requests_with_method("GET");
        assert_eq!(gets.last().unwrap().url, BOOKS);
    }

    #[tokio::test]
    async fn test_refresh_keeps_applied_filter() {
        let (mut app, client) = app(ScriptedPrompt::new());
        list_response(&client, serde_json::json!([]));

        app.select_status("finished").await;
        app.refresh().await;

        let gets = client.requests_with_method("GET");
        assert_eq!(gets.len(), 2);
        assert_eq!(gets[1].url, "http://shelf.test/api/books?status=finished");
    }

    #[test]
    fn test_export_url() {
        let (app, _) = app(ScriptedPrompt::new());
        assert_eq!(app.export_url(), "http://shelf.test/api/export");
    }
}
