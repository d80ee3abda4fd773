//! Sync engine: the four operations on the book collection.
//!
//! Each call issues exactly one request. Non-2xx answers become
//! [`SyncError::Application`] carrying the `message` of the JSON error
//! body when there is one.

use serde::Deserialize;

use crate::config::ShelfConfig;
use crate::error::{SyncError, SyncResult};
use crate::models::{Book, BookForm, ListFilter};
use crate::traits::{json_headers, Headers, HttpClient, Response};

/// Error body the backend sends with non-2xx answers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the `books` collection.
pub struct BooksApi<C> {
    client: C,
    config: ShelfConfig,
}

impl<C: HttpClient> BooksApi<C> {
    pub fn new(client: C, config: ShelfConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// URL of the list request for `filter`.
    pub fn list_url(&self, filter: &ListFilter) -> String {
        let base = self.config.books_url();
        let pairs = filter.query_pairs();
        if pairs.is_empty() {
            return base;
        }
        let query = pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", base, query)
    }

    /// GET the collection.
    pub async fn list(&self, filter: &ListFilter) -> SyncResult<Vec<Book>> {
        let url = self.list_url(filter);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url, &Headers::new()).await?;
        let response = Self::check(response)?;

        response
            .json::<Vec<Book>>()
            .map_err(|e| SyncError::InvalidResponse(e.to_string()))
    }

    /// POST a new book.
    pub async fn create(&self, form: &BookForm) -> SyncResult<()> {
        let url = self.config.books_url();
        let body = form.to_json()?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url, &body, &json_headers()).await?;
        Self::check(response)?;
        tracing::info!("Created book '{}'", form.title);
        Ok(())
    }

    /// PUT the form over an existing book.
    pub async fn update(&self, id: &str, form: &BookForm) -> SyncResult<()> {
        let url = self.config.book_url(id);
        let body = form.to_json()?;
        tracing::debug!("PUT {}", url);

        let response = self.client.put(&url, &body, &json_headers()).await?;
        Self::check(response)?;
        tracing::info!("Updated book {}", id);
        Ok(())
    }

    /// DELETE a book.
    pub async fn delete(&self, id: &str) -> SyncResult<()> {
        let url = self.config.book_url(id);
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(&url, &Headers::new()).await?;
        Self::check(response)?;
        tracing::info!("Deleted book {}", id);
        Ok(())
    }

    /// Map non-2xx responses to [`SyncError::Application`].
    fn check(response: Response) -> SyncResult<Response> {
        if response.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.message);
        Err(SyncError::Application {
            status: response.status,
            message,
        })
    }
}
