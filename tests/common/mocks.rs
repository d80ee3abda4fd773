//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from `shelf::adapters::mock`
//! and provides additional test-specific mock configurations.

pub use shelf::adapters::mock::{MockHttpClient, MockResponse, RecordedRequest, ScriptedPrompt};
pub use shelf::traits::{HttpError, Response};

use bytes::Bytes;

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    /// Creates a new mock HTTP configuration.
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a JSON response for `method` on `url` (and anything below it).
    pub fn with_json_response(self, method: &str, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            method,
            url,
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Configures the list endpoint to return `books`.
    pub fn with_books(self, books: serde_json::Value) -> Self {
        self.client.set_response(
            "GET",
            super::BOOKS_URL,
            MockResponse::Success(Response::json_body(200, &books)),
        );
        self
    }

    /// Configures a transport failure.
    #[allow(dead_code)]
    pub fn with_connection_failure(self, method: &str, url: &str) -> Self {
        self.client.set_response(
            method,
            url,
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    /// Configures a default success response for unmatched URLs.
    pub fn with_default_success(self, status: u16, body: &str) -> Self {
        self.client
            .set_default_response(MockResponse::Success(Response::new(
                status,
                Bytes::from(body.to_string()),
            )));
        self
    }

    /// Builds the configured MockHttpClient.
    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
