//! Common test utilities for integration tests.
//!
//! This module provides reusable book fixtures, mock configurations,
//! and helper functions for driving the controller in tests.
//!
//! # Example
//!
//! ```ignore
//! let (mut app, client) = TestAppBuilder::new()
//!     .with_http(MockHttpConfig::new().with_books(sample_books()))
//!     .accepting()
//!     .build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use shelf::app::App;
use shelf::config::ShelfConfig;

pub const API_URL: &str = "http://shelf.test/api";
pub const BOOKS_URL: &str = "http://shelf.test/api/books";

/// URL of a single book on the test API.
pub fn book_url(id: &str) -> String {
    format!("{}/{}", BOOKS_URL, id)
}

/// Config pointing at the test API.
pub fn test_config() -> ShelfConfig {
    ShelfConfig::new().with_api_url(API_URL)
}

/// Two books as the backend sends them, newest first.
pub fn sample_books() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 2,
            "title": "The Left Hand of Darkness",
            "author": "Ursula K. Le Guin",
            "genre": "Sci-Fi",
            "status": "reading",
            "total_pages": 304,
            "pages_read": 120,
            "notes": "Winter is long",
            "cover_url": "https://covers.example/lhod.jpg"
        },
        {
            "id": 1,
            "title": "Emma",
            "author": "Jane Austen",
            "genre": null,
            "status": "to-read",
            "total_pages": null,
            "pages_read": 0,
            "notes": null,
            "cover_url": null
        }
    ])
}

/// Builder for creating test App instances with various configurations.
pub struct TestAppBuilder {
    http: MockHttpConfig,
    prompt: ScriptedPrompt,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            http: MockHttpConfig::new(),
            prompt: ScriptedPrompt::new(),
        }
    }

    pub fn with_http(mut self, http: MockHttpConfig) -> Self {
        self.http = http;
        self
    }

    /// Accept every confirmation.
    pub fn accepting(mut self) -> Self {
        self.prompt = ScriptedPrompt::accepting();
        self
    }

    pub fn with_prompt(mut self, prompt: ScriptedPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    /// Builds the app and returns a handle to its mock client.
    pub fn build(self) -> (App<MockHttpClient, ScriptedPrompt>, MockHttpClient) {
        let client = self.http.build();
        let app = App::new(client.clone(), self.prompt, test_config());
        (app, client)
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
