//! Client configuration.
//!
//! Built from defaults, then the environment, then command-line overrides.
//!
//! # Example
//!
//! ```ignore
//! use shelf::config::ShelfConfig;
//!
//! let config = ShelfConfig::from_env()
//!     .with_api_url("http://books.local/api");
//! ```

use std::time::Duration;

/// Default API base, matching the backend's development server.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Image shown for books without a cover.
pub const DEFAULT_PLACEHOLDER_COVER: &str = "static/placeholder.png";

pub const API_URL_ENV: &str = "SHELF_API_URL";
pub const PLACEHOLDER_COVER_ENV: &str = "SHELF_PLACEHOLDER_COVER";
pub const TIMEOUT_ENV: &str = "SHELF_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct ShelfConfig {
    /// Base URL the `books` and `export` paths are mounted under
    pub api_url: String,
    /// Cover image used when a book has no `cover_url`
    pub placeholder_cover: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            placeholder_cover: DEFAULT_PLACEHOLDER_COVER.to_string(),
            request_timeout: None,
        }
    }
}

impl ShelfConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base. A trailing slash is dropped.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_placeholder_cover(mut self, path: impl Into<String>) -> Self {
        self.placeholder_cover = path.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Defaults overridden by `SHELF_API_URL`, `SHELF_PLACEHOLDER_COVER`
    /// and `SHELF_TIMEOUT_SECS`.
    ///
    /// Unparseable or zero timeouts are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config = config.with_api_url(url.trim());
            }
        }

        if let Ok(path) = std::env::var(PLACEHOLDER_COVER_ENV) {
            if !path.trim().is_empty() {
                config = config.with_placeholder_cover(path.trim());
            }
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config = config.with_request_timeout(Some(Duration::from_secs(secs)));
                }
                _ => tracing::warn!("Ignoring invalid {}={:?}", TIMEOUT_ENV, raw),
            }
        }

        config
    }

    /// URL of the collection endpoint.
    pub fn books_url(&self) -> String {
        format!("{}/books", self.api_url)
    }

    /// URL of a single book.
    pub fn book_url(&self, id: &str) -> String {
        format!("{}/books/{}", self.api_url, urlencoding::encode(id))
    }

    /// URL the export button navigates to.
    pub fn export_url(&self) -> String {
        format!("{}/export", self.api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(PLACEHOLDER_COVER_ENV);
        std::env::remove_var(TIMEOUT_ENV);
    }

    #[test]
    fn test_defaults() {
        let config = ShelfConfig::default();
        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(config.placeholder_cover, "static/placeholder.png");
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_endpoint_urls() {
        let config = ShelfConfig::new().with_api_url("http://books.local/api/");
        assert_eq!(config.books_url(), "http://books.local/api/books");
        assert_eq!(config.book_url("42"), "http://books.local/api/books/42");
        assert_eq!(config.book_url("a b"), "http://books.local/api/books/a%20b");
        assert_eq!(config.export_url(), "http://books.local/api/export");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(API_URL_ENV, "http://10.0.0.5:8080/api/");
        std::env::set_var(PLACEHOLDER_COVER_ENV, "/img/none.png");
        std::env::set_var(TIMEOUT_ENV, "15");

        let config = ShelfConfig::from_env();
        assert_eq!(config.api_url, "http://10.0.0.5:8080/api");
        assert_eq!(config.placeholder_cover, "/img/none.png");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_bad_timeout() {
        clear_env();
        std::env::set_var(TIMEOUT_ENV, "soon");

        let config = ShelfConfig::from_env();
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);

        clear_env();
    }
}
