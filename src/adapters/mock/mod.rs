//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`ScriptedPrompt`] - Dialogs with scripted answers

pub mod http;
pub mod prompt;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use prompt::ScriptedPrompt;
