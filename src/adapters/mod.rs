//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TerminalPrompt`] - Confirm/alert dialogs on the controlling terminal
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod mock;
pub mod reqwest_http;
pub mod terminal_prompt;

pub use mock::{MockHttpClient, ScriptedPrompt};
pub use reqwest_http::ReqwestHttpClient;
pub use terminal_prompt::TerminalPrompt;
