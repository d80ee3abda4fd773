//! Shelf - a client for a reading-list service.
//!
//! The crate keeps the book list shown to the user in sync with the
//! backend's `/books` collection and renders it as markup.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod traits;
pub mod ui;
pub mod view_state;
