//! Renderer.
//!
//! Pure functions from state to markup. Nothing here touches the network
//! or mutates state.

mod book_list;
mod html;
mod page;

pub use book_list::{
    render_books, render_card, render_list_view, render_message, EMPTY_MESSAGE,
    LOADING_MESSAGE,
};
pub use html::escape;
pub use page::render_page;

use crate::config::ShelfConfig;

/// Settings the renderer needs from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Cover image for books without one
    pub placeholder_cover: String,
    /// Target of the export link
    pub export_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&ShelfConfig::default())
    }
}

impl RenderOptions {
    pub fn from_config(config: &ShelfConfig) -> Self {
        Self {
            placeholder_cover: config.placeholder_cover.clone(),
            export_url: config.export_url(),
        }
    }
}
