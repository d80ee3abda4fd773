//! Books container rendering.
//!
//! Pure functions from a book sequence (or a placeholder state) to the
//! markup placed inside the books container.

use std::fmt::Write;

use super::html::escape;
use super::RenderOptions;
use crate::models::Book;
use crate::view_state::ListView;

pub const LOADING_MESSAGE: &str = "Loading books...";
pub const EMPTY_MESSAGE: &str = "No books found.";

/// Single placeholder line shown instead of cards.
pub fn render_message(message: &str) -> String {
    format!(r#"<div class="loading">{}</div>"#, escape(message))
}

/// Markup for one book card.
pub fn render_card(book: &Book, options: &RenderOptions) -> String {
    let id = escape(&book.id);
    let title = escape(&book.title);
    let cover = book
        .cover_url
        .as_deref()
        .unwrap_or(options.placeholder_cover.as_str());
    let status = book.status.as_str();

    let mut html = String::new();
    html.push_str("<div class=\"book-card\">\n");
    let _ = writeln!(
        html,
        "  <div class=\"book-cover\"><img src=\"{}\" alt=\"{} cover\"></div>",
        escape(cover),
        title
    );
    html.push_str("  <div class=\"book-details\">\n");
    let _ = writeln!(html, "    <h3 class=\"book-title\">{}</h3>", title);
    let _ = writeln!(
        html,
        "    <p class=\"book-author\">by {}</p>",
        escape(&book.author)
    );
    let _ = writeln!(
        html,
        "    <div class=\"book-meta\"><span>{}</span><span class=\"status {}\">{}</span></div>",
        escape(book.genre_label()),
        escape(status),
        escape(book.status.label())
    );

    if let (Some(total), Some(percent)) = (book.total_pages, book.progress()) {
        html.push_str("    <div class=\"progress-container\">\n");
        let _ = writeln!(
            html,
            "      <div class=\"progress-text\">{} of {} pages ({}%)</div>",
            book.pages_read.unwrap_or(0),
            total,
            percent
        );
        let _ = writeln!(
            html,
            "      <div class=\"progress-bar\"><div class=\"progress\" style=\"width: {}%\"></div></div>",
            percent
        );
        html.push_str("    </div>\n");
    }

    if let Some(notes) = book.notes.as_deref().filter(|n| !n.is_empty()) {
        let _ = writeln!(html, "    <div class=\"book-notes\">{}</div>", escape(notes));
    }

    html.push_str("    <div class=\"book-actions\">\n");
    let _ = writeln!(
        html,
        "      <button class=\"edit-btn\" data-id=\"{}\">Edit</button>",
        id
    );
    let _ = writeln!(
        html,
        "      <button class=\"delete-btn\" data-id=\"{}\">Delete</button>",
        id
    );
    html.push_str("    </div>\n  </div>\n</div>\n");
    html
}

/// Markup for a book sequence: one card per book in the order given, or the
/// empty placeholder.
pub fn render_books(books: &[Book], options: &RenderOptions) -> String {
    if books.is_empty() {
        return render_message(EMPTY_MESSAGE);
    }
    books
        .iter()
        .map(|book| render_card(book, options))
        .collect()
}

/// Markup for whatever the container currently holds.
pub fn render_list_view(view: &ListView, options: &RenderOptions) -> String {
    match view {
        ListView::Loading => render_message(LOADING_MESSAGE),
        ListView::Failed(message) => render_message(message),
        ListView::Loaded(books) => render_books(books, options),
    }
}
