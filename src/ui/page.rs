//! Whole-page rendering: toolbar, form panel and books container.

use std::fmt::Write;

use super::book_list::render_list_view;
use super::html::escape;
use super::RenderOptions;
use crate::models::{FormField, ReadingStatus, StatusFilter};
use crate::view_state::{Mode, UiState};

fn render_status_options(selected: &str, include_all: bool) -> String {
    let mut html = String::new();
    if include_all {
        let _ = writeln!(
            html,
            "      <option value=\"{all}\"{}>All Books</option>",
            if selected == StatusFilter::ALL_VALUE { " selected" } else { "" },
            all = StatusFilter::ALL_VALUE
        );
    }
    let mut known = false;
    for status in ReadingStatus::KNOWN.iter() {
        let is_selected = status.as_str() == selected;
        known |= is_selected;
        let _ = writeln!(
            html,
            "      <option value=\"{}\"{}>{}</option>",
            status.as_str(),
            if is_selected { " selected" } else { "" },
            status.label()
        );
    }
    // Values outside the known set still show as selected.
    if !known && !(include_all && selected == StatusFilter::ALL_VALUE) && !selected.is_empty() {
        let _ = writeln!(
            html,
            "      <option value=\"{0}\" selected>{0}</option>",
            escape(selected)
        );
    }
    html
}

fn render_toolbar(state: &UiState, options: &RenderOptions) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"toolbar\">\n");
    html.push_str("  <button id=\"add-book-btn\">Add Book</button>\n");
    let _ = writeln!(
        html,
        "  <a id=\"export-csv-btn\" href=\"{}\">Export CSV</a>",
        escape(&options.export_url)
    );
    html.push_str("  <select id=\"status-filter\">\n");
    html.push_str(&render_status_options(&state.status_value, true));
    html.push_str("  </select>\n");
    let _ = writeln!(
        html,
        "  <input id=\"search-input\" type=\"text\" placeholder=\"Search title or author\" value=\"{}\">",
        escape(&state.search_text)
    );
    html.push_str("  <button id=\"search-btn\">Search</button>\n");
    html.push_str("</div>\n");
    html
}

fn render_form(state: &UiState) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        "<div id=\"book-form-container\"{}>",
        if state.form_visible { "" } else { " class=\"hidden\"" }
    );
    let heading = match state.mode {
        Mode::Editing { .. } => "Edit Book",
        _ => "Add Book",
    };
    let _ = writeln!(html, "  <h2>{}</h2>", heading);
    html.push_str("  <form id=\"book-form\">\n");

    for field in FormField::ALL {
        let id = field.element_id();
        let name = field.payload_key();
        let value = state.form.get(field);
        let _ = writeln!(html, "    <label for=\"{}\">{}</label>", id, field.label());
        match field {
            FormField::Status => {
                let _ = writeln!(html, "    <select id=\"{}\" name=\"{}\">", id, name);
                html.push_str(&render_status_options(value, false));
                html.push_str("    </select>\n");
            }
            FormField::Notes => {
                let _ = writeln!(
                    html,
                    "    <textarea id=\"{}\" name=\"{}\">{}</textarea>",
                    id,
                    name,
                    escape(value)
                );
            }
            FormField::TotalPages | FormField::PagesRead => {
                let _ = writeln!(
                    html,
                    "    <input id=\"{}\" name=\"{}\" type=\"number\" min=\"0\" value=\"{}\">",
                    id,
                    name,
                    escape(value)
                );
            }
            FormField::Title | FormField::Author | FormField::Genre => {
                let required = matches!(field, FormField::Title | FormField::Author);
                let _ = writeln!(
                    html,
                    "    <input id=\"{}\" name=\"{}\" type=\"text\" value=\"{}\"{}>",
                    id,
                    name,
                    escape(value),
                    if required { " required" } else { "" }
                );
            }
        }
    }

    html.push_str("    <button type=\"submit\">Save</button>\n");
    html.push_str("    <button type=\"button\" id=\"cancel-btn\">Cancel</button>\n");
    html.push_str("  </form>\n</div>\n");
    html
}

/// Render the complete page for the current state.
pub fn render_page(state: &UiState, options: &RenderOptions) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n<title>Reading Log</title>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&render_toolbar(state, options));
    html.push_str(&render_form(state));
    html.push_str("<div id=\"books-container\">\n");
    html.push_str(&render_list_view(&state.list, options));
    html.push_str("\n</div>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;
    use crate::view_state::ListView;

    #[test]
    fn test_hidden_form_when_browsing() {
        let state = UiState::new();
        let html = render_page(&state, &RenderOptions::default());
        assert!(html.contains("<div id=\"book-form-container\" class=\"hidden\">"));
        assert!(html.contains("Loading books..."));
        assert!(html.contains("<option value=\"all\" selected>All Books</option>"));
    }

    #[test]
    fn test_edit_form_is_seeded() {
        let mut state = UiState::new();
        let mut book = Book::new("5", "The \"Hobbit\"", "J.R.R. Tolkien");
        book.total_pages = Some(310);
        book.status = ReadingStatus::Reading;
        state.open_edit(&book);

        let html = render_page(&state, &RenderOptions::default());
        assert!(html.contains("<div id=\"book-form-container\">"));
        assert!(html.contains("<h2>Edit Book</h2>"));
        assert!(html.contains("value=\"The &quot;Hobbit&quot;\""));
        assert!(html.contains("id=\"total-pages\" name=\"total_pages\" type=\"number\" min=\"0\" value=\"310\""));
        assert!(html.contains("<option value=\"reading\" selected>Reading</option>"));
    }

    #[test]
    fn test_filter_controls_reflect_state() {
        let mut state = UiState::new();
        state.status_value = "finished".to_string();
        state.search_text = "le guin".to_string();
        state.list = ListView::Loaded(vec![]);

        let html = render_page(&state, &RenderOptions::default());
        assert!(html.contains("<option value=\"finished\" selected>Finished</option>"));
        assert!(html.contains("value=\"le guin\""));
        assert!(html.contains("No books found."));
    }

    #[test]
    fn test_unknown_form_status_kept() {
        let mut state = UiState::new();
        let mut book = Book::new("5", "X", "Y");
        book.status = ReadingStatus::from("paused");
        state.open_edit(&book);

        let html = render_form(&state);
        assert!(html.contains("<option value=\"paused\" selected>paused</option>"));
    }
}
