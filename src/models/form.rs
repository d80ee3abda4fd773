use serde::Serialize;

use super::{Book, ReadingStatus};

/// Fields of the book form.
///
/// Each field has an element id (as named in the page) and a payload key
/// (as the backend expects it). The two differ for the page counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Author,
    Genre,
    TotalPages,
    PagesRead,
    Status,
    Notes,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 7] = [
        FormField::Title,
        FormField::Author,
        FormField::Genre,
        FormField::TotalPages,
        FormField::PagesRead,
        FormField::Status,
        FormField::Notes,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Author => "author",
            FormField::Genre => "genre",
            FormField::TotalPages => "total-pages",
            FormField::PagesRead => "pages-read",
            FormField::Status => "status",
            FormField::Notes => "notes",
        }
    }

    pub fn payload_key(self) -> &'static str {
        match self {
            FormField::TotalPages => "total_pages",
            FormField::PagesRead => "pages_read",
            other => other.element_id(),
        }
    }

    /// Human label used by the page and CLI help.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Genre => "Genre",
            FormField::TotalPages => "Total pages",
            FormField::PagesRead => "Pages read",
            FormField::Status => "Status",
            FormField::Notes => "Notes",
        }
    }
}

/// Current contents of the book form.
///
/// Values are kept exactly as typed and sent as strings; the backend owns
/// validation and numeric conversion. Serializing produces the request
/// payload with the backend's key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub total_pages: String,
    pub pages_read: String,
    pub status: String,
    pub notes: String,
}

impl Default for BookForm {
    /// A reset form: every field blank, status on its first option.
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            genre: String::new(),
            total_pages: String::new(),
            pages_read: String::new(),
            status: ReadingStatus::ToRead.as_str().to_string(),
            notes: String::new(),
        }
    }
}

impl BookForm {
    /// Seed the form from a fetched book.
    ///
    /// Absent optional values, and page counts of zero, become empty fields.
    pub fn from_book(book: &Book) -> Self {
        let count = |value: Option<u32>| match value {
            Some(n) if n > 0 => n.to_string(),
            _ => String::new(),
        };

        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            total_pages: count(book.total_pages),
            pages_read: count(book.pages_read),
            status: book.status.as_str().to_string(),
            notes: book.notes.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Genre => &self.genre,
            FormField::TotalPages => &self.total_pages,
            FormField::PagesRead => &self.pages_read,
            FormField::Status => &self.status,
            FormField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Genre => &mut self.genre,
            FormField::TotalPages => &mut self.total_pages,
            FormField::PagesRead => &mut self.pages_read,
            FormField::Status => &mut self.status,
            FormField::Notes => &mut self.notes,
        };
        *slot = value.into();
    }

    /// Request body for create and update.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
