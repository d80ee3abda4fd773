use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::{
    deserialize_id, deserialize_nullable_string, deserialize_optional_text,
    deserialize_page_count,
};

/// Reading status of a book.
///
/// The backend does not constrain the column, so values outside the three
/// known statuses are kept verbatim in [`ReadingStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReadingStatus {
    #[default]
    ToRead,
    Reading,
    Finished,
    Other(String),
}

impl ReadingStatus {
    /// The three statuses offered by the form and the filter dropdown.
    pub const KNOWN: [ReadingStatus; 3] = [
        ReadingStatus::ToRead,
        ReadingStatus::Reading,
        ReadingStatus::Finished,
    ];

    /// Wire value (`to-read`, `reading`, `finished`, or the raw value).
    pub fn as_str(&self) -> &str {
        match self {
            ReadingStatus::ToRead => "to-read",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Finished => "finished",
            ReadingStatus::Other(raw) => raw,
        }
    }

    /// Display label; unknown values display unchanged.
    pub fn label(&self) -> &str {
        match self {
            ReadingStatus::ToRead => "To Read",
            ReadingStatus::Reading => "Reading",
            ReadingStatus::Finished => "Finished",
            ReadingStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for ReadingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "to-read" => ReadingStatus::ToRead,
            "reading" => ReadingStatus::Reading,
            "finished" => ReadingStatus::Finished,
            _ => ReadingStatus::Other(value),
        }
    }
}

impl From<&str> for ReadingStatus {
    fn from(value: &str) -> Self {
        ReadingStatus::from(value.to_string())
    }
}

impl From<ReadingStatus> for String {
    fn from(status: ReadingStatus) -> Self {
        match status {
            ReadingStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<ReadingStatus, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_nullable_string(deserializer).map(ReadingStatus::from)
}

/// A book as returned by the collection endpoint.
///
/// Fields the client never reads (such as `created_at`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Backend-assigned identifier (integer or string on the wire)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub author: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: ReadingStatus,
    #[serde(default, deserialize_with = "deserialize_page_count")]
    pub total_pages: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_page_count")]
    pub pages_read: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub cover_url: Option<String>,
}

impl Book {
    /// Minimal book with the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre: None,
            status: ReadingStatus::ToRead,
            total_pages: None,
            pages_read: None,
            notes: None,
            cover_url: None,
        }
    }

    /// Progress through the book, or `None` when there is no page total.
    pub fn progress(&self) -> Option<u8> {
        match self.total_pages {
            Some(total) if total > 0 => Some(progress_percent(self.pages_read.unwrap_or(0), total)),
            _ => None,
        }
    }

    /// Genre for display.
    pub fn genre_label(&self) -> &str {
        self.genre.as_deref().unwrap_or("No genre")
    }
}

/// `round(read / total * 100)` clamped to `[0, 100]`, rounding halves up.
///
/// A zero total yields 0.
pub fn progress_percent(pages_read: u32, total_pages: u32) -> u8 {
    if total_pages == 0 {
        return 0;
    }
    let read = u64::from(pages_read);
    let total = u64::from(total_pages);
    let rounded = (read * 200 + total) / (total * 2);
    rounded.min(100) as u8
}
