//! Wire and form models for the book collection.

mod book;
mod filter;
mod form;

pub use book::{progress_percent, Book, ReadingStatus};
pub use filter::{ListFilter, StatusFilter};
pub use form::{BookForm, FormField};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize id as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize nullable strings as empty string
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize optional text, treating an empty string as absent
pub(crate) fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.filter(|s| !s.is_empty()))
}

/// Helper to deserialize a page count.
///
/// The backend stores whatever the form sent when the value was blank, so a
/// count may arrive as an integer, a numeric string, an empty string or null.
/// Blank and negative values read as absent.
pub(crate) fn deserialize_page_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct PageCountVisitor;

    impl<'de> Visitor<'de> for PageCountVisitor {
        type Value = Option<u32>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a page count as integer, numeric string, or null")
        }

        fn visit_unit<E>(self) -> Result<Option<u32>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Option<u32>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<u32>, E>
        where
            E: de::Error,
        {
            Ok(Some(u32::try_from(value).unwrap_or(u32::MAX)))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Option<u32>, E>
        where
            E: de::Error,
        {
            if value < 0 {
                return Ok(None);
            }
            self.visit_u64(value as u64)
        }

        fn visit_f64<E>(self, value: f64) -> Result<Option<u32>, E>
        where
            E: de::Error,
        {
            if value.is_finite() && value >= 0.0 {
                Ok(Some(value.trunc().min(u32::MAX as f64) as u32))
            } else {
                Ok(None)
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Option<u32>, E>
        where
            E: de::Error,
        {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<i64>() {
                Ok(n) => self.visit_i64(n),
                Err(_) => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
            }
        }
    }

    deserializer.deserialize_any(PageCountVisitor)
}
