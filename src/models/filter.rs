use super::ReadingStatus;

/// Value of the status dropdown.
///
/// `All` places no constraint on the list and is never sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReadingStatus),
}

impl StatusFilter {
    /// Dropdown value meaning "no status constraint".
    pub const ALL_VALUE: &'static str = "all";

    /// Interpret a dropdown value.
    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE || value.is_empty() {
            StatusFilter::All
        } else {
            StatusFilter::Only(ReadingStatus::from(value))
        }
    }
}

/// The active `(status, query)` pair applied to the list request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListFilter {
    pub status: StatusFilter,
    /// Search text, already trimmed
    pub query: String,
}

impl ListFilter {
    /// Derive the filter from the raw control values.
    pub fn from_controls(status_value: &str, search_text: &str) -> Self {
        Self {
            status: StatusFilter::from_value(status_value),
            query: search_text.trim().to_string(),
        }
    }

    /// Whether this is the unfiltered default view.
    pub fn is_unfiltered(&self) -> bool {
        self.status == StatusFilter::All && self.query.is_empty()
    }

    /// Query parameters for the list request, in send order.
    ///
    /// `status` is omitted for [`StatusFilter::All`] and `query` is omitted
    /// when blank.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let StatusFilter::Only(status) = &self.status {
            pairs.push(("status", status.as_str()));
        }
        let query = self.query.trim();
        if !query.is_empty() {
            pairs.push(("query", query));
        }
        pairs
    }
}
