//! Submit intent of the book form.

/// What the single form-submit handler does when the form is submitted.
///
/// Exactly one intent is active at a time. Opening the edit form for a
/// book replaces whatever intent was active before, including an earlier
/// edit binding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Form hidden, list on screen
    #[default]
    Browsing,
    /// Form open for a new book
    Creating,
    /// Form open for an existing book
    Editing { id: String },
}

impl Mode {
    /// The book the form is bound to, if editing.
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            Mode::Editing { id } => Some(id),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Browsing => "browsing",
            Mode::Creating => "creating",
            Mode::Editing { .. } => "editing",
        }
    }
}

/// Request a form submission turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitIntent {
    Create,
    Update { id: String },
}

impl From<&Mode> for SubmitIntent {
    fn from(mode: &Mode) -> Self {
        match mode.editing_id() {
            Some(id) => SubmitIntent::Update { id: id.to_string() },
            None => SubmitIntent::Create,
        }
    }
}
