//! Blocking user dialogs.
//!
//! The controller asks for confirmation before destructive actions and
//! reports mutation failures through a blocking alert. Both go through
//! this trait so tests can script the answers.

/// Blocking user-facing dialogs.
pub trait UserPrompt {
    /// Ask a yes/no question. Returns `true` when the user accepts.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user must acknowledge.
    fn alert(&mut self, message: &str);
}

impl<P: UserPrompt + ?Sized> UserPrompt for &mut P {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }
}
