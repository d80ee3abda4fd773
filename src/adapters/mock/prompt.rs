//! Scripted prompt for testing.
//!
//! Answers confirmations from a script and records everything shown to
//! the user, so tests can assert on dialogs without a terminal.

use std::collections::VecDeque;

use crate::traits::UserPrompt;

/// Scripted [`UserPrompt`] implementation.
///
/// Confirmations are answered from a queue; once the queue is empty the
/// default answer is used.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    default_answer: bool,
    /// Every confirmation message asked, in order
    pub confirmations: Vec<String>,
    /// Every alert message shown, in order
    pub alerts: Vec<String>,
}

impl ScriptedPrompt {
    /// Prompt that declines every confirmation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt that accepts every confirmation.
    pub fn accepting() -> Self {
        Self {
            default_answer: true,
            ..Self::default()
        }
    }

    /// Queue an answer for the next unanswered confirmation.
    pub fn with_answer(mut self, answer: bool) -> Self {
        self.answers.push_back(answer);
        self
    }

    /// The most recent alert, if any.
    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answers.pop_front().unwrap_or(self.default_answer)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
