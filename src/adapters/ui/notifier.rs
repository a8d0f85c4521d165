//! Implements NotifierPort on the terminal: pushed messages are printed between prompts.

use crate::domain::{DomainError, UserId};
use crate::ports::{NotifierPort, ReplyMessage};
use async_trait::async_trait;
use crossterm::style::Stylize;

/// Prints reminders addressed to the local user; other users' reminders are only logged.
pub struct ConsoleNotifier {
    user: UserId,
}

impl ConsoleNotifier {
    pub fn new(user: UserId) -> Self {
        Self { user }
    }

    /// Text printed for `message`, or `None` when it is for someone else.
    pub fn render(&self, user: &UserId, message: &ReplyMessage) -> Option<String> {
        (user == &self.user).then(|| format!("\n{}\n", message.plain_text()))
    }
}

#[async_trait]
impl NotifierPort for ConsoleNotifier {
    async fn push(&self, user: &UserId, message: &ReplyMessage) -> Result<(), DomainError> {
        match self.render(user, message) {
            Some(text) => println!("{}", text.yellow()),
            None => tracing::debug!(user = %user, "reminder for another user not shown"),
        }
        Ok(())
    }
}
