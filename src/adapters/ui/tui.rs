//! Implements InputPort. Inquire-based chat loop on the terminal.
//!
//! Each line typed is one incoming message for the configured user.

use crate::domain::{DomainError, UserId};
use crate::ports::{InputPort, ReplyMessage};
use crate::usecases::ConversationService;
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::Text;
use std::sync::Arc;
use tracing::{info, warn};

const EXIT_WORDS: &[&str] = &["exit", "quit", "終了"];

/// Shown when the store or clock fails; the message itself is not retried.
const FAILURE_REPLY: &str = "エラーが発生しました。時間をおいて再度お試しください。";

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("🗑").with_fg(Color::LightGreen))
        .with_answered_prompt_prefix(Styled::new("›").with_fg(Color::DarkGrey));
    inquire::set_global_render_config(config);
}

/// TUI adapter. One prompt per message, reply printed below it.
pub struct ChatTui {
    conversation: Arc<ConversationService>,
    user: UserId,
    show_card_json: bool,
}

impl ChatTui {
    pub fn new(conversation: Arc<ConversationService>, user: UserId, show_card_json: bool) -> Self {
        Self {
            conversation,
            user,
            show_card_json,
        }
    }

    fn print_reply(&self, reply: &ReplyMessage) {
        println!("{}\n", reply.plain_text());
        if let (true, ReplyMessage::Flex { contents, .. }) = (self.show_card_json, reply) {
            match serde_json::to_string_pretty(contents) {
                Ok(json) => println!("{json}\n"),
                Err(e) => warn!(error = %e, "card JSON could not be printed"),
            }
        }
    }
}

async fn prompt_line() -> Result<Option<String>, DomainError> {
    let answer = tokio::task::spawn_blocking(|| Text::new("").prompt())
        .await
        .map_err(|e| DomainError::Ui(e.to_string()))?;
    match answer {
        Ok(line) => Ok(Some(line)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

#[async_trait]
impl InputPort for ChatTui {
    async fn run(&self) -> Result<(), DomainError> {
        info!(user = %self.user, "chat session started");
        while let Some(line) = prompt_line().await? {
            if EXIT_WORDS.iter().any(|w| *w == line.trim()) {
                break;
            }
            match self.conversation.handle_message(&self.user, &line).await {
                Ok(Some(reply)) => self.print_reply(&reply),
                Ok(None) => {}
                Err(e) => {
                    warn!(user = %self.user, error = %e, "message handling failed");
                    println!("{FAILURE_REPLY}\n");
                }
            }
        }
        info!(user = %self.user, "chat session ended");
        Ok(())
    }
}
