//! Reply composers. Implement ReplyComposer.
//!
//! Plain text for terminals and simple transports; Flex-style JSON cards for rich chat clients.

pub mod card;
pub mod text;

pub use card::CardComposer;
pub use text::TextComposer;

use crate::ports::ReplyComposer;
use crate::shared::config::ReplyStyle;
use std::sync::Arc;

/// Composer for the configured style.
pub fn composer_for(style: ReplyStyle) -> Arc<dyn ReplyComposer> {
    match style {
        ReplyStyle::Text => Arc::new(TextComposer::new()),
        ReplyStyle::Card => Arc::new(CardComposer::new()),
    }
}
