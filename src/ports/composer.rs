//! Reply rendering port. One intent pipeline, interchangeable output formats.

use crate::domain::{DaySchedule, ReminderKind, ScheduleEntry};
use crate::shared::messages;
use serde::Serialize;

/// A message ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReplyMessage {
    Text {
        text: String,
    },
    /// Rich card (bubble or carousel) with a plain-text fallback.
    Flex {
        #[serde(rename = "altText")]
        alt_text: String,
        contents: serde_json::Value,
    },
}

impl ReplyMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Text shown to a reader that cannot render cards.
    pub fn plain_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::Flex { alt_text, .. } => alt_text,
        }
    }
}

/// Renders resolved schedule data into a reply.
pub trait ReplyComposer: Send + Sync {
    /// One segment per looked-up day, in the given (weekday) order. Misses render as "not found".
    fn days(&self, days: &[DaySchedule], detailed: bool) -> ReplyMessage;

    /// The whole registered week.
    fn week(&self, entries: &[ScheduleEntry], detailed: bool) -> ReplyMessage;

    fn help(&self) -> ReplyMessage;

    /// Pushed reminder about `entry` (tomorrow's for night, today's for morning).
    fn reminder(&self, kind: ReminderKind, entry: &ScheduleEntry) -> ReplyMessage;

    fn unrecognized(&self) -> ReplyMessage {
        ReplyMessage::text(messages::UNRECOGNIZED)
    }

    fn no_target(&self) -> ReplyMessage {
        ReplyMessage::text(messages::NO_TARGET)
    }

    /// Short status line (command confirmations and validation errors).
    fn notice(&self, text: &str) -> ReplyMessage {
        ReplyMessage::text(text)
    }
}
