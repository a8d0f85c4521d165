//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the vocabulary table, tokenizer, alias resolver, intent extractor and
//! reminder timing live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod intent;
pub mod reminder;
pub mod resolver;
pub mod tokenizer;
pub mod vocabulary;

pub use entities::{
    DaySchedule, NO_NOTE_SENTINELS, NOTE_PLACEHOLDER, ScheduleEntry, UserId, Weekday,
};
pub use errors::DomainError;
pub use intent::{Intent, Route, extract_intent};
pub use reminder::{ReminderKind, ReminderSettings};
pub use tokenizer::{Tokenizer, UnrecognizedInput};
pub use vocabulary::{AliasBinding, DayOffset, Meaning, Modifier, Token, TokenClass, Vocabulary};
