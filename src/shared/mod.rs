//! Cross-cutting pieces: configuration and reply texts.

pub mod config;
pub mod messages;
