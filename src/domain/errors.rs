//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. User-facing outcomes such as an
//! unrecognized message or a missing schedule row are NOT errors; see `ReplyIntent`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Schedule store error: {0}")]
    Store(String),

    #[error("Clock error: {0}")]
    Clock(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
