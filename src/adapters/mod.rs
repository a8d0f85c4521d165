//! Infrastructure adapters. Implement outbound ports and the reply composers.
//!
//! Clock, schedule stores, reply rendering, terminal UI. Map errors to DomainError.

pub mod clock;
pub mod persistence;
pub mod reply;
pub mod ui;
