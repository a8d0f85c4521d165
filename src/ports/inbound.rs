//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: a chat front-end that feeds messages to the application until the user leaves.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    async fn run(&self) -> Result<(), DomainError>;
}
