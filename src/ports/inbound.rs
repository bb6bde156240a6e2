//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the risk analysis use case.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive session (collect inputs, analyze, repeat on request).
    /// Returns when the user is done.
    async fn run(&self) -> Result<(), DomainError>;
}
