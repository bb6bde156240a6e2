//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, RiskReport};

/// Display port. Presents a finished report to the user.
///
/// Implemented by the terminal dashboard and the JSON printer.
pub trait DisplayPort: Send + Sync {
    /// Render one report.
    ///
    /// # Errors
    /// Returns `DomainError::Render` if the output cannot be written.
    fn show(&self, report: &RiskReport) -> Result<(), DomainError>;
}
