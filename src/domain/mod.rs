//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod gauge;
pub mod report;
pub mod risk;

pub use entities::{
    MAX_DAYS_UNTIL_REORDER, MIN_DAYS_UNTIL_REORDER, Recommendation, RiskInput, RiskLevel,
    RiskResult, SeverityColor,
};
pub use errors::DomainError;
pub use gauge::{BandTone, GAUGE_BANDS, GAUGE_TITLE, GaugeBand, GaugeReading};
pub use report::{BUSINESS_IMPACT, BusinessMetric, RiskReport};
pub use risk::{RiskEvaluator, RiskFactors};
