//! Application use cases. Orchestrate domain logic via ports.

pub mod risk_service;

pub use risk_service::RiskService;
