//! Domain entities. Pure value objects for one risk evaluation.
//!
//! No terminal/IO types here; adapters render these.

use super::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest accepted number of days until the next reorder.
pub const MIN_DAYS_UNTIL_REORDER: u32 = 1;
/// Largest accepted number of days until the next reorder.
pub const MAX_DAYS_UNTIL_REORDER: u32 = 30;

/// Parameters for one product, as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    pub product_name: String,
    pub current_stock: u32,
    pub avg_daily_sales: f64,
    pub days_until_reorder: u32,
    pub is_weekend: bool,
    pub is_holiday: bool,
}

impl RiskInput {
    /// Checks the evaluation preconditions. The evaluator itself assumes these hold.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.product_name.trim().is_empty() {
            return Err(DomainError::invalid_input(
                "product_name",
                "must not be empty",
            ));
        }
        if !self.avg_daily_sales.is_finite() || self.avg_daily_sales < 0.0 {
            return Err(DomainError::invalid_input(
                "avg_daily_sales",
                format!("must be a non-negative number, got {}", self.avg_daily_sales),
            ));
        }
        if !(MIN_DAYS_UNTIL_REORDER..=MAX_DAYS_UNTIL_REORDER).contains(&self.days_until_reorder) {
            return Err(DomainError::invalid_input(
                "days_until_reorder",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_DAYS_UNTIL_REORDER, MAX_DAYS_UNTIL_REORDER, self.days_until_reorder
                ),
            ));
        }
        Ok(())
    }
}

/// Inventory adequacy relative to expected demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Stockout,
    High,
    Overstock,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH RISK",
            RiskLevel::Stockout => "STOCKOUT RISK",
            RiskLevel::Overstock => "OVERSTOCK RISK",
            RiskLevel::Low => "LOW RISK",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            RiskLevel::High => "🔴",
            RiskLevel::Stockout => "🟡",
            RiskLevel::Overstock => "🔵",
            RiskLevel::Low => "🟢",
        }
    }

    pub fn severity_color(self) -> SeverityColor {
        match self {
            RiskLevel::High => SeverityColor::Red,
            RiskLevel::Stockout => SeverityColor::Orange,
            RiskLevel::Overstock => SeverityColor::Blue,
            RiskLevel::Low => SeverityColor::Green,
        }
    }

    /// How close the product is to running out: HIGH > STOCKOUT > LOW.
    /// OVERSTOCK ranks below LOW (surplus, no shortage).
    pub fn shortage_rank(self) -> u8 {
        match self {
            RiskLevel::High => 3,
            RiskLevel::Stockout => 2,
            RiskLevel::Low => 1,
            RiskLevel::Overstock => 0,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.badge(), self.label())
    }
}

/// Display hint attached to a risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    Green,
    Orange,
    Red,
    Blue,
}

/// Recommended action. `Display` renders the user-facing sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Recommendation {
    OrderImmediately { units: u64 },
    OrderWithin { units: u64, days: u32 },
    ReduceNextOrder { percent: u32 },
    Maintain { next_order_units: u64 },
}

impl Recommendation {
    /// Units the user should order next, if the action names a quantity.
    pub fn order_units(&self) -> Option<u64> {
        match *self {
            Recommendation::OrderImmediately { units } => Some(units),
            Recommendation::OrderWithin { units, .. } => Some(units),
            Recommendation::Maintain { next_order_units } => Some(next_order_units),
            Recommendation::ReduceNextOrder { .. } => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::OrderImmediately { units } => {
                write!(f, "URGENT: Order {} units immediately", units)
            }
            Recommendation::OrderWithin { units, days } => {
                write!(f, "Order {} units within {} days", units, days)
            }
            Recommendation::ReduceNextOrder { percent } => {
                write!(f, "Reduce next order by {}% or run promotion", percent)
            }
            Recommendation::Maintain { next_order_units } => write!(
                f,
                "Maintain current levels, next order: {} units",
                next_order_units
            ),
        }
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
    pub expected_demand: f64,
    pub severity_color: SeverityColor,
}
