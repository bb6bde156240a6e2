//! Risk evaluation. Maps one `RiskInput` to a `RiskResult`.
//!
//! Pure and stateless: no logging, no clock, no I/O. Callers validate input first.

use super::entities::{Recommendation, RiskInput, RiskLevel, RiskResult};
use super::errors::DomainError;
use serde::{Deserialize, Serialize};

/// HIGH risk orders this multiple of expected demand.
pub const URGENT_ORDER_MULTIPLIER: f64 = 2.0;
/// STOCKOUT risk orders this multiple of expected demand.
pub const STOCKOUT_ORDER_MULTIPLIER: f64 = 1.5;
/// Window for the STOCKOUT order, in days.
pub const STOCKOUT_ORDER_WINDOW_DAYS: u32 = 2;
/// Suggested cut to the next order on OVERSTOCK.
pub const OVERSTOCK_ORDER_CUT_PERCENT: u32 = 30;
/// Exclusive upper bound for an order quantity (2^64).
const MAX_ORDER_UNITS: f64 = u64::MAX as f64;

/// Tunable multipliers and thresholds.
///
/// Thresholds are multiples of expected demand, checked in order:
/// `high_risk_factor`, `stockout_factor` (strict `<`), then `overstock_factor` (strict `>`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub weekend_multiplier: f64,
    pub holiday_multiplier: f64,
    pub high_risk_factor: f64,
    pub stockout_factor: f64,
    pub overstock_factor: f64,
}

impl Default for RiskFactors {
    fn default() -> Self {
        Self {
            weekend_multiplier: 1.3,
            holiday_multiplier: 1.8,
            high_risk_factor: 0.5,
            stockout_factor: 1.0,
            overstock_factor: 5.0,
        }
    }
}

impl RiskFactors {
    /// Every factor must be finite and positive, and the thresholds strictly increasing.
    pub fn validate(&self) -> Result<(), DomainError> {
        let named = [
            ("weekend_multiplier", self.weekend_multiplier),
            ("holiday_multiplier", self.holiday_multiplier),
            ("high_risk_factor", self.high_risk_factor),
            ("stockout_factor", self.stockout_factor),
            ("overstock_factor", self.overstock_factor),
        ];
        for (name, value) in named {
            if !value.is_finite() || value <= 0.0 {
                return Err(DomainError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !(self.high_risk_factor < self.stockout_factor
            && self.stockout_factor < self.overstock_factor)
        {
            return Err(DomainError::Config(format!(
                "thresholds must satisfy high_risk_factor < stockout_factor < overstock_factor, got {} / {} / {}",
                self.high_risk_factor, self.stockout_factor, self.overstock_factor
            )));
        }
        Ok(())
    }
}

/// Stateless evaluator. Cheap to copy and share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskEvaluator {
    factors: RiskFactors,
}

impl RiskEvaluator {
    /// Build an evaluator after checking the factors.
    pub fn new(factors: RiskFactors) -> Result<Self, DomainError> {
        factors.validate()?;
        Ok(Self { factors })
    }

    /// Field checks plus a magnitude check: the largest order this input can
    /// produce must be a representable whole number of units.
    pub fn check_input(&self, input: &RiskInput) -> Result<(), DomainError> {
        input.validate()?;
        let largest_order = self.expected_demand(input) * URGENT_ORDER_MULTIPLIER;
        if !largest_order.is_finite() || largest_order >= MAX_ORDER_UNITS {
            return Err(DomainError::invalid_input(
                "avg_daily_sales",
                format!(
                    "{} per day over {} days is too large to size an order",
                    input.avg_daily_sales, input.days_until_reorder
                ),
            ));
        }
        Ok(())
    }

    /// Daily sales after seasonal uplift. Weekend first, then holiday.
    pub fn adjusted_daily_sales(&self, input: &RiskInput) -> f64 {
        let mut sales = input.avg_daily_sales;
        if input.is_weekend {
            sales *= self.factors.weekend_multiplier;
        }
        if input.is_holiday {
            sales *= self.factors.holiday_multiplier;
        }
        sales
    }

    /// Units expected to sell before the next reorder.
    pub fn expected_demand(&self, input: &RiskInput) -> f64 {
        self.adjusted_daily_sales(input) * f64::from(input.days_until_reorder)
    }

    /// Classify one product. First matching branch wins; boundaries fall through.
    /// Assumes `check_input` passed.
    pub fn evaluate(&self, input: &RiskInput) -> RiskResult {
        let expected_demand = self.expected_demand(input);
        let stock = f64::from(input.current_stock);
        let f = &self.factors;

        let (risk_level, recommendation) = if stock < expected_demand * f.high_risk_factor {
            (
                RiskLevel::High,
                Recommendation::OrderImmediately {
                    units: whole_units(expected_demand * URGENT_ORDER_MULTIPLIER),
                },
            )
        } else if stock < expected_demand * f.stockout_factor {
            (
                RiskLevel::Stockout,
                Recommendation::OrderWithin {
                    units: whole_units(expected_demand * STOCKOUT_ORDER_MULTIPLIER),
                    days: STOCKOUT_ORDER_WINDOW_DAYS,
                },
            )
        } else if stock > expected_demand * f.overstock_factor {
            (
                RiskLevel::Overstock,
                Recommendation::ReduceNextOrder {
                    percent: OVERSTOCK_ORDER_CUT_PERCENT,
                },
            )
        } else {
            (
                RiskLevel::Low,
                Recommendation::Maintain {
                    next_order_units: whole_units(expected_demand),
                },
            )
        };

        RiskResult {
            risk_level,
            recommendation,
            expected_demand,
            severity_color: risk_level.severity_color(),
        }
    }
}

/// Floor to whole units. Demand is non-negative for validated input.
fn whole_units(quantity: f64) -> u64 {
    quantity.floor() as u64
}
