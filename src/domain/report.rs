//! Report handed to the display port, plus the static business-impact figures.

use super::entities::{RiskInput, RiskResult};
use super::gauge::GaugeReading;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a display needs for one analyzed product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub product_name: String,
    pub current_stock: u32,
    pub days_until_reorder: u32,
    pub result: RiskResult,
    pub gauge: GaugeReading,
    pub generated_at: DateTime<Utc>,
}

impl RiskReport {
    pub fn new(input: &RiskInput, result: RiskResult, generated_at: DateTime<Utc>) -> Self {
        Self {
            product_name: input.product_name.trim().to_string(),
            current_stock: input.current_stock,
            days_until_reorder: input.days_until_reorder,
            gauge: GaugeReading::from_evaluation(input.current_stock, &result),
            result,
            generated_at,
        }
    }
}

/// Illustrative dashboard figure. Fixed text, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

pub const BUSINESS_IMPACT: [BusinessMetric; 3] = [
    BusinessMetric {
        label: "Potential Monthly Savings",
        value: "$3,500",
        delta: "↑ 25%",
    },
    BusinessMetric {
        label: "Stockout Reduction",
        value: "40%",
        delta: "↓ 15%",
    },
    BusinessMetric {
        label: "ROI",
        value: "300%",
        delta: "↑ 250%",
    },
];
