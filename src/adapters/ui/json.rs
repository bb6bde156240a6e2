//! Implements DisplayPort as pretty-printed JSON on stdout.

use crate::domain::{BUSINESS_IMPACT, BusinessMetric, DomainError, RiskReport};
use crate::ports::DisplayPort;
use serde::Serialize;
use std::io::{Write, stdout};

/// Report plus the text the dashboard would show.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a RiskReport,
    recommendation_text: String,
    order_units: Option<u64>,
    business_impact: &'static [BusinessMetric],
}

pub fn render_json(report: &RiskReport) -> Result<String, DomainError> {
    let view = JsonReport {
        report,
        recommendation_text: report.result.recommendation.to_string(),
        order_units: report.result.recommendation.order_units(),
        business_impact: &BUSINESS_IMPACT,
    };
    serde_json::to_string_pretty(&view).map_err(|e| DomainError::Render(e.to_string()))
}

/// Machine-readable output for scripting.
#[derive(Debug, Default)]
pub struct JsonDisplay;

impl DisplayPort for JsonDisplay {
    fn show(&self, report: &RiskReport) -> Result<(), DomainError> {
        let json = render_json(report)?;
        let mut out = stdout().lock();
        writeln!(out, "{}", json).map_err(|e| DomainError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskEvaluator, RiskInput};
    use chrono::Utc;

    fn report(stock: u32, weekend: bool, holiday: bool) -> RiskReport {
        let input = RiskInput {
            product_name: "Bread".to_string(),
            current_stock: stock,
            avg_daily_sales: 12.5,
            days_until_reorder: 7,
            is_weekend: weekend,
            is_holiday: holiday,
        };
        let result = RiskEvaluator::default().evaluate(&input);
        RiskReport::new(&input, result, Utc::now())
    }

    #[test]
    fn test_render_json_fields() {
        let report = report(10, true, true);

        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["product_name"], "Bread");
        assert_eq!(value["result"]["risk_level"], "HIGH");
        assert_eq!(value["result"]["severity_color"], "red");
        assert_eq!(value["result"]["recommendation"]["action"], "order_immediately");
        assert_eq!(value["result"]["recommendation"]["units"], 409);
        assert_eq!(
            value["recommendation_text"],
            "URGENT: Order 409 units immediately"
        );
        assert_eq!(value["order_units"], 409);
        assert_eq!(value["gauge"]["value"], 100.0);

        let back: RiskReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.result.risk_level, report.result.risk_level);
    }

    #[test]
    fn test_render_json_business_impact_and_no_quantity() {
        let json = render_json(&report(500, false, false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value["recommendation_text"],
            "Reduce next order by 30% or run promotion"
        );
        assert!(value["order_units"].is_null());

        let impact = value["business_impact"].as_array().unwrap();
        assert_eq!(impact.len(), 3);
        assert_eq!(impact[0]["label"], "Potential Monthly Savings");
        assert_eq!(impact[0]["value"], "$3,500");
        assert_eq!(impact[2]["delta"], "↑ 250%");
    }
}
