//! Risk analysis service. Validates input, evaluates, and hands the report to a display.

use crate::domain::{DomainError, RiskEvaluator, RiskInput, RiskReport};
use crate::ports::DisplayPort;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Service for single-product risk analysis.
///
/// Orchestrates the flow:
/// 1. Validate input at the boundary
/// 2. Evaluate with the configured factors
/// 3. Build the report (result + gauge)
/// 4. Send it to the display port
pub struct RiskService {
    evaluator: RiskEvaluator,
    display: Arc<dyn DisplayPort>,
}

impl RiskService {
    pub fn new(evaluator: RiskEvaluator, display: Arc<dyn DisplayPort>) -> Self {
        Self { evaluator, display }
    }

    /// Analyze one product and display the report.
    ///
    /// Invalid input is rejected before evaluation and nothing is displayed.
    pub fn analyze(&self, input: &RiskInput) -> Result<RiskReport, DomainError> {
        if let Err(e) = self.evaluator.check_input(input) {
            warn!(product = %input.product_name, error = %e, "rejected input");
            return Err(e);
        }

        let adjusted = self.evaluator.adjusted_daily_sales(input);
        debug!(
            product = %input.product_name,
            avg_daily_sales = input.avg_daily_sales,
            adjusted_daily_sales = adjusted,
            weekend = input.is_weekend,
            holiday = input.is_holiday,
            "seasonal adjustment"
        );

        let result = self.evaluator.evaluate(input);
        let report = RiskReport::new(input, result, Utc::now());

        info!(
            product = %report.product_name,
            stock = report.current_stock,
            days = report.days_until_reorder,
            risk = ?result.risk_level,
            shortage_rank = result.risk_level.shortage_rank(),
            expected_demand = result.expected_demand,
            gauge = report.gauge.value,
            "risk evaluated"
        );

        self.display.show(&report)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskFactors, RiskLevel};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDisplay {
        shown: Mutex<Vec<RiskReport>>,
    }

    impl DisplayPort for RecordingDisplay {
        fn show(&self, report: &RiskReport) -> Result<(), DomainError> {
            self.shown.lock().unwrap().push(report.clone());
            Ok(())
        }
    }

    struct FailingDisplay;

    impl DisplayPort for FailingDisplay {
        fn show(&self, _report: &RiskReport) -> Result<(), DomainError> {
            Err(DomainError::Render("broken pipe".to_string()))
        }
    }

    fn input(stock: u32) -> RiskInput {
        RiskInput {
            product_name: " Milk ".to_string(),
            current_stock: stock,
            avg_daily_sales: 12.5,
            days_until_reorder: 7,
            is_weekend: false,
            is_holiday: false,
        }
    }

    #[test]
    fn test_analyze_displays_report() {
        let display = Arc::new(RecordingDisplay::default());
        let service = RiskService::new(RiskEvaluator::default(), display.clone());

        let report = service.analyze(&input(50)).unwrap();

        assert_eq!(report.product_name, "Milk");
        assert_eq!(report.result.risk_level, RiskLevel::Stockout);
        assert_eq!(report.gauge.value, 100.0);
        let shown = display.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0], report);
    }

    #[test]
    fn test_analyze_rejects_invalid_input() {
        let display = Arc::new(RecordingDisplay::default());
        let service = RiskService::new(RiskEvaluator::default(), display.clone());

        let bad = RiskInput {
            days_until_reorder: 0,
            ..input(50)
        };
        let err = service.analyze(&bad).unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput { .. }));
        assert!(display.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn test_analyze_rejects_unsizable_demand() {
        let display = Arc::new(RecordingDisplay::default());
        let service = RiskService::new(RiskEvaluator::default(), display.clone());

        let huge = RiskInput {
            current_stock: 0,
            avg_daily_sales: 1e300,
            days_until_reorder: 30,
            is_weekend: true,
            is_holiday: true,
            ..input(0)
        };
        let err = service.analyze(&huge).unwrap_err();

        assert!(matches!(
            err,
            DomainError::InvalidInput {
                field: "avg_daily_sales",
                ..
            }
        ));
        assert!(display.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn test_analyze_uses_configured_factors() {
        let display = Arc::new(RecordingDisplay::default());
        let factors = RiskFactors {
            stockout_factor: 0.4,
            high_risk_factor: 0.2,
            ..RiskFactors::default()
        };
        let service = RiskService::new(RiskEvaluator::new(factors).unwrap(), display);

        // 50 >= 87.5 * 0.4 = 35, so no longer a stockout.
        let report = service.analyze(&input(50)).unwrap();
        assert_eq!(report.result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_analyze_propagates_display_error() {
        let service = RiskService::new(RiskEvaluator::default(), Arc::new(FailingDisplay));
        let err = service.analyze(&input(50)).unwrap_err();
        assert_eq!(err, DomainError::Render("broken pipe".to_string()));
    }
}
