//! Gauge model for the risk dashboard. Drawing lives in the UI adapter.

use super::entities::{RiskResult, SeverityColor};
use serde::{Deserialize, Serialize};

pub const GAUGE_TITLE: &str = "Risk Level (%)";
pub const GAUGE_MAX: f64 = 100.0;
pub const GAUGE_THRESHOLD: f64 = 90.0;

/// Background band colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandTone {
    LightGreen,
    Yellow,
    Orange,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeBand {
    pub from: f64,
    pub to: f64,
    pub tone: BandTone,
}

pub const GAUGE_BANDS: [GaugeBand; 4] = [
    GaugeBand {
        from: 0.0,
        to: 25.0,
        tone: BandTone::LightGreen,
    },
    GaugeBand {
        from: 25.0,
        to: 50.0,
        tone: BandTone::Yellow,
    },
    GaugeBand {
        from: 50.0,
        to: 75.0,
        tone: BandTone::Orange,
    },
    GaugeBand {
        from: 75.0,
        to: 100.0,
        tone: BandTone::Red,
    },
];

/// Band containing `value`. Lower edges are inclusive; 100 and above is red.
pub fn band_at(value: f64) -> BandTone {
    GAUGE_BANDS
        .iter()
        .find(|band| value < band.to)
        .map(|band| band.tone)
        .unwrap_or(BandTone::Red)
}

/// Needle position, bar color and threshold for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeReading {
    pub value: f64,
    pub bar_color: SeverityColor,
    pub threshold: f64,
}

impl GaugeReading {
    /// Demand as a percentage of stock, capped at 100. Zero stock pins the needle at 100.
    pub fn from_evaluation(current_stock: u32, result: &RiskResult) -> Self {
        let value = if current_stock > 0 {
            (result.expected_demand / f64::from(current_stock) * 100.0).min(GAUGE_MAX)
        } else {
            GAUGE_MAX
        };
        Self {
            value,
            bar_color: result.severity_color,
            threshold: GAUGE_THRESHOLD,
        }
    }

    pub fn band(&self) -> BandTone {
        band_at(self.value)
    }

    pub fn above_threshold(&self) -> bool {
        self.value >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Recommendation, RiskLevel};

    fn result(expected_demand: f64) -> RiskResult {
        RiskResult {
            risk_level: RiskLevel::Low,
            recommendation: Recommendation::Maintain {
                next_order_units: expected_demand as u64,
            },
            expected_demand,
            severity_color: SeverityColor::Green,
        }
    }

    #[test]
    fn test_gauge_value_ratio() {
        let g = GaugeReading::from_evaluation(350, &result(87.5));
        assert_eq!(g.value, 25.0);
        assert_eq!(g.band(), BandTone::Yellow);
        assert_eq!(g.bar_color, SeverityColor::Green);
        assert_eq!(g.threshold, 90.0);
        assert!(!g.above_threshold());
    }

    #[test]
    fn test_gauge_caps_at_max() {
        let g = GaugeReading::from_evaluation(50, &result(87.5));
        assert_eq!(g.value, 100.0);
        assert!(g.above_threshold());
    }

    #[test]
    fn test_gauge_zero_stock() {
        let g = GaugeReading::from_evaluation(0, &result(0.0));
        assert_eq!(g.value, 100.0);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(band_at(0.0), BandTone::LightGreen);
        assert_eq!(band_at(24.9), BandTone::LightGreen);
        assert_eq!(band_at(50.0), BandTone::Orange);
        assert_eq!(band_at(74.99), BandTone::Orange);
        assert_eq!(band_at(75.0), BandTone::Red);
        assert_eq!(band_at(100.0), BandTone::Red);
    }
}
