//! Application configuration. Risk factors and output options.

use crate::domain::{DomainError, RiskFactors};
use serde::Deserialize;

/// Prefix for environment overrides, e.g. INVENTORY_RISK_WEEKEND_MULTIPLIER.
pub const ENV_PREFIX: &str = "INVENTORY_RISK";

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Weekend demand uplift. Read from INVENTORY_RISK_WEEKEND_MULTIPLIER.
    #[serde(default)]
    pub weekend_multiplier: Option<f64>,

    /// Holiday demand uplift. Read from INVENTORY_RISK_HOLIDAY_MULTIPLIER.
    #[serde(default)]
    pub holiday_multiplier: Option<f64>,

    /// Stock below this multiple of expected demand is HIGH risk.
    #[serde(default)]
    pub high_risk_factor: Option<f64>,

    /// Stock below this multiple of expected demand is STOCKOUT risk.
    #[serde(default)]
    pub stockout_factor: Option<f64>,

    /// Stock above this multiple of expected demand is OVERSTOCK risk.
    #[serde(default)]
    pub overstock_factor: Option<f64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────────────────────────────────
    /// `text` (dashboard) or `json`. Read from INVENTORY_RISK_OUTPUT.
    #[serde(default)]
    pub output: Option<OutputFormat>,

    /// Print the ASCII banner on startup. Read from INVENTORY_RISK_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,
}

impl AppConfig {
    /// Environment, overridden by the optional file named by INVENTORY_RISK_CONFIG.
    /// Unparsable values or an unreadable file are errors, never silently dropped.
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        let file = std::env::var(format!("{}_CONFIG", ENV_PREFIX)).ok();
        Self::from_sources(None, file.as_deref())
    }

    /// Build from `env` (process environment when `None`) and an optional config file.
    pub fn from_sources(
        env: Option<config::Map<String, String>>,
        file: Option<&str>,
    ) -> Result<Self, DomainError> {
        let mut c = config::Config::builder();
        c = c.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        c.build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    /// Merge overrides onto the defaults and validate the result.
    pub fn risk_factors(&self) -> Result<RiskFactors, DomainError> {
        let defaults = RiskFactors::default();
        let factors = RiskFactors {
            weekend_multiplier: self
                .weekend_multiplier
                .unwrap_or(defaults.weekend_multiplier),
            holiday_multiplier: self
                .holiday_multiplier
                .unwrap_or(defaults.holiday_multiplier),
            high_risk_factor: self.high_risk_factor.unwrap_or(defaults.high_risk_factor),
            stockout_factor: self.stockout_factor.unwrap_or(defaults.stockout_factor),
            overstock_factor: self.overstock_factor.unwrap_or(defaults.overstock_factor),
        };
        factors.validate()?;
        Ok(factors)
    }

    /// Returns the output format. Defaults to the text dashboard.
    pub fn output_or_default(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    /// Returns whether to print the banner. Defaults to true.
    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.risk_factors().unwrap(), RiskFactors::default());
        assert_eq!(cfg.output_or_default(), OutputFormat::Text);
        assert!(cfg.show_banner_or_default());
    }

    #[test]
    fn test_partial_override() {
        let cfg = AppConfig {
            holiday_multiplier: Some(2.0),
            overstock_factor: Some(3.0),
            ..AppConfig::default()
        };
        let factors = cfg.risk_factors().unwrap();
        assert_eq!(factors.holiday_multiplier, 2.0);
        assert_eq!(factors.overstock_factor, 3.0);
        assert_eq!(factors.weekend_multiplier, 1.3);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cfg = AppConfig {
            stockout_factor: Some(6.0),
            ..AppConfig::default()
        };
        assert!(matches!(cfg.risk_factors(), Err(DomainError::Config(_))));
    }

    #[test]
    fn test_deserialize_from_source() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("weekend_multiplier", 1.5)
            .unwrap()
            .set_override("output", "json")
            .unwrap()
            .set_override("show_banner", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.weekend_multiplier, Some(1.5));
        assert_eq!(cfg.output_or_default(), OutputFormat::Json);
        assert!(!cfg.show_banner_or_default());
    }

    fn env(vars: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_env_vars_loaded() {
        let cfg = AppConfig::from_sources(
            env(&[
                ("INVENTORY_RISK_WEEKEND_MULTIPLIER", "1.5"),
                ("INVENTORY_RISK_HOLIDAY_MULTIPLIER", "2"),
                ("INVENTORY_RISK_OVERSTOCK_FACTOR", "4.5"),
                ("INVENTORY_RISK_OUTPUT", "json"),
                ("INVENTORY_RISK_SHOW_BANNER", "false"),
                ("UNRELATED_VAR", "x"),
            ]),
            None,
        )
        .unwrap();
        assert_eq!(cfg.weekend_multiplier, Some(1.5));
        assert_eq!(cfg.holiday_multiplier, Some(2.0));
        assert_eq!(cfg.overstock_factor, Some(4.5));
        assert_eq!(cfg.output_or_default(), OutputFormat::Json);
        assert!(!cfg.show_banner_or_default());
        assert_eq!(cfg.risk_factors().unwrap().weekend_multiplier, 1.5);
    }

    #[test]
    fn test_unparsable_env_factor_is_error() {
        let res = AppConfig::from_sources(
            env(&[("INVENTORY_RISK_OVERSTOCK_FACTOR", "abc")]),
            None,
        );
        assert!(matches!(res, Err(DomainError::Config(_))));
    }

    #[test]
    fn test_unknown_output_format_is_error() {
        let res = AppConfig::from_sources(env(&[("INVENTORY_RISK_OUTPUT", "xml")]), None);
        assert!(matches!(res, Err(DomainError::Config(_))));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let res = AppConfig::from_sources(env(&[]), Some("/nonexistent/inventory-risk.toml"));
        assert!(matches!(res, Err(DomainError::Config(_))));
    }

    #[test]
    fn test_config_file_overrides_env() {
        let path = std::env::temp_dir().join(format!(
            "inventory_risk_config_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "stockout_factor = 1.2\nweekend_multiplier = 1.1\n").unwrap();

        let cfg = AppConfig::from_sources(
            env(&[("INVENTORY_RISK_WEEKEND_MULTIPLIER", "1.4")]),
            path.to_str(),
        );
        std::fs::remove_file(&path).ok();
        let cfg = cfg.unwrap();

        assert_eq!(cfg.stockout_factor, Some(1.2));
        // Sources added later override earlier ones: the file beats the environment.
        assert_eq!(cfg.weekend_multiplier, Some(1.1));
    }
}
