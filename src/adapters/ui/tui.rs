//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Collects the six product parameters, runs the analysis, and offers another round.
//! Each round pre-fills the previous answers.

use crate::domain::{DomainError, MAX_DAYS_UNTIL_REORDER, MIN_DAYS_UNTIL_REORDER, RiskInput};
use crate::ports::InputPort;
use crate::usecases::RiskService;
use async_trait::async_trait;
use inquire::error::CustomUserError;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, InquireError, Text};
use std::sync::Arc;
use tracing::{info, warn};

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("❯").with_fg(Color::LightCyan))
        .with_answered_prompt_prefix(Styled::new("✔").with_fg(Color::LightGreen))
        .with_answer(StyleSheet::new().with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

/// Starting values, matching a typical perishable product.
pub fn default_input() -> RiskInput {
    RiskInput {
        product_name: "Milk".to_string(),
        current_stock: 50,
        avg_daily_sales: 12.5,
        days_until_reorder: 7,
        is_weekend: false,
        is_holiday: false,
    }
}

fn validate_name(name: &str) -> Result<Validation, CustomUserError> {
    if name.trim().is_empty() {
        Ok(Validation::Invalid("Product name is required".into()))
    } else {
        Ok(Validation::Valid)
    }
}

fn validate_sales(sales: &f64) -> Result<Validation, CustomUserError> {
    if sales.is_finite() && *sales >= 0.0 {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Average daily sales must be 0 or more".into()))
    }
}

fn validate_days(days: &u32) -> Result<Validation, CustomUserError> {
    if (MIN_DAYS_UNTIL_REORDER..=MAX_DAYS_UNTIL_REORDER).contains(days) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid(
            format!(
                "Pick a value between {} and {}",
                MIN_DAYS_UNTIL_REORDER, MAX_DAYS_UNTIL_REORDER
            )
            .into(),
        ))
    }
}

/// `None` when the user cancelled (Esc / Ctrl-C).
fn answered<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// Ask for every field, pre-filled with `previous`.
fn prompt_input(previous: &RiskInput) -> Result<Option<RiskInput>, DomainError> {
    let Some(product_name) = answered(
        Text::new("Product name:")
            .with_default(&previous.product_name)
            .with_validator(validate_name)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let Some(current_stock) = answered(
        CustomType::<u32>::new("Current stock:")
            .with_default(previous.current_stock)
            .with_error_message("Enter a whole number of units (0 or more)")
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let Some(avg_daily_sales) = answered(
        CustomType::<f64>::new("Average daily sales:")
            .with_default(previous.avg_daily_sales)
            .with_error_message("Enter a number, e.g. 12.5")
            .with_validator(validate_sales)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let Some(days_until_reorder) = answered(
        CustomType::<u32>::new("Days until next reorder:")
            .with_default(previous.days_until_reorder)
            .with_help_message("1-30")
            .with_error_message("Enter a whole number of days")
            .with_validator(validate_days)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let Some(is_weekend) = answered(
        Confirm::new("Weekend coming up?")
            .with_default(previous.is_weekend)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let Some(is_holiday) = answered(
        Confirm::new("Holiday period?")
            .with_default(previous.is_holiday)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    Ok(Some(RiskInput {
        product_name: product_name.trim().to_string(),
        current_stock,
        avg_daily_sales,
        days_until_reorder,
        is_weekend,
        is_holiday,
    }))
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    risk_service: Arc<RiskService>,
}

impl TuiInputPort {
    pub fn new(risk_service: Arc<RiskService>) -> Self {
        Self { risk_service }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut previous = default_input();
        loop {
            let Some(input) = prompt_input(&previous)? else {
                info!("session cancelled");
                return Ok(());
            };

            match self.risk_service.analyze(&input) {
                Ok(_) => {}
                Err(e @ DomainError::InvalidInput { .. }) => {
                    warn!(error = %e, "input rejected");
                    eprintln!("{}", e);
                }
                Err(e) => return Err(e),
            }
            previous = input;

            let again = answered(
                Confirm::new("Analyze another product?")
                    .with_default(false)
                    .prompt(),
            )?;
            if again != Some(true) {
                return Ok(());
            }
        }
    }
}
