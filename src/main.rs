//! Wiring & DI. Entry point: load config, build the evaluator, inject into services, run UI.
//! No business logic here; classification is delegated to RiskEvaluator via RiskService.

use dotenv::dotenv;
use inventory_risk::adapters::ui::{JsonDisplay, TerminalDisplay, TuiInputPort};
use inventory_risk::domain::RiskEvaluator;
use inventory_risk::ports::{DisplayPort, InputPort};
use inventory_risk::shared::config::{AppConfig, OutputFormat};
use inventory_risk::usecases::RiskService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // Logs go to stderr so the dashboard and JSON output on stdout stay clean.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    // --- Config: unparsable values and invalid factors are fatal ---
    let cfg = AppConfig::load()?;
    let factors = cfg.risk_factors()?;
    info!(
        weekend = factors.weekend_multiplier,
        holiday = factors.holiday_multiplier,
        high = factors.high_risk_factor,
        stockout = factors.stockout_factor,
        overstock = factors.overstock_factor,
        "risk factors"
    );
    let evaluator = RiskEvaluator::new(factors)?;

    // --- Display ---
    let output = cfg.output_or_default();
    let display: Arc<dyn DisplayPort> = match output {
        OutputFormat::Text => Arc::new(TerminalDisplay::new()),
        OutputFormat::Json => Arc::new(JsonDisplay),
    };
    info!(?output, "output format");

    inventory_risk::adapters::ui::init_ui(
        cfg.show_banner_or_default() && output == OutputFormat::Text,
    );

    // --- Services ---
    let risk_service = Arc::new(RiskService::new(evaluator, display));
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(Arc::clone(&risk_service)));

    // --- Run (prompt -> analyze -> repeat) ---
    input_port.run().await?;

    Ok(())
}
