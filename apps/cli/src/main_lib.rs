use std::collections::HashMap;

use anyhow::Context;
use fundest_estimator::EstimatorConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() {
    let log_format = std::env::var("FUNDEST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the report
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn load_config() -> anyhow::Result<EstimatorConfig> {
    dotenvy::dotenv().ok();
    EstimatorConfig::from_env().context("Failed to load estimator configuration")
}

/// Pair each fund code with its principal. A code given several amounts
/// keeps the last one.
pub fn build_requests(codes: &[String], amounts: &[(String, f64)]) -> Vec<(String, Option<f64>)> {
    let principals: HashMap<&str, f64> = amounts
        .iter()
        .map(|(code, amount)| (code.as_str(), *amount))
        .collect();

    codes
        .iter()
        .map(|code| (code.clone(), principals.get(code.as_str()).copied()))
        .collect()
}
