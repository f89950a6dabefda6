//! Estimator configuration.
//!
//! Every field has a default matching the public endpoints and the standard
//! thresholds, so `EstimatorConfig::default()` is a working setup.
//! [`EstimatorConfig::from_env`] layers `FUNDEST_*` environment overrides on top.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::EstimateError;
use crate::provider::{eastmoney, tencent};
use crate::resolver::ProxyTable;

pub const ENV_QUOTE_URL: &str = "FUNDEST_QUOTE_URL";
pub const ENV_HOLDINGS_URL: &str = "FUNDEST_HOLDINGS_URL";
pub const ENV_QUOTE_TIMEOUT_MS: &str = "FUNDEST_QUOTE_TIMEOUT_MS";
pub const ENV_NAME_TIMEOUT_MS: &str = "FUNDEST_NAME_TIMEOUT_MS";
pub const ENV_HOLDINGS_TIMEOUT_MS: &str = "FUNDEST_HOLDINGS_TIMEOUT_MS";
pub const ENV_PROXY_TABLE: &str = "FUNDEST_PROXY_TABLE";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Host serving batched quotes and fund names
    pub quote_base_url: String,

    /// Host serving holdings disclosures
    pub holdings_base_url: String,

    /// Bound on one batched quote request
    pub quote_timeout_ms: u64,

    /// Bound on one fund name lookup
    pub name_timeout_ms: u64,

    /// Bound on one holdings request (per year tried)
    pub holdings_timeout_ms: u64,

    /// Substring marking a bond fund
    pub bond_marker: String,

    /// Substring that overrides `bond_marker` (convertible bond funds move with equities)
    pub convertible_marker: String,

    /// Matched weight must exceed this for a look-through estimate
    pub min_matched_weight: f64,

    /// More US holdings than this switches to the US equity method
    pub us_equity_threshold: usize,

    /// Prefix of the placeholder name used when the name lookup fails
    pub fallback_name_label: String,

    pub proxy_table: ProxyTable,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            quote_base_url: tencent::DEFAULT_BASE_URL.to_string(),
            holdings_base_url: eastmoney::DEFAULT_BASE_URL.to_string(),
            quote_timeout_ms: 3_000,
            name_timeout_ms: 2_000,
            holdings_timeout_ms: 3_000,
            bond_marker: "债".to_string(),
            convertible_marker: "可转债".to_string(),
            min_matched_weight: 0.05,
            us_equity_threshold: 3,
            fallback_name_label: "基金".to_string(),
            proxy_table: ProxyTable::default(),
        }
    }
}

impl EstimatorConfig {
    /// Defaults overridden by `FUNDEST_*` environment variables.
    ///
    /// Unparseable timeouts keep their default. A proxy table path that
    /// cannot be read or parsed is an error.
    pub fn from_env() -> Result<Self, EstimateError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EstimateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let millis = |key: &str| value(key).and_then(|v| v.trim().parse::<u64>().ok());

        let mut config = Self::default();

        if let Some(url) = value(ENV_QUOTE_URL) {
            config.quote_base_url = url;
        }
        if let Some(url) = value(ENV_HOLDINGS_URL) {
            config.holdings_base_url = url;
        }
        if let Some(ms) = millis(ENV_QUOTE_TIMEOUT_MS) {
            config.quote_timeout_ms = ms;
        }
        if let Some(ms) = millis(ENV_NAME_TIMEOUT_MS) {
            config.name_timeout_ms = ms;
        }
        if let Some(ms) = millis(ENV_HOLDINGS_TIMEOUT_MS) {
            config.holdings_timeout_ms = ms;
        }
        if let Some(path) = value(ENV_PROXY_TABLE) {
            config.proxy_table = ProxyTable::from_path(path.trim())?;
        }

        Ok(config)
    }

    pub fn quote_timeout(&self) -> Duration {
        Duration::from_millis(self.quote_timeout_ms)
    }

    pub fn name_timeout(&self) -> Duration {
        Duration::from_millis(self.name_timeout_ms)
    }

    pub fn holdings_timeout(&self) -> Duration {
        Duration::from_millis(self.holdings_timeout_ms)
    }

    /// Bond marker present and convertible marker absent.
    pub fn is_bond_name(&self, fund_name: &str) -> bool {
        fund_name.contains(self.bond_marker.as_str())
            && !fund_name.contains(self.convertible_marker.as_str())
    }
}
