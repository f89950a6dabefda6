//! In-memory providers for estimator tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::EstimateError;
use crate::models::{DisclosedHolding, Quote, QuoteSymbol, ReportPeriod};
use crate::provider::{FundInfoProvider, HoldingsProvider, QuoteProvider};

/// Quotes keyed by qualified symbol (`sh600519`, `usUSDCNH`).
#[derive(Default)]
pub struct FakeQuotes {
    pub changes: HashMap<String, f64>,
    pub fail: bool,
    pub delay: Option<Duration>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeQuotes {
    pub fn with(changes: &[(&str, f64)]) -> Self {
        Self {
            changes: changes.iter().map(|(s, c)| (s.to_string(), *c)).collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteProvider for FakeQuotes {
    fn id(&self) -> &'static str {
        "FAKE_QUOTES"
    }

    async fn fetch_changes(&self, symbols: &[QuoteSymbol]) -> Result<Vec<Quote>, EstimateError> {
        self.calls
            .lock()
            .unwrap()
            .push(symbols.iter().map(|s| s.to_string()).collect());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(EstimateError::Network {
                provider: "FAKE_QUOTES".to_string(),
                message: "connection refused".to_string(),
            });
        }

        Ok(symbols
            .iter()
            .filter_map(|s| {
                self.changes
                    .get(&s.to_string())
                    .map(|c| Quote::new(s.clone(), *c))
            })
            .collect())
    }
}

/// Fund names keyed by fund code; unknown codes fail with a parse error.
#[derive(Default)]
pub struct FakeNames {
    pub names: HashMap<String, String>,
    pub delay: Option<Duration>,
}

impl FakeNames {
    pub fn with(names: &[(&str, &str)]) -> Self {
        Self {
            names: names
                .iter()
                .map(|(c, n)| (c.to_string(), n.to_string()))
                .collect(),
            delay: None,
        }
    }
}

#[async_trait]
impl FundInfoProvider for FakeNames {
    fn id(&self) -> &'static str {
        "FAKE_NAMES"
    }

    async fn fetch_fund_name(&self, fund_code: &str) -> Result<String, EstimateError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.names
            .get(fund_code)
            .cloned()
            .ok_or_else(|| EstimateError::parse("FAKE_NAMES", "missing name"))
    }
}

/// Disclosures keyed by (fund code, year).
#[derive(Default)]
pub struct FakeHoldings {
    pub rows: HashMap<(String, i32), Vec<DisclosedHolding>>,
    pub fail: bool,
    pub calls: Mutex<Vec<(String, i32)>>,
}

impl FakeHoldings {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Add rows for one quarter: `(stock_code, weight_fraction)`.
    pub fn add(&mut self, fund_code: &str, year: i32, quarter: u8, rows: &[(&str, f64)]) {
        self.rows
            .entry((fund_code.to_string(), year))
            .or_default()
            .extend(rows.iter().map(|(code, weight)| DisclosedHolding {
                period: ReportPeriod::new(year, quarter),
                stock_code: code.to_string(),
                stock_name: String::new(),
                weight: *weight,
            }));
    }

    pub fn calls(&self) -> Vec<(String, i32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HoldingsProvider for FakeHoldings {
    fn id(&self) -> &'static str {
        "FAKE_HOLDINGS"
    }

    async fn fetch_holdings(
        &self,
        fund_code: &str,
        year: i32,
    ) -> Result<Vec<DisclosedHolding>, EstimateError> {
        self.calls.lock().unwrap().push((fund_code.to_string(), year));
        if self.fail {
            return Err(EstimateError::Timeout {
                provider: "FAKE_HOLDINGS".to_string(),
            });
        }
        Ok(self
            .rows
            .get(&(fund_code.to_string(), year))
            .cloned()
            .unwrap_or_default())
    }
}
