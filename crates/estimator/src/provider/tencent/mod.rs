//! Tencent quote endpoint provider.
//!
//! One endpoint serves both needs of the estimator:
//! - Batched percent-change quotes via `s_<symbol>` keys (A-shares, HK, US,
//!   plus `s_usUSDCNH` for the offshore yuan)
//! - Fund display names via `jj<code>` keys
//!
//! Responses are GBK-encoded text, see [`models`] for the record format.

mod models;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::EstimateError;
use crate::models::{Quote, QuoteSymbol};
use crate::provider::{FundInfoProvider, QuoteProvider};

use models::parse_records;

pub(crate) const PROVIDER_ID: &str = "TENCENT";

/// Public quote host.
pub const DEFAULT_BASE_URL: &str = "http://qt.gtimg.cn";

const DEFAULT_QUOTE_TIMEOUT: Duration = Duration::from_secs(3);
const DEFAULT_NAME_TIMEOUT: Duration = Duration::from_secs(2);

/// Quotes and fund names from Tencent's `q=` endpoint.
pub struct TencentProvider {
    client: Client,
    base_url: String,
    quote_timeout: Duration,
    name_timeout: Duration,
}

impl TencentProvider {
    /// Create a provider against the public host.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider against another host (mirrors, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            quote_timeout: DEFAULT_QUOTE_TIMEOUT,
            name_timeout: DEFAULT_NAME_TIMEOUT,
        }
    }

    /// Override the per-request time bounds.
    pub fn with_timeouts(mut self, quote_timeout: Duration, name_timeout: Duration) -> Self {
        self.quote_timeout = quote_timeout;
        self.name_timeout = name_timeout;
        self
    }

    fn quote_key(symbol: &QuoteSymbol) -> String {
        format!("s_{}", symbol)
    }

    /// GET `<base>/q=<keys>` and decode the GBK body.
    async fn fetch(&self, keys: &str, timeout: Duration) -> Result<String, EstimateError> {
        let url = format!("{}/q={}", self.base_url, keys);
        debug!("Tencent request: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| EstimateError::from_reqwest(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EstimateError::Network {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| EstimateError::from_reqwest(PROVIDER_ID, e))?;

        let (text, _, had_errors) = encoding_rs::GBK.decode(&bytes);
        if had_errors {
            debug!("Tencent response contained invalid GBK sequences");
        }
        Ok(text.into_owned())
    }
}

impl Default for TencentProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for TencentProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_changes(&self, symbols: &[QuoteSymbol]) -> Result<Vec<Quote>, EstimateError> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }

        let by_key: HashMap<String, &QuoteSymbol> = symbols
            .iter()
            .map(|symbol| (Self::quote_key(symbol), symbol))
            .collect();
        let keys = symbols
            .iter()
            .map(Self::quote_key)
            .collect::<Vec<_>>()
            .join(",");

        let body = self.fetch(&keys, self.quote_timeout).await?;

        let mut quotes = Vec::with_capacity(symbols.len());
        for record in parse_records(&body) {
            let Some(symbol) = by_key.get(record.key) else {
                debug!("Tencent returned unrequested key {}", record.key);
                continue;
            };
            match record.percent_change() {
                Ok(change) => quotes.push(Quote::new((*symbol).clone(), change)),
                Err(e) => debug!("Skipping {}: {}", symbol, e),
            }
        }

        debug!(
            "Tencent quoted {} of {} symbols",
            quotes.len(),
            symbols.len()
        );
        Ok(quotes)
    }
}

#[async_trait]
impl FundInfoProvider for TencentProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_fund_name(&self, fund_code: &str) -> Result<String, EstimateError> {
        let body = self
            .fetch(&format!("jj{}", fund_code), self.name_timeout)
            .await?;

        parse_records(&body)
            .first()
            .ok_or_else(|| EstimateError::parse(PROVIDER_ID, "empty fund response"))?
            .fund_name()
    }
}
