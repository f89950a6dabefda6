//! Eastmoney fund archive provider.
//!
//! Serves quarterly stock holdings disclosures through
//! `FundArchivesDatas.aspx?type=jjcc`, one calendar year per request.

mod parser;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::EstimateError;
use crate::models::DisclosedHolding;
use crate::provider::HoldingsProvider;

use parser::parse_holdings;

pub(crate) const PROVIDER_ID: &str = "EASTMONEY";

/// Public fund archive host.
pub const DEFAULT_BASE_URL: &str = "https://fundf10.eastmoney.com";

const ARCHIVE_PATH: &str = "/FundArchivesDatas.aspx";

/// Rows requested per quarter.
const TOP_LINE: &str = "200";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Holdings disclosures from Eastmoney.
pub struct EastmoneyProvider {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl EastmoneyProvider {
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
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for EastmoneyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HoldingsProvider for EastmoneyProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_holdings(
        &self,
        fund_code: &str,
        year: i32,
    ) -> Result<Vec<DisclosedHolding>, EstimateError> {
        let url = format!("{}{}", self.base_url, ARCHIVE_PATH);
        let year = year.to_string();
        debug!("Eastmoney holdings request: {} year {}", fund_code, year);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("type", "jjcc"),
                ("code", fund_code),
                ("topline", TOP_LINE),
                ("year", year.as_str()),
                ("month", ""),
            ])
            .timeout(self.timeout)
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

        let body = response
            .text()
            .await
            .map_err(|e| EstimateError::from_reqwest(PROVIDER_ID, e))?;

        let rows = parse_holdings(&body)?;
        debug!(
            "Eastmoney returned {} rows for {} in {}",
            rows.len(),
            fund_code,
            year
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let provider = EastmoneyProvider::default();
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.timeout, Duration::from_secs(3));
        assert_eq!(provider.id(), "EASTMONEY");
    }

    #[test]
    fn test_with_timeout() {
        let provider = EastmoneyProvider::with_base_url("http://localhost:8080/")
            .with_timeout(Duration::from_millis(500));
        assert_eq!(provider.base_url, "http://localhost:8080");
        assert_eq!(provider.timeout, Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let provider = EastmoneyProvider::with_base_url("http://127.0.0.1:1");
        let err = provider.fetch_holdings("005827", 2024).await.unwrap_err();
        assert_eq!(err.kind(), crate::errors::FailureKind::NetworkFailure);
    }
}
