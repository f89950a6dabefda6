//! Estimation pipeline.
//!
//! ```text
//! FundEstimator::estimate(code, principal)
//!        |
//!        +--> FundNameLookup ------> FundInfoProvider   (name or placeholder)
//!        |
//!        +--> bond marker?  ------> Bond
//!        +--> ProxyTable hit? ----> QuoteFetcher(proxy) -> ProxyAnchored
//!        +--> HoldingsRetriever --> HoldingsProvider (this year, then last)
//!                  |
//!                  +--> QuoteFetcher(all codes + USD/CNH) -> look_through
//!                                                            -> HoldingsLookThrough
//!                                                            |  UsEquityLookThrough
//!                                                            |  Unknown
//! ```
//!
//! Each service wraps its provider call in its own timeout and collapses
//! failures to an empty default, so `estimate` itself is infallible.

mod config;
mod engine;
mod fund_info;
mod holdings;
mod quotes;

#[cfg(test)]
pub(crate) mod testing;

use std::future::Future;
use std::time::Duration;

use crate::errors::EstimateError;

pub use config::{
    EstimatorConfig, ENV_HOLDINGS_TIMEOUT_MS, ENV_HOLDINGS_URL, ENV_NAME_TIMEOUT_MS,
    ENV_PROXY_TABLE, ENV_QUOTE_TIMEOUT_MS, ENV_QUOTE_URL,
};
pub use engine::{look_through, FundEstimator};
pub use fund_info::FundNameLookup;
pub use holdings::{latest_quarter, HoldingsRetriever};
pub use quotes::QuoteFetcher;

/// Run a provider call under `limit`, mapping expiry to `Timeout`.
pub(crate) async fn bounded<T, F>(
    provider: &str,
    limit: Duration,
    call: F,
) -> Result<T, EstimateError>
where
    F: Future<Output = Result<T, EstimateError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(EstimateError::Timeout {
            provider: provider.to_string(),
        }),
    }
}
