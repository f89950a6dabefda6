//! Provider trait definitions.
//!
//! Each trait covers one external data source the estimator consumes. The
//! estimator holds them as `Arc<dyn ...>` so wire formats can be swapped and
//! tests can substitute in-memory fakes.

use async_trait::async_trait;

use crate::errors::EstimateError;
use crate::models::{DisclosedHolding, Quote, QuoteSymbol};

/// Source of percent-change-since-previous-close quotes.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use fundest_estimator::provider::QuoteProvider;
///
/// struct FixedQuotes;
///
/// #[async_trait]
/// impl QuoteProvider for FixedQuotes {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_changes(&self, symbols: &[QuoteSymbol]) -> Result<Vec<Quote>, EstimateError> {
///         Ok(symbols.iter().map(|s| Quote::new(s.clone(), 1.0)).collect())
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Provider identifier used in errors and logs.
    fn id(&self) -> &'static str;

    /// Fetch changes for all `symbols` in one batch.
    ///
    /// Symbols the provider could not quote are simply absent from the
    /// result. An `Err` means the whole batch failed.
    async fn fetch_changes(&self, symbols: &[QuoteSymbol]) -> Result<Vec<Quote>, EstimateError>;
}

/// Source of fund display names.
#[async_trait]
pub trait FundInfoProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// Display name for `fund_code`.
    async fn fetch_fund_name(&self, fund_code: &str) -> Result<String, EstimateError>;
}

/// Source of quarterly portfolio disclosures.
#[async_trait]
pub trait HoldingsProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// All equity rows disclosed for `fund_code` during `year`, possibly
    /// spanning several quarters. An empty vector means nothing was disclosed.
    async fn fetch_holdings(
        &self,
        fund_code: &str,
        year: i32,
    ) -> Result<Vec<DisclosedHolding>, EstimateError>;
}
