use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info};

use crate::models::{EstimationMethod, EstimationResult, HoldingRecord, QuoteBatch};
use crate::provider::eastmoney::EastmoneyProvider;
use crate::provider::tencent::TencentProvider;
use crate::provider::{FundInfoProvider, HoldingsProvider, QuoteProvider};
use crate::resolver::is_us_listed;

use super::{EstimatorConfig, FundNameLookup, HoldingsRetriever, QuoteFetcher};

/// Intraday estimator for a single fund at a time.
///
/// Outcomes are evaluated in precedence order, first hit wins:
///
/// 1. **Bond** - name carries the bond marker and not the convertible marker
/// 2. **Proxy** - name contains a proxy table keyword
/// 3. **Look-through** - latest disclosed holdings revalued at live quotes
/// 4. **Unknown** - none of the above produced an estimate
///
/// Holds no state between calls; every estimate re-fetches live data.
pub struct FundEstimator {
    config: EstimatorConfig,
    quotes: QuoteFetcher,
    names: FundNameLookup,
    holdings: HoldingsRetriever,
}

impl FundEstimator {
    /// Build an estimator against the configured Tencent and Eastmoney hosts.
    pub fn new(config: EstimatorConfig) -> Self {
        let tencent = Arc::new(
            TencentProvider::with_base_url(config.quote_base_url.as_str())
                .with_timeouts(config.quote_timeout(), config.name_timeout()),
        );
        let eastmoney = Arc::new(
            EastmoneyProvider::with_base_url(config.holdings_base_url.as_str())
                .with_timeout(config.holdings_timeout()),
        );
        Self::with_providers(config, tencent.clone(), tencent, eastmoney)
    }

    /// Build an estimator over arbitrary providers.
    pub fn with_providers(
        config: EstimatorConfig,
        quote_provider: Arc<dyn QuoteProvider>,
        info_provider: Arc<dyn FundInfoProvider>,
        holdings_provider: Arc<dyn HoldingsProvider>,
    ) -> Self {
        Self {
            quotes: QuoteFetcher::new(quote_provider, config.quote_timeout()),
            names: FundNameLookup::new(
                info_provider,
                config.name_timeout(),
                config.fallback_name_label.as_str(),
            ),
            holdings: HoldingsRetriever::new(holdings_provider, config.holdings_timeout()),
            config,
        }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate today's change for `fund_code`, and the profit on `principal`
    /// when one is given.
    ///
    /// Never fails: missing data shows up as [`EstimationMethod::Unknown`]
    /// with a 0.0 change.
    pub async fn estimate(&self, fund_code: &str, principal: Option<f64>) -> EstimationResult {
        let fund_code = fund_code.trim();

        if fund_code.is_empty() {
            debug!("Blank fund code, skipping lookups");
            return EstimationResult::new(
                fund_code,
                self.names.fallback(fund_code),
                0.0,
                EstimationMethod::Unknown,
            )
            .with_principal(principal);
        }

        let fund_name = self.names.lookup(fund_code).await;
        let (change_percent, method) = self.evaluate(fund_code, &fund_name).await;

        info!(
            fund = fund_code,
            method = method.label(),
            "{} estimated at {:+.2}%",
            fund_name,
            change_percent
        );

        EstimationResult::new(fund_code, fund_name, change_percent, method).with_principal(principal)
    }

    /// Estimate several funds concurrently. Results keep the input order.
    pub async fn estimate_many(&self, requests: &[(String, Option<f64>)]) -> Vec<EstimationResult> {
        join_all(
            requests
                .iter()
                .map(|(fund_code, principal)| self.estimate(fund_code, *principal)),
        )
        .await
    }

    async fn evaluate(&self, fund_code: &str, fund_name: &str) -> (f64, EstimationMethod) {
        if self.config.is_bond_name(fund_name) {
            return (0.0, EstimationMethod::Bond);
        }

        if let Some(entry) = self.config.proxy_table.resolve(fund_name) {
            debug!("{} anchored to {} via {}", fund_code, entry.proxy, entry.keyword);
            let batch = self.quotes.fetch(std::slice::from_ref(&entry.proxy)).await;
            return (
                batch.change(&entry.proxy).unwrap_or(0.0),
                EstimationMethod::ProxyAnchored {
                    keyword: entry.keyword.clone(),
                    proxy: entry.proxy.clone(),
                },
            );
        }

        let holdings = self.holdings.retrieve(fund_code).await;
        if holdings.is_empty() {
            return (0.0, EstimationMethod::Unknown);
        }

        let codes: Vec<String> = holdings.iter().map(|h| h.stock_code.clone()).collect();
        let batch = self.quotes.fetch(&codes).await;

        look_through(
            &holdings,
            &batch,
            self.config.min_matched_weight,
            self.config.us_equity_threshold,
        )
        .unwrap_or((0.0, EstimationMethod::Unknown))
    }
}

/// Weighted revaluation of `holdings` at the changes in `batch`.
///
/// Only holdings with a quote contribute. US listings get the batch's FX
/// change added before weighting. The weighted sum is renormalized by the
/// matched weight, not the disclosed total. Returns `None` when the matched
/// weight does not exceed `min_matched_weight`.
pub fn look_through(
    holdings: &[HoldingRecord],
    batch: &QuoteBatch,
    min_matched_weight: f64,
    us_equity_threshold: usize,
) -> Option<(f64, EstimationMethod)> {
    let mut weighted_change = 0.0;
    let mut matched_weight = 0.0;
    let mut us_count = 0usize;

    for holding in holdings {
        let Some(mut change) = batch.change(&holding.stock_code) else {
            continue;
        };
        if !change.is_finite() || !holding.weight.is_finite() {
            continue;
        }
        if is_us_listed(&holding.stock_code) {
            change += batch.fx_change;
            us_count += 1;
        }
        weighted_change += holding.weight * change;
        matched_weight += holding.weight;
    }

    debug!(
        "Matched weight {:.4} over {} holdings ({} US)",
        matched_weight,
        holdings.len(),
        us_count
    );

    if matched_weight <= min_matched_weight {
        return None;
    }

    let method = if us_count > us_equity_threshold {
        EstimationMethod::UsEquityLookThrough {
            fx_change: batch.fx_change,
        }
    } else {
        EstimationMethod::HoldingsLookThrough {
            holdings: holdings.len(),
        }
    };

    Some((weighted_change / matched_weight, method))
}
