use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::errors::EstimateError;
use crate::models::{QuoteBatch, QuoteSymbol};
use crate::provider::QuoteProvider;
use crate::resolver::classify;

use super::bounded;

/// Batched percent-change lookup for raw identifiers.
///
/// Classifies every identifier, drops the ones without a market, adds the
/// USD/CNH rate when a US symbol is present, and maps results back to the
/// identifiers the caller passed in.
pub struct QuoteFetcher {
    provider: Arc<dyn QuoteProvider>,
    timeout: Duration,
}

impl QuoteFetcher {
    pub fn new(provider: Arc<dyn QuoteProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Fetch changes, degrading any batch failure to an empty batch with
    /// zero FX.
    pub async fn fetch(&self, codes: &[String]) -> QuoteBatch {
        match self.try_fetch(codes).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(
                    kind = %e.kind(),
                    "Quote batch of {} codes failed: {}",
                    codes.len(),
                    e
                );
                QuoteBatch::default()
            }
        }
    }

    /// Fetch changes, surfacing a batch failure.
    ///
    /// Issues no request when nothing classifies.
    pub async fn try_fetch(&self, codes: &[String]) -> Result<QuoteBatch, EstimateError> {
        let mut seen = HashSet::new();
        let mut symbols: Vec<QuoteSymbol> = Vec::new();
        let mut raw_by_symbol: HashMap<QuoteSymbol, Vec<&str>> = HashMap::new();

        for raw in codes {
            if !seen.insert(raw.as_str()) {
                continue;
            }
            let Some(symbol) = classify(raw) else {
                debug!("No market for {:?}, skipping", raw);
                continue;
            };
            let raws = raw_by_symbol.entry(symbol.clone()).or_default();
            if raws.is_empty() {
                symbols.push(symbol);
            }
            raws.push(raw.as_str());
        }

        if symbols.is_empty() {
            return Ok(QuoteBatch::default());
        }

        let fx_symbol = QuoteSymbol::usd_cnh();
        if symbols.iter().any(QuoteSymbol::is_us) && !raw_by_symbol.contains_key(&fx_symbol) {
            symbols.push(fx_symbol.clone());
        }

        let quotes = bounded(
            self.provider.id(),
            self.timeout,
            self.provider.fetch_changes(&symbols),
        )
        .await?;

        let mut batch = QuoteBatch::default();
        for quote in quotes {
            if quote.symbol == fx_symbol {
                batch.fx_change = quote.percent_change;
            }
            if let Some(raws) = raw_by_symbol.get(&quote.symbol) {
                for raw in raws {
                    batch.changes.insert(raw.to_string(), quote.percent_change);
                }
            }
        }

        debug!(
            "Resolved {} of {} codes, FX change {:+.2}%",
            batch.changes.len(),
            seen.len(),
            batch.fx_change
        );
        Ok(batch)
    }
}
