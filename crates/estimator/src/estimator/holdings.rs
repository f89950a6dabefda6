use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Local};
use tracing::{debug, warn};

use crate::errors::EstimateError;
use crate::models::{DisclosedHolding, HoldingRecord};
use crate::provider::HoldingsProvider;

use super::bounded;

/// Latest-quarter holdings lookup.
///
/// Queries the current calendar year first and the prior year when the
/// current one has no disclosures yet. Only rows from the latest quarter
/// present are kept.
pub struct HoldingsRetriever {
    provider: Arc<dyn HoldingsProvider>,
    timeout: Duration,
}

impl HoldingsRetriever {
    pub fn new(provider: Arc<dyn HoldingsProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Latest-quarter holdings, or empty when nothing could be retrieved.
    pub async fn retrieve(&self, fund_code: &str) -> Vec<HoldingRecord> {
        let current_year = Local::now().year();
        match self.try_retrieve(fund_code, current_year).await {
            Ok(records) => records,
            Err(e) => {
                warn!(kind = %e.kind(), "Holdings for {} unavailable: {}", fund_code, e);
                Vec::new()
            }
        }
    }

    /// Latest-quarter holdings as of `current_year`.
    ///
    /// A failed request aborts the lookup rather than moving on to the next
    /// year. Returns `NoData` when neither year has disclosures.
    pub async fn try_retrieve(
        &self,
        fund_code: &str,
        current_year: i32,
    ) -> Result<Vec<HoldingRecord>, EstimateError> {
        for year in [current_year, current_year - 1] {
            let rows = bounded(
                self.provider.id(),
                self.timeout,
                self.provider.fetch_holdings(fund_code, year),
            )
            .await?;

            if !rows.is_empty() {
                let records = latest_quarter(rows);
                debug!("{} has {} holdings disclosed in {}", fund_code, records.len(), year);
                return Ok(records);
            }
        }

        Err(EstimateError::NoData(format!(
            "no holdings disclosed for {} in {} or {}",
            fund_code,
            current_year,
            current_year - 1
        )))
    }
}

/// Keep only rows belonging to the latest disclosed quarter, in their
/// original order.
pub fn latest_quarter(rows: Vec<DisclosedHolding>) -> Vec<HoldingRecord> {
    let Some(latest) = rows.iter().map(|row| row.period).max() else {
        return Vec::new();
    };
    rows.into_iter()
        .filter(|row| row.period == latest)
        .map(HoldingRecord::from)
        .collect()
}
