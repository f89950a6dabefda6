use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::errors::EstimateError;
use crate::provider::FundInfoProvider;

use super::bounded;

/// Fund display name lookup with a placeholder fallback.
pub struct FundNameLookup {
    provider: Arc<dyn FundInfoProvider>,
    timeout: Duration,
    fallback_label: String,
}

impl FundNameLookup {
    pub fn new(
        provider: Arc<dyn FundInfoProvider>,
        timeout: Duration,
        fallback_label: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            timeout,
            fallback_label: fallback_label.into(),
        }
    }

    /// Display name, or `<label><code>` when the lookup fails.
    pub async fn lookup(&self, fund_code: &str) -> String {
        match self.try_lookup(fund_code).await {
            Ok(name) => name,
            Err(e) => {
                warn!(kind = %e.kind(), "Name lookup for {} failed: {}", fund_code, e);
                self.fallback(fund_code)
            }
        }
    }

    pub async fn try_lookup(&self, fund_code: &str) -> Result<String, EstimateError> {
        bounded(
            self.provider.id(),
            self.timeout,
            self.provider.fetch_fund_name(fund_code),
        )
        .await
    }

    pub fn fallback(&self, fund_code: &str) -> String {
        format!("{}{}", self.fallback_label, fund_code)
    }
}
