use serde::{Deserialize, Serialize};

/// How an estimate was produced.
///
/// Variants are listed in the precedence order the estimator evaluates them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimationMethod {
    /// Name marks a bond fund; assumed flat.
    Bond,

    /// Name matched a proxy keyword; the proxy's own change is used.
    ProxyAnchored {
        /// Keyword found in the fund name
        keyword: String,
        /// Proxy instrument code
        proxy: String,
    },

    /// Weighted revaluation of disclosed holdings.
    HoldingsLookThrough {
        /// Number of holdings in the disclosed quarter
        holdings: usize,
    },

    /// Holdings revaluation dominated by US listings, FX-adjusted.
    UsEquityLookThrough {
        /// USD/CNH percent change added to every US holding
        fx_change: f64,
    },

    /// Not enough data to estimate.
    Unknown,
}

impl EstimationMethod {
    /// Stable short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bond => "Bond fund",
            Self::ProxyAnchored { .. } => "Sector proxy",
            Self::HoldingsLookThrough { .. } => "Holdings look-through",
            Self::UsEquityLookThrough { .. } => "US equity look-through",
            Self::Unknown => "Cannot estimate",
        }
    }

    /// Human-readable explanation of the estimate.
    pub fn detail(&self) -> String {
        match self {
            Self::Bond => "minimal volatility".to_string(),
            Self::ProxyAnchored { keyword, proxy } => format!("tracking {}({})", keyword, proxy),
            Self::HoldingsLookThrough { holdings } => format!("based on {} holdings", holdings),
            Self::UsEquityLookThrough { fx_change } => {
                format!("previous close + FX ({:+.2}%)", fx_change)
            }
            Self::Unknown => "no data".to_string(),
        }
    }
}

/// Estimate for one fund.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub fund_code: String,

    /// Display name, or a placeholder when the name lookup failed
    pub fund_name: String,

    /// Estimated intraday percent change; 0.0 when nothing resolved
    pub change_percent: f64,

    pub method: EstimationMethod,

    pub detail: String,

    /// Estimated profit for the supplied principal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
}

impl EstimationResult {
    pub fn new(
        fund_code: impl Into<String>,
        fund_name: impl Into<String>,
        change_percent: f64,
        method: EstimationMethod,
    ) -> Self {
        let detail = method.detail();
        Self {
            fund_code: fund_code.into(),
            fund_name: fund_name.into(),
            change_percent,
            method,
            detail,
            profit: None,
        }
    }

    /// Attach the profit for `principal`, if one was supplied.
    pub fn with_principal(mut self, principal: Option<f64>) -> Self {
        self.profit = principal.map(|p| compute_profit(p, self.change_percent));
        self
    }
}

/// `principal * change_percent / 100`, with NaN on either side coerced to 0.0.
pub fn compute_profit(principal: f64, change_percent: f64) -> f64 {
    let principal = if principal.is_nan() { 0.0 } else { principal };
    let profit = principal * change_percent / 100.0;
    if profit.is_nan() {
        0.0
    } else {
        profit
    }
}
