use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::symbol::QuoteSymbol;

/// Percent change since previous close for one symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol the change belongs to
    pub symbol: QuoteSymbol,

    /// Percent change since previous close (e.g. `-0.58` for -0.58%)
    pub percent_change: f64,
}

impl Quote {
    pub fn new(symbol: QuoteSymbol, percent_change: f64) -> Self {
        Self {
            symbol,
            percent_change,
        }
    }
}

/// Result of one batched quote fetch.
///
/// Changes are keyed by the raw identifier the caller passed in, not by the
/// qualified symbol, so callers can look up their own codes directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteBatch {
    /// Raw identifier -> percent change
    pub changes: HashMap<String, f64>,

    /// USD/CNH percent change; 0.0 when no US symbol was requested or the
    /// rate was unavailable
    pub fx_change: f64,
}

impl QuoteBatch {
    /// Percent change for a raw identifier, if it was resolved.
    pub fn change(&self, raw: &str) -> Option<f64> {
        self.changes.get(raw).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
