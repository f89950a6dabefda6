//! Estimator models
//!
//! This module contains the core data types for fund estimation:
//! - `symbol` - Market-qualified quote symbols (Market, QuoteSymbol)
//! - `quote` - Percent-change quotes and batch results (Quote, QuoteBatch)
//! - `holding` - Disclosed portfolio lines (HoldingRecord, DisclosedHolding, ReportPeriod)
//! - `estimate` - Estimation outcome (EstimationMethod, EstimationResult)

mod estimate;
mod holding;
mod quote;
mod symbol;

pub use estimate::{compute_profit, EstimationMethod, EstimationResult};
pub use holding::{DisclosedHolding, HoldingRecord, ReportPeriod};
pub use quote::{Quote, QuoteBatch};
pub use symbol::{Market, QuoteSymbol};
