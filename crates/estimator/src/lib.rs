//! Fund Intraday Estimator Crate
//!
//! Estimates today's percentage change of mutual funds whose official net
//! asset value is only published after the close.
//!
//! # Overview
//!
//! Each fund is classified by its display name and disclosed portfolio:
//! - Bond funds are assumed flat
//! - Thematic funds are anchored to a proxy ETF tracking the same theme
//! - Everything else is revalued from its latest quarterly holdings at live
//!   quotes, FX-adjusted for US listings
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   FundEstimator  | --> |   ProxyTable     |  (name keyword -> ETF)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! | Quote / Holdings | --> |    classify      |  (code -> sh/sz/hk/us symbol)
//! |    services      |     +------------------+
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Providers     |  (Tencent quotes + names, Eastmoney holdings)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`FundEstimator`] - The single entry point: `estimate(code, principal)`
//! - [`EstimationResult`] / [`EstimationMethod`] - What was estimated and how
//! - [`EstimatorConfig`] - Endpoints, timeouts, thresholds, proxy table
//! - [`QuoteSymbol`] - Market-qualified symbol
//! - [`EstimateError`] - Typed failures, collapsed to defaults inside the pipeline

pub mod errors;
pub mod estimator;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::{EstimateError, FailureKind};

pub use estimator::{
    look_through, EstimatorConfig, FundEstimator, FundNameLookup, HoldingsRetriever, QuoteFetcher,
};

pub use models::{
    compute_profit, DisclosedHolding, EstimationMethod, EstimationResult, HoldingRecord, Market,
    Quote, QuoteBatch, QuoteSymbol, ReportPeriod,
};

pub use provider::eastmoney::EastmoneyProvider;
pub use provider::tencent::TencentProvider;
pub use provider::{FundInfoProvider, HoldingsProvider, QuoteProvider};

pub use resolver::{classify, is_us_listed, ProxyEntry, ProxyTable};
