//! External data providers.
//!
//! This module contains:
//! - The provider traits the estimator consumes (`QuoteProvider`,
//!   `FundInfoProvider`, `HoldingsProvider`)
//! - Concrete implementations against Tencent (quotes, fund names) and
//!   Eastmoney (holdings disclosures)
//!
//! Providers return typed errors. Collapsing those to defaults is the job of
//! the services in [`crate::estimator`], not of the providers.

mod traits;

pub mod eastmoney;
pub mod tencent;

pub use traits::{FundInfoProvider, HoldingsProvider, QuoteProvider};
