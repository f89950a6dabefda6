//! Name and symbol resolution.
//!
//! - [`classify`] turns a raw security identifier into a market-qualified
//!   [`QuoteSymbol`](crate::models::QuoteSymbol).
//! - [`ProxyTable`] maps fund-name keywords to a proxy instrument.
//!
//! Both are pure and perform no I/O.

mod proxy_table;
mod symbol_classifier;

pub use proxy_table::{ProxyEntry, ProxyTable};
pub use symbol_classifier::{classify, is_us_listed};
