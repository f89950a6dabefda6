//! Raw identifier -> market-qualified symbol.
//!
//! Rules are applied in order to the trimmed, uppercased input:
//!
//! | Shape | Market |
//! |-------|--------|
//! | all alphabetic | US |
//! | 5 digits | Hong Kong |
//! | 6 digits starting `5`, `6`, `9` | Shanghai |
//! | 6 digits starting `0`, `1`, `2`, `3` | Shenzhen |
//!
//! Anything else has no inferable market.

use crate::models::{Market, QuoteSymbol};

/// Classify a raw security identifier.
///
/// Returns `None` when no market can be inferred; callers skip such codes.
///
/// # Examples
///
/// ```
/// use fundest_estimator::resolver::classify;
///
/// assert_eq!(classify("600519").unwrap().to_string(), "sh600519");
/// assert_eq!(classify(" aapl ").unwrap().to_string(), "usAAPL");
/// assert!(classify("1234").is_none());
/// ```
pub fn classify(raw: &str) -> Option<QuoteSymbol> {
    let code = raw.trim().to_uppercase();
    let market = infer_market(&code)?;
    Some(QuoteSymbol::new(market, code))
}

/// Whether a raw identifier classifies as a US listing.
pub fn is_us_listed(raw: &str) -> bool {
    classify(raw).is_some_and(|symbol| symbol.is_us())
}

fn infer_market(code: &str) -> Option<Market> {
    if code.is_empty() {
        return None;
    }

    if code.chars().all(char::is_alphabetic) {
        return Some(Market::Us);
    }

    if !code.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match code.len() {
        5 => Some(Market::HongKong),
        6 => match code.as_bytes()[0] {
            b'5' | b'6' | b'9' => Some(Market::Shanghai),
            b'0' | b'1' | b'2' | b'3' => Some(Market::Shenzhen),
            _ => None,
        },
        _ => None,
    }
}
