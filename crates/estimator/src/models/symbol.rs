use serde::{Deserialize, Serialize};

/// Market a quote symbol trades on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Market {
    /// Shanghai Stock Exchange
    Shanghai,
    /// Shenzhen Stock Exchange
    Shenzhen,
    /// Hong Kong Exchanges
    HongKong,
    /// US exchanges
    Us,
}

impl Market {
    /// Lowercase market prefix used by quote endpoints.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Shanghai => "sh",
            Self::Shenzhen => "sz",
            Self::HongKong => "hk",
            Self::Us => "us",
        }
    }
}

/// Market-qualified quote symbol (e.g. `sh600519`, `usAAPL`).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct QuoteSymbol {
    /// Market the code is listed on
    pub market: Market,
    /// Normalized (trimmed, uppercased) code
    pub code: String,
}

impl QuoteSymbol {
    pub fn new(market: Market, code: impl Into<String>) -> Self {
        Self {
            market,
            code: code.into(),
        }
    }

    /// Offshore USD/CNH rate, fetched alongside US symbols.
    pub fn usd_cnh() -> Self {
        Self::new(Market::Us, "USDCNH")
    }

    pub fn is_us(&self) -> bool {
        self.market == Market::Us
    }
}

impl std::fmt::Display for QuoteSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.market.prefix(), self.code)
    }
}
