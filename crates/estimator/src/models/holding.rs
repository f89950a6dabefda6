use serde::{Deserialize, Serialize};

/// Quarterly disclosure period. Orders chronologically.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub year: i32,
    /// 1..=4
    pub quarter: u8,
}

impl ReportPeriod {
    pub fn new(year: i32, quarter: u8) -> Self {
        Self { year, quarter }
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Q{}", self.year, self.quarter)
    }
}

/// One equity line of a fund's most recent disclosed portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoldingRecord {
    /// Stock code as disclosed (e.g. `600519`, `00700`, `AAPL`)
    pub stock_code: String,

    /// Fraction of net assets, in `[0, 1]`
    pub weight: f64,
}

impl HoldingRecord {
    pub fn new(stock_code: impl Into<String>, weight: f64) -> Self {
        Self {
            stock_code: stock_code.into(),
            weight,
        }
    }
}

/// Raw disclosure row as returned by a holdings provider.
///
/// Providers may return several quarters at once; the retriever keeps the
/// latest one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisclosedHolding {
    pub period: ReportPeriod,
    pub stock_code: String,
    pub stock_name: String,
    /// Fraction of net assets, in `[0, 1]`
    pub weight: f64,
}

impl From<DisclosedHolding> for HoldingRecord {
    fn from(row: DisclosedHolding) -> Self {
        Self {
            stock_code: row.stock_code,
            weight: row.weight,
        }
    }
}
