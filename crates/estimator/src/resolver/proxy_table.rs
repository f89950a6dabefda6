//! Keyword -> proxy instrument table.
//!
//! Maps keywords found in a fund's display name to an exchange-traded fund
//! that tracks the same commodity, index or sector. Lookup is a literal
//! substring match and the first entry in table order wins.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::EstimateError;

/// One keyword -> proxy pair.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProxyEntry {
    /// Substring searched for in the fund name
    pub keyword: String,
    /// Proxy instrument code (e.g. `518880`)
    pub proxy: String,
}

impl ProxyEntry {
    pub fn new(keyword: impl Into<String>, proxy: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            proxy: proxy.into(),
        }
    }
}

/// Ordered keyword -> proxy table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxyTable {
    entries: Vec<ProxyEntry>,
}

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    // Commodities and precious metals
    ("黄金", "518880"),
    ("上海金", "518600"),
    ("豆粕", "159985"),
    ("有色", "512400"),
    ("化工", "516020"),
    ("石化", "516020"),
    ("石油", "561360"),
    ("油气", "513350"),
    ("煤炭", "515220"),
    // Broad indices
    ("沪深300", "510300"),
    ("上证50", "510050"),
    ("中证500", "510500"),
    ("科创50", "588000"),
    ("创业板", "159915"),
    ("微盘", "563300"),
    // Sectors
    ("半导体", "512480"),
    ("芯片", "159995"),
    ("人工智能", "159819"),
    ("游戏", "159869"),
    ("传媒", "512980"),
    ("光伏", "515790"),
    ("新能源", "515030"),
    ("白酒", "161725"),
    ("医疗", "512170"),
    ("医药", "512010"),
    ("证券", "512000"),
    ("银行", "512800"),
    // Cross-border
    ("纳斯达克", "513100"),
    ("纳指", "513100"),
    ("标普500", "513500"),
    ("恒生科技", "513180"),
    ("恒生互联网", "513330"),
    ("中概互联", "513050"),
    ("恒生指数", "159920"),
    ("日经", "513520"),
];

impl ProxyTable {
    pub fn new(entries: Vec<ProxyEntry>) -> Self {
        Self { entries }
    }

    /// Parse a table from a JSON array of `{"keyword": .., "proxy": ..}`.
    pub fn from_json(json: &str) -> Result<Self, EstimateError> {
        let table: Self = serde_json::from_str(json)
            .map_err(|e| EstimateError::Config(format!("proxy table: {}", e)))?;
        table.validate()?;
        Ok(table)
    }

    /// Load a JSON table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EstimateError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| EstimateError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// First entry whose keyword occurs in `fund_name`.
    pub fn resolve(&self, fund_name: &str) -> Option<&ProxyEntry> {
        self.entries
            .iter()
            .find(|entry| fund_name.contains(entry.keyword.as_str()))
    }

    pub fn entries(&self) -> &[ProxyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // An empty keyword matches every name.
    fn validate(&self) -> Result<(), EstimateError> {
        match self.entries.iter().position(|e| e.keyword.is_empty()) {
            Some(index) => Err(EstimateError::Config(format!(
                "proxy table entry {} has an empty keyword",
                index
            ))),
            None => Ok(()),
        }
    }
}

impl Default for ProxyTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_ENTRIES
                .iter()
                .map(|(keyword, proxy)| ProxyEntry::new(*keyword, *proxy))
                .collect(),
        )
    }
}
