//! Parser for the Eastmoney portfolio disclosure archive.
//!
//! The endpoint answers with a JavaScript assignment:
//!
//! ```text
//! var apidata={ content:"<div class='box'>...</div><div class='box'>...</div>",arryear:[2024,2023],curyear:2024};
//! ```
//!
//! Each `div.box` is one quarter: an `h4` heading with `<YYYY>年<Q>季度股票投资明细`
//! and a table whose header names the stock code and percent-of-net-assets columns.
//! Column positions differ between recent and older quarters, so they are looked
//! up by header text.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::errors::EstimateError;
use crate::models::{DisclosedHolding, ReportPeriod};

use super::PROVIDER_ID;

const CODE_HEADER: &str = "股票代码";
const NAME_HEADER: &str = "股票名称";
const WEIGHT_HEADER: &str = "占净值";

lazy_static! {
    /// `content:"..."` payload of the JavaScript assignment
    static ref CONTENT_REGEX: Regex =
        Regex::new(r#"(?s)content\s*:\s*"(.*?)"\s*,\s*arryear"#)
            .expect("Invalid regex pattern");

    /// Quarter label, e.g. `2024年4季度`
    static ref PERIOD_REGEX: Regex =
        Regex::new(r"(\d{4})年\s*([1-4])季度")
            .expect("Invalid regex pattern");

    static ref BOX_SELECTOR: Selector = Selector::parse("div.box").expect("Invalid selector");
    static ref HEADING_SELECTOR: Selector = Selector::parse("h4").expect("Invalid selector");
    static ref TABLE_SELECTOR: Selector = Selector::parse("table").expect("Invalid selector");
    static ref HEADER_CELL_SELECTOR: Selector = Selector::parse("th").expect("Invalid selector");
    static ref BODY_ROW_SELECTOR: Selector = Selector::parse("tbody tr").expect("Invalid selector");
    static ref CELL_SELECTOR: Selector = Selector::parse("td").expect("Invalid selector");
}

/// Parse every quarter's equity rows from a response body.
///
/// A body without a `content` payload is a parse failure; an empty payload
/// means nothing was disclosed for the year.
pub(crate) fn parse_holdings(body: &str) -> Result<Vec<DisclosedHolding>, EstimateError> {
    let content = CONTENT_REGEX
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| EstimateError::parse(PROVIDER_ID, "response has no content payload"))?;

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let fragment = Html::parse_fragment(content);
    let mut rows = Vec::new();

    for block in fragment.select(&BOX_SELECTOR) {
        let heading = block
            .select(&HEADING_SELECTOR)
            .next()
            .map(element_text)
            .unwrap_or_default();

        let Some(period) = parse_period(&heading) else {
            debug!("Skipping disclosure block without quarter label: {:?}", heading);
            continue;
        };

        if let Some(table) = block.select(&TABLE_SELECTOR).next() {
            parse_table(table, period, &mut rows);
        }
    }

    Ok(rows)
}

fn parse_table(table: ElementRef<'_>, period: ReportPeriod, rows: &mut Vec<DisclosedHolding>) {
    let headers: Vec<String> = table.select(&HEADER_CELL_SELECTOR).map(element_text).collect();
    let column = |label: &str| headers.iter().position(|h| h.contains(label));

    let (Some(code_col), Some(weight_col)) = (column(CODE_HEADER), column(WEIGHT_HEADER)) else {
        debug!("Skipping {} table without code/weight columns", period);
        return;
    };
    let name_col = column(NAME_HEADER);

    for tr in table.select(&BODY_ROW_SELECTOR) {
        let cells: Vec<String> = tr.select(&CELL_SELECTOR).map(element_text).collect();

        let Some(stock_code) = cells.get(code_col).filter(|c| !c.is_empty()) else {
            continue;
        };
        let Some(weight) = cells.get(weight_col).and_then(|w| parse_weight(w)) else {
            debug!("Skipping {} row {} with unusable weight", period, stock_code);
            continue;
        };

        rows.push(DisclosedHolding {
            period,
            stock_code: stock_code.clone(),
            stock_name: name_col
                .and_then(|i| cells.get(i))
                .cloned()
                .unwrap_or_default(),
            weight,
        });
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// `2024年4季度股票投资明细` -> 2024Q4
pub(crate) fn parse_period(label: &str) -> Option<ReportPeriod> {
    let caps = PERIOD_REGEX.captures(label)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let quarter = caps.get(2)?.as_str().parse().ok()?;
    Some(ReportPeriod::new(year, quarter))
}

/// `9.87%` -> 0.0987. Values outside `[0, 1]` after conversion are rejected.
pub(crate) fn parse_weight(raw: &str) -> Option<f64> {
    let percent: f64 = raw.trim().trim_end_matches('%').trim().parse().ok()?;
    let fraction = percent / 100.0;
    (fraction.is_finite() && (0.0..=1.0).contains(&fraction)).then_some(fraction)
}
