//! Record parsing for the Tencent quote endpoint.
//!
//! A response holds one record per requested key, separated by `;`:
//!
//! ```text
//! v_s_sh600519="1~贵州茅台~600519~1700.00~-10.00~-0.58~12345~67890~~21345.67~GP-A";
//! v_jj005827="005827~易方达蓝筹精选混合~1.8234~...";
//! ```

use crate::errors::EstimateError;

use super::PROVIDER_ID;

/// Field index of percent change in an `s_` (simple quote) record.
const PERCENT_CHANGE_FIELD: usize = 5;

/// Field index of the display name in a `jj` (fund) record.
const FUND_NAME_FIELD: usize = 1;

/// One `key="f0~f1~..."` record.
#[derive(Debug, PartialEq)]
pub(crate) struct Record<'a> {
    /// Request key without the `v_` prefix (e.g. `s_sh600519`, `jj005827`)
    pub key: &'a str,
    pub fields: Vec<&'a str>,
}

impl Record<'_> {
    /// Percent change since previous close.
    pub fn percent_change(&self) -> Result<f64, EstimateError> {
        let raw = self.fields.get(PERCENT_CHANGE_FIELD).ok_or_else(|| {
            EstimateError::parse(
                PROVIDER_ID,
                format!("{}: {} fields, expected at least 6", self.key, self.fields.len()),
            )
        })?;

        let value: f64 = raw.trim().parse().map_err(|_| {
            EstimateError::parse(PROVIDER_ID, format!("{}: bad percent change {:?}", self.key, raw))
        })?;

        if !value.is_finite() {
            return Err(EstimateError::parse(
                PROVIDER_ID,
                format!("{}: non-finite percent change", self.key),
            ));
        }
        Ok(value)
    }

    /// Fund display name.
    pub fn fund_name(&self) -> Result<String, EstimateError> {
        self.fields
            .get(FUND_NAME_FIELD)
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| EstimateError::parse(PROVIDER_ID, format!("{}: missing name", self.key)))
    }
}

/// Split a response body into records. Segments without `=` are skipped.
pub(crate) fn parse_records(body: &str) -> Vec<Record<'_>> {
    body.split(';')
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=')?;
            let key = key.rsplit("v_").next()?.trim();
            let value = value.trim().trim_matches('"');
            Some(Record {
                key,
                fields: value.split('~').collect(),
            })
        })
        .collect()
}
