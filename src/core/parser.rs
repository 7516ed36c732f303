use crate::utils::error::{Result, YieldError};
use regex::Regex;

/// Extracts the annual yield figure from a PVGIS plain-text response.
///
/// The body is scanned line by line; blank lines and `#` comment lines are
/// skipped. The first line whose trimmed content starts with the whole word
/// `Year` (case-insensitive) is the totals row, and scanning stops there
/// whether or not a number can be pulled out of it.
///
/// The totals row mirrors the monthly table, so it can carry integer
/// index/count columns before the energy column. The yield is the first
/// numeric token carrying a decimal fraction; when none does, the first
/// numeric token is taken as-is.
pub fn parse_annual_yield(body: &str) -> Result<f64> {
    let year_label = Regex::new(r"(?i)^year\b").unwrap();
    let numeric_token = Regex::new(r"[+-]?\d+(?:\.\d+)?").unwrap();

    for raw in body.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(label) = year_label.find(line) else {
            continue;
        };

        // Terminal match: later Year lines are never considered.
        let columns = &line[label.end()..];
        let tokens: Vec<&str> = numeric_token
            .find_iter(columns)
            .map(|m| m.as_str())
            .collect();

        let yield_token = tokens
            .iter()
            .find(|t| t.contains('.'))
            .or_else(|| tokens.first());

        return match yield_token.and_then(|t| t.parse::<f64>().ok()) {
            Some(value) if value.is_finite() => Ok(value),
            _ => Err(YieldError::ParseFailure {
                message: "annual totals line carries no numeric yield".to_string(),
            }),
        };
    }

    Err(YieldError::ParseFailure {
        message: "no annual totals line in response".to_string(),
    })
}
