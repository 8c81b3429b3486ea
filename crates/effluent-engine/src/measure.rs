//! Parsing of raw measured-value input

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
}

/// Parse a raw form input as a measured value
///
/// Empty or non-numeric text is `None`: a first-class "not measured"
/// signal, never an error. Trailing text after a leading decimal is
/// ignored, so a pasted value like `"7.5 mg/L"` still parses.
pub fn parse_measured(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let matched = LEADING_NUMBER.find(trimmed)?;
    let value: f64 = matched.as_str().parse().ok()?;
    value.is_finite().then_some(value)
}
