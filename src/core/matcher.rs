use crate::domain::model::Segments;
use crate::utils::error::{PostcodeError, Result};
use regex::Regex;
use std::sync::LazyLock;

// Outward: 1-2 letters, a digit, an optional letter or digit.
// Inward: a digit and two letters. Any number of spaces in between.
static POSTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]{1,2}[0-9][A-Z0-9]?) *([0-9][A-Z]{2})$").unwrap());

pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Splits an already normalized candidate into outward and inward codes.
pub fn split(normalized: &str) -> Result<Segments> {
    let caps = POSTCODE_REGEX.captures(normalized).ok_or_else(|| {
        tracing::debug!("'{}' does not have a postcode shape", normalized);
        PostcodeError::shape()
    })?;

    Ok(Segments::new(&caps[1], &caps[2]))
}
