use crate::core::matcher::normalize;
use crate::domain::model::Segments;
use crate::utils::error::{PostcodeError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Non-geographic and overseas territory postcodes that do not follow the
/// structural rules: Girobank, Ascension Island, St Helena, Tristan da Cunha,
/// British Indian Ocean Territory, British Antarctic Territory, Falkland
/// Islands, South Georgia, Pitcairn Islands, Turks and Caicos Islands.
pub const SPECIAL_POSTCODES: [(&str, &str); 10] = [
    ("GIR", "0AA"),
    ("ASCN", "1ZZ"),
    ("STHL", "1ZZ"),
    ("TDCU", "1ZZ"),
    ("BBND", "1ZZ"),
    ("BIQQ", "1ZZ"),
    ("FIQQ", "1ZZ"),
    ("SIQQ", "1ZZ"),
    ("PCRN", "1ZZ"),
    ("TKCA", "1ZZ"),
];

static SPECIAL_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z0-9]{2,4}) *([0-9][A-Z]{2})$").unwrap());

/// Lookup table of postcodes accepted without running the rule set.
#[derive(Debug, Clone, Default)]
pub struct SpecialPostcodes {
    entries: HashMap<String, Segments>,
}

impl SpecialPostcodes {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        let mut specials = Self::empty();
        for (outward, inward) in SPECIAL_POSTCODES {
            specials.insert_unchecked(Segments::new(outward, inward));
        }
        specials
    }

    pub(crate) fn insert_unchecked(&mut self, segments: Segments) {
        let key = format!("{}{}", segments.outward(), segments.inward());
        self.entries.insert(key, segments);
    }

    pub fn insert(&mut self, code: &str) -> Result<()> {
        let normalized = normalize(code);
        let caps = SPECIAL_SHAPE_REGEX
            .captures(&normalized)
            .ok_or_else(|| PostcodeError::Config {
                field: "special.extra".to_string(),
                message: format!("'{}' is not an outward/inward pair", code),
            })?;

        self.insert_unchecked(Segments::new(&caps[1], &caps[2]));
        Ok(())
    }

    pub fn with_extra<I, S>(mut self, codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for code in codes {
            self.insert(code.as_ref())?;
        }
        Ok(self)
    }

    /// Expects an already normalized candidate.
    pub fn lookup(&self, normalized: &str) -> Option<&Segments> {
        self.entries.get(&compact(normalized))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compact(normalized: &str) -> String {
    normalized.chars().filter(|c| !c.is_whitespace()).collect()
}
