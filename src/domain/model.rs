use crate::core::extractor;
use crate::core::validator::PostcodeValidator;
use crate::utils::error::{PostcodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which segment of a postcode a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Outward,
    Inward,
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Outward => "outward",
            Attribute::Inward => "inward",
        }
    }
}

/// Outward and inward codes of a postcode that passed the shape check.
///
/// This is the structural data rules are evaluated against. It can also be
/// built by hand to exercise a rule in isolation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segments {
    outward: String,
    inward: String,
}

impl Segments {
    pub fn new(outward: impl Into<String>, inward: impl Into<String>) -> Self {
        Self {
            outward: outward.into(),
            inward: inward.into(),
        }
    }

    pub fn outward(&self) -> &str {
        &self.outward
    }

    pub fn inward(&self) -> &str {
        &self.inward
    }

    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Outward => &self.outward,
            Attribute::Inward => &self.inward,
        }
    }
}

/// A postcode that passed shape matching and every rule of the validator
/// that produced it. Segment accessors are infallible.
///
/// Serializes as `{raw, outward, inward, special}`. Deserializing restores
/// that record as is and does not re-run any validator, so values produced
/// by a custom rule set or the special postcode table read back unchanged.
/// Untrusted input should go through [`PostcodeValidator::validate`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedPostcode {
    raw: String,
    #[serde(flatten)]
    segments: Segments,
    #[serde(default)]
    special: bool,
}

impl ValidatedPostcode {
    pub(crate) fn new(raw: &str, segments: Segments, special: bool) -> Self {
        Self {
            raw: raw.to_string(),
            segments,
            special,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    pub fn outward(&self) -> &str {
        self.segments.outward()
    }

    pub fn inward(&self) -> &str {
        self.segments.inward()
    }

    pub fn area(&self) -> &str {
        extractor::area(self.outward())
    }

    pub fn district(&self) -> &str {
        extractor::district(self.outward())
    }

    pub fn sector(&self) -> &str {
        extractor::sector(self.inward())
    }

    pub fn unit(&self) -> &str {
        extractor::unit(self.inward())
    }

    /// Canonical `"OUTWARD INWARD"` form with a single separating space.
    pub fn formatted(&self) -> String {
        format!("{} {}", self.outward(), self.inward())
    }

    /// True when the postcode was accepted from the special postcode table
    /// rather than through the structural rules.
    pub fn is_special(&self) -> bool {
        self.special
    }
}

impl fmt::Display for ValidatedPostcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ValidatedPostcode {
    type Err = PostcodeError;

    fn from_str(s: &str) -> Result<Self> {
        PostcodeValidator::standard().validate(s)
    }
}

/// A postcode as received from a caller, validated or not.
///
/// Segment accessors fail with [`PostcodeError::NotValidated`] until
/// [`Postcode::validate`] succeeds. The raw input is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postcode {
    raw: String,
    validated: Option<ValidatedPostcode>,
}

impl Postcode {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            validated: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_validated(&self) -> bool {
        self.validated.is_some()
    }

    /// Validates against the standard rule set.
    pub fn validate(&mut self) -> Result<&ValidatedPostcode> {
        self.validate_with(PostcodeValidator::standard())
    }

    /// Validates with a caller-supplied validator. On failure the postcode is
    /// left unvalidated, so accessors keep failing with `NotValidated`.
    pub fn validate_with(&mut self, validator: &PostcodeValidator) -> Result<&ValidatedPostcode> {
        match validator.validate(&self.raw) {
            Ok(validated) => Ok(&*self.validated.insert(validated)),
            Err(e) => {
                self.validated = None;
                Err(e)
            }
        }
    }

    pub fn validated(&self) -> Result<&ValidatedPostcode> {
        self.validated.as_ref().ok_or(PostcodeError::NotValidated)
    }

    pub fn into_validated(self) -> Result<ValidatedPostcode> {
        self.validated.ok_or(PostcodeError::NotValidated)
    }

    pub fn outward(&self) -> Result<&str> {
        self.validated().map(ValidatedPostcode::outward)
    }

    pub fn inward(&self) -> Result<&str> {
        self.validated().map(ValidatedPostcode::inward)
    }

    pub fn area(&self) -> Result<&str> {
        self.validated().map(ValidatedPostcode::area)
    }

    pub fn district(&self) -> Result<&str> {
        self.validated().map(ValidatedPostcode::district)
    }

    pub fn sector(&self) -> Result<&str> {
        self.validated().map(ValidatedPostcode::sector)
    }

    pub fn unit(&self) -> Result<&str> {
        self.validated().map(ValidatedPostcode::unit)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Postcode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Postcode {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

// Absence of a value is treated as an empty raw postcode.
impl<T: Into<String>> From<Option<T>> for Postcode {
    fn from(raw: Option<T>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }
}
