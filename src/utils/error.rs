use std::fmt;
use thiserror::Error;

/// Why a postcode was rejected. Callers that only need pass/fail can ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The input does not have the outward/inward shape at all.
    Shape,
    /// The shape matched but a structural rule rejected it.
    Rule(&'static str),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Shape => f.write_str("shape mismatch"),
            InvalidReason::Rule(name) => write!(f, "rejected by {}", name),
        }
    }
}

#[derive(Error, Debug)]
pub enum PostcodeError {
    #[error("Invalid postcode ({reason})")]
    InvalidPostcode { reason: InvalidReason },

    #[error("This postcode is not validated")]
    NotValidated,

    #[error("Rule {rule} requires a non-empty {attribute} segment")]
    MissingAttribute {
        rule: &'static str,
        attribute: &'static str,
    },

    #[error("Invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl PostcodeError {
    pub fn shape() -> Self {
        PostcodeError::InvalidPostcode {
            reason: InvalidReason::Shape,
        }
    }

    pub fn rejected_by(rule: &'static str) -> Self {
        PostcodeError::InvalidPostcode {
            reason: InvalidReason::Rule(rule),
        }
    }

    /// True for bad user input, as opposed to misuse of the API.
    pub fn is_invalid_postcode(&self) -> bool {
        matches!(self, PostcodeError::InvalidPostcode { .. })
    }

    /// True for programming errors: reading segments before validation or a
    /// rule pointed at a segment the postcode does not carry.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            PostcodeError::NotValidated | PostcodeError::MissingAttribute { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PostcodeError>;
