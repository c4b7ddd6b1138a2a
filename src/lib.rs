pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::ValidatorConfig;
pub use crate::core::{
    rule_set::RuleSet,
    rules::{ScopedRule, STANDARD_RULE_NAMES},
    special::SpecialPostcodes,
    validator::PostcodeValidator,
};
pub use domain::model::{Attribute, Postcode, Segments, ValidatedPostcode};
pub use domain::ports::Rule;
pub use utils::error::{InvalidReason, PostcodeError, Result};
