pub mod extractor;
pub mod matcher;
pub mod rule_set;
pub mod rules;
pub mod special;
pub mod validator;

pub use crate::domain::model::{Attribute, Postcode, Segments, ValidatedPostcode};
pub use crate::domain::ports::Rule;
pub use crate::utils::error::Result;
