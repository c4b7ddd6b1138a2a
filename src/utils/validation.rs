use crate::utils::error::{PostcodeError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PostcodeError::Config {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_no_duplicates(field_name: &str, values: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(PostcodeError::Config {
                field: field_name.to_string(),
                message: format!("Duplicate entry: {}", value),
            });
        }
    }
    Ok(())
}

pub fn validate_known_names(field_name: &str, values: &[String], known: &[&str]) -> Result<()> {
    for value in values {
        if !known.contains(&value.as_str()) {
            return Err(PostcodeError::Config {
                field: field_name.to_string(),
                message: format!(
                    "Unknown entry: {}. Known entries: {}",
                    value,
                    known.join(", ")
                ),
            });
        }
    }
    Ok(())
}
