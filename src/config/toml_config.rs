use crate::core::rule_set::RuleSet;
use crate::core::rules::STANDARD_RULE_NAMES;
use crate::core::special::SpecialPostcodes;
use crate::core::validator::PostcodeValidator;
use crate::utils::error::{PostcodeError, Result};
use crate::utils::validation::{
    validate_known_names, validate_no_duplicates, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_enabled_rules() -> Vec<String> {
    STANDARD_RULE_NAMES.iter().map(|name| name.to_string()).collect()
}

/// Validator settings, usually loaded from a TOML file:
///
/// ```toml
/// [rules]
/// enabled = ["FirstLetter", "SecondLetter"]
///
/// [special]
/// allow = true
/// extra = ["XX1 1XX"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub special: SpecialConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rule names, evaluated in this order
    #[serde(default = "default_enabled_rules")]
    pub enabled: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_rules(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialConfig {
    /// Accept the built-in special postcodes (GIR 0AA, overseas territories)
    #[serde(default)]
    pub allow: bool,
    #[serde(default)]
    pub extra: Vec<String>,
}

impl ValidatorConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_known_names("rules.enabled", &self.rules.enabled, &STANDARD_RULE_NAMES)?;
        validate_no_duplicates("rules.enabled", &self.rules.enabled)?;

        for code in &self.special.extra {
            validate_non_empty_string("special.extra", code)?;
        }
        SpecialPostcodes::empty().with_extra(&self.special.extra)?;

        Ok(())
    }

    pub fn build_validator(&self) -> Result<PostcodeValidator> {
        self.validate_config()?;

        let rules = RuleSet::from_names(&self.rules.enabled)?;
        tracing::debug!("Building validator with rules: {:?}", rules.names());
        let validator = PostcodeValidator::new(rules);

        if !self.special.allow {
            if !self.special.extra.is_empty() {
                tracing::warn!(
                    "special.extra lists {} postcodes but special.allow is false; ignoring them",
                    self.special.extra.len()
                );
            }
            return Ok(validator);
        }

        let specials = SpecialPostcodes::standard().with_extra(&self.special.extra)?;
        tracing::debug!("Special postcodes enabled ({} entries)", specials.len());
        Ok(validator.with_special_postcodes(specials))
    }
}

impl Validate for ValidatorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl TryFrom<&ValidatorConfig> for PostcodeValidator {
    type Error = PostcodeError;

    fn try_from(config: &ValidatorConfig) -> Result<Self> {
        config.build_validator()
    }
}
