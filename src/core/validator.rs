use crate::core::matcher;
use crate::core::rule_set::RuleSet;
use crate::core::special::SpecialPostcodes;
use crate::domain::model::ValidatedPostcode;
use crate::utils::error::Result;
use std::sync::LazyLock;

static STANDARD_VALIDATOR: LazyLock<PostcodeValidator> =
    LazyLock::new(|| PostcodeValidator::new(RuleSet::standard()));

/// Runs the shape match and then the injected rule set.
///
/// A validator is immutable once built and can be shared across threads.
#[derive(Debug, Clone)]
pub struct PostcodeValidator {
    rules: RuleSet,
    specials: Option<SpecialPostcodes>,
}

impl PostcodeValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            specials: None,
        }
    }

    /// The process-wide validator with all nine rules and no special postcodes.
    pub fn standard() -> &'static PostcodeValidator {
        &STANDARD_VALIDATOR
    }

    /// Accept the given special postcodes without running the rule set.
    pub fn with_special_postcodes(mut self, specials: SpecialPostcodes) -> Self {
        self.specials = Some(specials);
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn special_postcodes(&self) -> Option<&SpecialPostcodes> {
        self.specials.as_ref()
    }

    pub fn validate(&self, raw: &str) -> Result<ValidatedPostcode> {
        let normalized = matcher::normalize(raw);

        if let Some(segments) = self
            .specials
            .as_ref()
            .and_then(|specials| specials.lookup(&normalized))
        {
            tracing::debug!("'{}' accepted as a special postcode", normalized);
            return Ok(ValidatedPostcode::new(raw, segments.clone(), true));
        }

        let segments = matcher::split(&normalized)?;
        self.rules.check(&segments)?;

        tracing::trace!(
            "'{}' validated: outward={}, inward={}",
            raw,
            segments.outward(),
            segments.inward()
        );
        Ok(ValidatedPostcode::new(raw, segments, false))
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_ok()
    }
}

impl Default for PostcodeValidator {
    fn default() -> Self {
        Self::new(RuleSet::standard())
    }
}
