use crate::core::rules::{standard_rule, standard_rules};
use crate::domain::model::Segments;
use crate::domain::ports::Rule;
use crate::utils::error::{PostcodeError, Result};
use std::sync::Arc;

/// Ordered collection of rules evaluated as a conjunction.
///
/// Rules are independent of each other, so order only decides which
/// rejection is reported first.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// All nine Royal Mail structural rules, sharing the process-wide instances.
    pub fn standard() -> Self {
        Self {
            rules: standard_rules().to_vec(),
        }
    }

    /// Builds a set from standard rule names, keeping the given order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut rule_set = Self::empty();
        for name in names {
            let name = name.as_ref();
            let rule = standard_rule(name).ok_or_else(|| PostcodeError::UnknownRule {
                name: name.to_string(),
            })?;
            rule_set.push_shared(rule);
        }
        Ok(rule_set)
    }

    pub fn with_rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.push(rule);
        self
    }

    pub fn push<R: Rule + 'static>(&mut self, rule: R) {
        self.rules.push(Arc::new(rule));
    }

    pub fn push_shared(&mut self, rule: Arc<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Rule>> {
        self.rules.iter()
    }

    /// Runs every rule; the first failure is returned as is.
    pub fn check(&self, segments: &Segments) -> Result<()> {
        for rule in &self.rules {
            tracing::trace!("Applying rule: {}", rule.name());
            rule.validate(segments)?;
        }
        Ok(())
    }
}
