use crate::domain::model::{Attribute, Segments};
use crate::utils::error::{PostcodeError, Result};
use std::fmt::Debug;

/// A structural constraint scoped to a subset of postcodes.
///
/// A rule looks at one segment. When the segment falls outside the rule's
/// scope the rule passes; when it falls inside, the segment must also be
/// permitted or the postcode is invalid. Rules hold no mutable state and
/// may be shared across threads.
pub trait Rule: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn attribute(&self) -> Attribute;

    /// Whether this rule constrains the given segment value.
    fn applies_to(&self, value: &str) -> bool;

    /// Whether an in-scope segment value satisfies the rule.
    fn permits(&self, value: &str) -> bool;

    fn validate(&self, segments: &Segments) -> Result<()> {
        let value = segments.get(self.attribute());
        if value.is_empty() {
            return Err(PostcodeError::MissingAttribute {
                rule: self.name(),
                attribute: self.attribute().name(),
            });
        }

        if !self.applies_to(value) {
            return Ok(());
        }

        if !self.permits(value) {
            tracing::debug!(
                "{} rejected {} segment '{}'",
                self.name(),
                self.attribute().name(),
                value
            );
            return Err(PostcodeError::rejected_by(self.name()));
        }

        Ok(())
    }
}
