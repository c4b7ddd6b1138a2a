use crate::domain::model::Attribute;
use crate::domain::ports::Rule;
use crate::utils::error::Result;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// What an in-scope segment must satisfy.
#[derive(Debug, Clone)]
pub enum Constraint {
    Pattern(Regex),
    /// Nothing in scope is ever valid.
    Forbidden,
}

/// A rule defined by a scope pattern and a stricter constraint, both tested
/// against the same segment.
#[derive(Debug, Clone)]
pub struct ScopedRule {
    name: &'static str,
    attribute: Attribute,
    scope: Regex,
    constraint: Constraint,
}

impl ScopedRule {
    pub fn try_new(
        name: &'static str,
        attribute: Attribute,
        scope: &str,
        pattern: &str,
    ) -> Result<Self> {
        Ok(Self {
            name,
            attribute,
            scope: Regex::new(scope)?,
            constraint: Constraint::Pattern(Regex::new(pattern)?),
        })
    }

    pub fn try_forbidden(name: &'static str, attribute: Attribute, scope: &str) -> Result<Self> {
        Ok(Self {
            name,
            attribute,
            scope: Regex::new(scope)?,
            constraint: Constraint::Forbidden,
        })
    }

    // Only for the literal patterns below; panics if one fails to compile.
    pub(crate) fn new(
        name: &'static str,
        attribute: Attribute,
        scope: &str,
        pattern: &str,
    ) -> Self {
        Self::try_new(name, attribute, scope, pattern).unwrap()
    }

    pub(crate) fn forbidden(name: &'static str, attribute: Attribute, scope: &str) -> Self {
        Self::try_forbidden(name, attribute, scope).unwrap()
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }
}

impl Rule for ScopedRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn attribute(&self) -> Attribute {
        self.attribute
    }

    fn applies_to(&self, value: &str) -> bool {
        self.scope.is_match(value)
    }

    fn permits(&self, value: &str) -> bool {
        match &self.constraint {
            Constraint::Pattern(pattern) => pattern.is_match(value),
            Constraint::Forbidden => false,
        }
    }
}

pub const SINGLE_DIGIT_DISTRICT: &str = "SingleDigitDistrict";
pub const DOUBLE_DIGIT_DISTRICT: &str = "DoubleDigitDistrict";
pub const ZERO_OR_TEN_DISTRICT: &str = "ZeroOrTenDistrict";
pub const CENTRAL_LONDON_DISTRICT: &str = "CentralLondonDistrict";
pub const FIRST_LETTER: &str = "FirstLetter";
pub const SECOND_LETTER: &str = "SecondLetter";
pub const THIRD_LETTER: &str = "ThirdLetter";
pub const FOURTH_LETTER: &str = "FourthLetter";
pub const LAST_TWO_LETTER: &str = "LastTwoLetter";

/// Names of the standard rules, in evaluation order.
pub const STANDARD_RULE_NAMES: [&str; 9] = [
    SINGLE_DIGIT_DISTRICT,
    DOUBLE_DIGIT_DISTRICT,
    ZERO_OR_TEN_DISTRICT,
    CENTRAL_LONDON_DISTRICT,
    FIRST_LETTER,
    SECOND_LETTER,
    THIRD_LETTER,
    FOURTH_LETTER,
    LAST_TWO_LETTER,
];

/// Areas with only single-digit districts. WC and WN always carry a
/// trailing letter after the digit.
pub fn single_digit_district() -> ScopedRule {
    ScopedRule::new(
        SINGLE_DIGIT_DISTRICT,
        Attribute::Outward,
        r"^(?:BR|FY|HA|HD|HG|HR|HS|HX|JE|LD|SM|SR|WC|WN|ZE)",
        r"^(?:BR|FY|HA|HD|HG|HR|HS|HX|JE|LD|SM|SR|ZE)[0-9]$|^W[CN][0-9][A-Z]$",
    )
}

/// Areas with only double-digit districts.
pub fn double_digit_district() -> ScopedRule {
    ScopedRule::new(
        DOUBLE_DIGIT_DISTRICT,
        Attribute::Outward,
        r"^(?:AB|LL|SO)",
        r"^[A-Z]{2}[0-9]{2}$",
    )
}

/// District 0 exists only in BL, BS, CM, CR, FY, HA, PR, SL and SS. Of
/// those areas only BS also has a district 10.
pub fn zero_or_ten_district() -> ScopedRule {
    ScopedRule::new(
        ZERO_OR_TEN_DISTRICT,
        Attribute::Outward,
        r"^(?:[A-Z]{1,2}0|(?:BL|BS|CM|CR|FY|HA|PR|SL|SS)10)$",
        r"^(?:BL|BS|CM|CR|FY|HA|PR|SL|SS)0$|^BS10$",
    )
}

/// Central London districts subdivided by a trailing letter.
pub fn central_london_district() -> ScopedRule {
    ScopedRule::new(
        CENTRAL_LONDON_DISTRICT,
        Attribute::Outward,
        r"^(?:EC[0-9][A-Z]?|(?:E1|N1|NW1|SE1|SW1|W1|WC1|WC2)[A-Z])$",
        r"^(?:EC[1-4][A-Z]?|E1W|N1[CP]|NW1W|SE1P|(?:SW1|W1|WC1|WC2)[A-Z])$",
    )
}

pub fn first_letter() -> ScopedRule {
    ScopedRule::forbidden(FIRST_LETTER, Attribute::Outward, r"^[QVX]")
}

pub fn second_letter() -> ScopedRule {
    ScopedRule::forbidden(SECOND_LETTER, Attribute::Outward, r"^.[IJZ]")
}

/// A9A outward codes.
pub fn third_letter() -> ScopedRule {
    ScopedRule::new(
        THIRD_LETTER,
        Attribute::Outward,
        r"^[A-Z][0-9][A-Z]$",
        r"^[A-Z][0-9][ABCDEFGHJKPSTUW]$",
    )
}

/// AA9A outward codes.
pub fn fourth_letter() -> ScopedRule {
    ScopedRule::new(
        FOURTH_LETTER,
        Attribute::Outward,
        r"^[A-Z]{2}[0-9][A-Z]$",
        r"^[A-Z]{2}[0-9][ABEHMNPRVWXY]$",
    )
}

/// The unit letters never use C, I, K, M, O or V.
pub fn last_two_letter() -> ScopedRule {
    ScopedRule::new(
        LAST_TWO_LETTER,
        Attribute::Inward,
        r"^[0-9][A-Z]{2}$",
        r"^[0-9][ABDEFGHJLNPQRSTUWXYZ]{2}$",
    )
}

static STANDARD_RULES: LazyLock<Vec<Arc<dyn Rule>>> = LazyLock::new(|| {
    vec![
        Arc::new(single_digit_district()) as Arc<dyn Rule>,
        Arc::new(double_digit_district()),
        Arc::new(zero_or_ten_district()),
        Arc::new(central_london_district()),
        Arc::new(first_letter()),
        Arc::new(second_letter()),
        Arc::new(third_letter()),
        Arc::new(fourth_letter()),
        Arc::new(last_two_letter()),
    ]
});

/// The shared instances of the standard rules, compiled once per process.
pub fn standard_rules() -> &'static [Arc<dyn Rule>] {
    &STANDARD_RULES
}

pub fn standard_rule(name: &str) -> Option<Arc<dyn Rule>> {
    STANDARD_RULES
        .iter()
        .find(|rule| rule.name() == name)
        .cloned()
}
