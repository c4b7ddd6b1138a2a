use regex::Regex;
use std::sync::LazyLock;

static AREA_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{1,2}").unwrap());
static DISTRICT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,2}[A-Z]?$").unwrap());
static SECTOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]").unwrap());
static UNIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z0-9]{2}$").unwrap());

// Each extractor yields an empty slice when nothing matches.
fn find<'a>(regex: &Regex, haystack: &'a str) -> &'a str {
    regex.find(haystack).map(|m| m.as_str()).unwrap_or("")
}

pub fn area(outward: &str) -> &str {
    find(&AREA_REGEX, outward)
}

pub fn district(outward: &str) -> &str {
    find(&DISTRICT_REGEX, outward)
}

pub fn sector(inward: &str) -> &str {
    find(&SECTOR_REGEX, inward)
}

pub fn unit(inward: &str) -> &str {
    find(&UNIT_REGEX, inward)
}
