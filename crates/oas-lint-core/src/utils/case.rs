//! Naming convention checks shared by the case-convention rules.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SNAKE_CASE: Regex = Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$")
        .unwrap_or_else(|e| unreachable!("snake case pattern is a valid regex: {e}"));
}

/// Returns true for lower snake case identifiers such as `last_seg` or `v1`.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    SNAKE_CASE.is_match(name)
}

/// Returns true for a `{name}` path template placeholder segment.
#[must_use]
pub fn is_template_segment(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with('{') && segment.ends_with('}')
}
