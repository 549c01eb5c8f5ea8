//! Pattern section - detects runs of four digits.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::sync::LazyLock;

use super::SectionResult;
use crate::finding::RuleFinding;

static DIGIT_SERIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("digit series pattern is valid"));

/// Checks the password for four consecutive decimal digits (e.g. `1234`, `9071`).
///
/// Any four digits in a row count; they need not be ascending.
pub fn sequential_digits_section(password: &SecretString) -> SectionResult {
    if DIGIT_SERIES.is_match(password.expose_secret()) {
        return Some(RuleFinding::SequentialDigits);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(s: &str) -> SectionResult {
        sequential_digits_section(&SecretString::new(s.to_string().into()))
    }

    #[test]
    fn test_pattern_section_four_digits() {
        assert_eq!(check("x1234y"), Some(RuleFinding::SequentialDigits));
        assert_eq!(check("9071"), Some(RuleFinding::SequentialDigits));
    }

    #[test]
    fn test_pattern_section_three_digits() {
        assert_eq!(check("123a456"), None);
    }

    #[test]
    fn test_pattern_section_long_run() {
        assert_eq!(check("A*b123456789"), Some(RuleFinding::SequentialDigits));
    }

    #[test]
    fn test_pattern_section_empty() {
        assert_eq!(check(""), None);
    }
}
