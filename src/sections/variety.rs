//! Character variety sections - uppercase, lowercase, digits, special chars.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::sync::LazyLock;

use super::SectionResult;
use crate::finding::RuleFinding;

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

// Non-word characters plus underscore.
static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\W_]").expect("special char pattern is valid"));

/// Raises [`RuleFinding::MissingUppercase`] when no `A-Z` is present.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_uppercase()) {
        return Some(RuleFinding::MissingUppercase);
    }
    None
}

/// Raises [`RuleFinding::MissingLowercase`] when no `a-z` is present.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_lowercase()) {
        return Some(RuleFinding::MissingLowercase);
    }
    None
}

/// Raises [`RuleFinding::MissingDigit`] when no decimal digit is present.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !DIGIT.is_match(password.expose_secret()) {
        return Some(RuleFinding::MissingDigit);
    }
    None
}

/// Raises [`RuleFinding::MissingSpecialChar`] when the password has only
/// letters and digits.
pub fn special_char_section(password: &SecretString) -> SectionResult {
    if !SPECIAL.is_match(password.expose_secret()) {
        return Some(RuleFinding::MissingSpecialChar);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        assert_eq!(
            uppercase_section(&secret("lowercase123!")),
            Some(RuleFinding::MissingUppercase)
        );
        assert_eq!(uppercase_section(&secret("lowerCase")), None);
    }

    #[test]
    fn test_variety_section_non_ascii_uppercase_ignored() {
        assert_eq!(
            uppercase_section(&secret("ÉÀÑ")),
            Some(RuleFinding::MissingUppercase)
        );
        assert_eq!(uppercase_section(&secret("ÉCOLE")), None);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        assert_eq!(
            lowercase_section(&secret("UPPERCASE123!")),
            Some(RuleFinding::MissingLowercase)
        );
        assert_eq!(lowercase_section(&secret("UPPERcASE")), None);
    }

    #[test]
    fn test_variety_section_missing_digit() {
        assert_eq!(digit_section(&secret("NoNumbers!")), Some(RuleFinding::MissingDigit));
        assert_eq!(digit_section(&secret("One1")), None);
    }

    #[test]
    fn test_variety_section_missing_special() {
        assert_eq!(
            special_char_section(&secret("NoSpecial123")),
            Some(RuleFinding::MissingSpecialChar)
        );
    }

    #[test]
    fn test_variety_section_special_variants() {
        assert_eq!(special_char_section(&secret("a*b")), None);
        assert_eq!(special_char_section(&secret("under_score")), None);
        assert_eq!(special_char_section(&secret("with space")), None);
    }
}
