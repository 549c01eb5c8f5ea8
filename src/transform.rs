//! Letter-adjacency preprocessing.
//!
//! Every rule and lookup sees the password after a separator has been
//! inserted between each pair of adjacent ASCII letters, so `"ab"` is
//! analyzed as `"a*b"`.

use secrecy::{ExposeSecret, SecretString};

/// Character inserted between adjacent letters.
pub const SEPARATOR: char = '*';

/// Inserts [`SEPARATOR`] between every two consecutive ASCII letters.
pub fn insert_separators(password: &SecretString) -> SecretString {
    let pwd = password.expose_secret();
    let mut out = String::with_capacity(pwd.len() * 2);
    let mut prev_is_letter = false;

    for c in pwd.chars() {
        let is_letter = c.is_ascii_alphabetic();
        if prev_is_letter && is_letter {
            out.push(SEPARATOR);
        }
        out.push(c);
        prev_is_letter = is_letter;
    }

    SecretString::new(out.into_boxed_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(s: &str) -> String {
        let pwd = SecretString::new(s.to_string().into());
        insert_separators(&pwd).expose_secret().to_string()
    }

    #[test]
    fn test_two_letters() {
        assert_eq!(transform("ab"), "a*b");
    }

    #[test]
    fn test_word_with_trailing_digit() {
        assert_eq!(transform("Password1"), "P*a*s*s*w*o*r*d1");
    }

    #[test]
    fn test_letters_split_by_non_letters() {
        assert_eq!(transform("a1b!c d"), "a1b!c d");
    }

    #[test]
    fn test_non_ascii_letters_untouched() {
        assert_eq!(transform("éa"), "éa");
        assert_eq!(transform("aéb"), "aéb");
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(transform(""), "");
        assert_eq!(transform("Z"), "Z");
    }

    #[test]
    fn test_existing_separator_kept() {
        assert_eq!(transform("a*b"), "a*b");
        assert_eq!(transform("abc"), "a*b*c");
    }
}
