//! Lookup sections - check the password against weak-password lists.
//!
//! Both sections fail open: a source that cannot be consulted is treated
//! as not containing the password.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::finding::RuleFinding;
use crate::weaklist::WeakListSource;

/// Checks if the password is in the common-password list (case-sensitive).
pub fn common_password_section(
    source: &dyn WeakListSource,
    password: &SecretString,
) -> SectionResult {
    if lookup(source, password.expose_secret()) {
        return Some(RuleFinding::KnownCommonPassword);
    }
    None
}

/// Checks if the lower-cased password is in the dictionary.
pub fn dictionary_word_section(
    source: &dyn WeakListSource,
    password: &SecretString,
) -> SectionResult {
    let lowered = SecretString::new(password.expose_secret().to_lowercase().into());
    if lookup(source, lowered.expose_secret()) {
        return Some(RuleFinding::KnownDictionaryWord);
    }
    None
}

fn lookup(source: &dyn WeakListSource, candidate: &str) -> bool {
    match source.contains_exact(candidate) {
        Ok(found) => found,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                source = source.name(),
                error = %_err,
                "Weak-password lookup failed, treating as not found"
            );
            false
        }
    }
}
