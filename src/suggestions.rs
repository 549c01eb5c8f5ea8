//! Improvement suggestions.
//!
//! Suggestions reinforce practices the password already shows: each
//! conditional hint is triggered by a check that *passed*. A weak password
//! with more than one finding also gets a block of generic hardening hints.

use std::fmt;

use crate::finding::RuleFinding;

/// Maximum number of suggestions returned for one analysis.
pub const MAX_SUGGESTIONS: usize = 10;

/// Transformed lengths in this range trigger [`Suggestion::UseLongerPassword`].
const LONGER_PASSWORD_RANGE: std::ops::RangeInclusive<usize> = 4..=10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    UseLongerPassword,
    MixLetterCase,
    IncludeNumbers,
    AddSpecialCharacters,
    AvoidDigitSeries,
    AvoidGuessableInfo,
    AvoidRepetition,
    UsePassphrase,
    MixCharacterCategories,
    RotateRegularly,
}

/// Hints appended, in this order, when more than one finding was raised.
pub const GENERIC_HARDENING: [Suggestion; 5] = [
    Suggestion::AvoidGuessableInfo,
    Suggestion::AvoidRepetition,
    Suggestion::UsePassphrase,
    Suggestion::MixCharacterCategories,
    Suggestion::RotateRegularly,
];

impl Suggestion {
    pub fn text(self) -> &'static str {
        match self {
            Suggestion::UseLongerPassword => "Consider using a longer password.",
            Suggestion::MixLetterCase => "Mix uppercase and lowercase letters.",
            Suggestion::IncludeNumbers => "Include numbers in your password.",
            Suggestion::AddSpecialCharacters => {
                "Add special characters like !@#$%^&*(),.?\":{}|<>"
            }
            Suggestion::AvoidDigitSeries => "Avoid using a series of four numbers in order.",
            Suggestion::AvoidGuessableInfo => {
                "Avoid using easily guessable information (e.g., birthdates, names)."
            }
            Suggestion::AvoidRepetition => {
                "Avoid repeating characters or sequences (e.g., aaa, 123)."
            }
            Suggestion::UsePassphrase => "Use a passphrase instead of a single word.",
            Suggestion::MixCharacterCategories => {
                "Include a mix of letters, numbers, and special characters."
            }
            Suggestion::RotateRegularly => "Change your password regularly for added security.",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Builds the suggestion list for a transformed password of
/// `transformed_len` characters that raised `findings`.
///
/// The result holds at most [`MAX_SUGGESTIONS`] entries.
pub fn assemble_suggestions(transformed_len: usize, findings: &[RuleFinding]) -> Vec<Suggestion> {
    let raised = |finding: RuleFinding| findings.contains(&finding);
    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);

    if LONGER_PASSWORD_RANGE.contains(&transformed_len) {
        suggestions.push(Suggestion::UseLongerPassword);
    }
    if !raised(RuleFinding::MissingUppercase) && !raised(RuleFinding::MissingLowercase) {
        suggestions.push(Suggestion::MixLetterCase);
    }
    if !raised(RuleFinding::MissingDigit) {
        suggestions.push(Suggestion::IncludeNumbers);
    }
    if !raised(RuleFinding::MissingSpecialChar) {
        suggestions.push(Suggestion::AddSpecialCharacters);
    }
    if !raised(RuleFinding::SequentialDigits) {
        suggestions.push(Suggestion::AvoidDigitSeries);
    }

    if findings.len() > 1 {
        suggestions.extend(GENERIC_HARDENING);
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
