//! Rule findings and the messages they map to.

use std::fmt;

/// Message reported when no finding was raised.
pub const STRONG_MESSAGE: &str = "Password is strong.";

/// A rule violation raised while analyzing a password.
///
/// Variants are declared in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleFinding {
    LengthTooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecialChar,
    SequentialDigits,
    KnownCommonPassword,
    KnownDictionaryWord,
}

impl RuleFinding {
    /// The fixed human-readable message for this finding.
    pub fn message(self) -> &'static str {
        match self {
            RuleFinding::LengthTooShort => "Password should be at least 8 characters.",
            RuleFinding::MissingUppercase => {
                "Password should contain at least one uppercase letter."
            }
            RuleFinding::MissingLowercase => {
                "Password should contain at least one lowercase letter."
            }
            RuleFinding::MissingDigit => "Password should contain at least one digit.",
            RuleFinding::MissingSpecialChar => {
                "Password should contain at least one special character (!@#$%^&*(),.?\":{}|<>)"
            }
            RuleFinding::SequentialDigits => {
                "Avoid using a series of four numbers in order (e.g., 1234, 5678)."
            }
            RuleFinding::KnownCommonPassword => {
                "Password is too common. Please choose a less common password."
            }
            RuleFinding::KnownDictionaryWord => "Password should not be a dictionary word.",
        }
    }
}

impl fmt::Display for RuleFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
