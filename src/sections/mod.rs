//! Password analysis sections
//!
//! Each section checks one rule against the transformed password.

mod length;
mod lookup;
mod pattern;
mod variety;

pub use length::length_section;
pub use lookup::{common_password_section, dictionary_word_section};
pub use pattern::sequential_digits_section;
pub use variety::{digit_section, lowercase_section, special_char_section, uppercase_section};

use crate::finding::RuleFinding;

/// Result type for section functions.
/// - `Some(finding)` - Section raised a finding
/// - `None` - Section passed
pub type SectionResult = Option<RuleFinding>;
