//! Password policy sections
//!
//! Each section checks one rule of the policy and reports at most one violation.

mod length;
mod special;
mod variety;

use std::fmt;

pub use length::length_section;
pub use special::{non_lowercase_section, special_section};
pub use variety::{digit_section, lowercase_section, uppercase_section};

use crate::policy::PasswordPolicy;

/// Result type for section functions.
/// - `Some(violation)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Violation>;

/// Signature shared by every section.
pub type Section = fn(&str, &PasswordPolicy) -> SectionResult;

/// Sections in evaluation order. The order is observable in the result.
pub const SECTIONS: [(&str, Section); 6] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
    ("non_lowercase", non_lowercase_section),
];

/// One unmet password rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    TooShort { min_length: usize },
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
    MissingNonLowercase,
}

impl Violation {
    /// Human-readable message shown next to the password field.
    pub fn message(&self) -> String {
        match self {
            Violation::TooShort { min_length } => {
                format!("Password must be at least {} characters", min_length)
            }
            Violation::MissingUppercase => {
                "Password must contain at least one uppercase letter".to_string()
            }
            Violation::MissingLowercase => {
                "Password must contain at least one lowercase letter".to_string()
            }
            Violation::MissingDigit => "Password must contain at least one digit".to_string(),
            Violation::MissingSpecial => {
                "Password must include at least one special character".to_string()
            }
            Violation::MissingNonLowercase => {
                "Password must contain at least one non-lowercase character".to_string()
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
