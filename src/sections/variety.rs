//! Character variety sections - uppercase, lowercase and digit rules.

use super::{SectionResult, Violation};
use crate::policy::PasswordPolicy;

/// Checks that the password contains at least one ASCII uppercase letter (`A-Z`).
///
/// # Returns
/// - `Some(Violation::MissingUppercase)` if no such character is present
/// - `None` otherwise
pub fn uppercase_section(password: &str, _policy: &PasswordPolicy) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some(Violation::MissingUppercase);
    }
    None
}

/// Checks that the password contains at least one ASCII lowercase letter (`a-z`).
///
/// # Returns
/// - `Some(Violation::MissingLowercase)` if no such character is present
/// - `None` otherwise
pub fn lowercase_section(password: &str, _policy: &PasswordPolicy) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some(Violation::MissingLowercase);
    }
    None
}

/// Checks that the password contains at least one ASCII digit (`0-9`).
///
/// # Returns
/// - `Some(Violation::MissingDigit)` if no such character is present
/// - `None` otherwise
pub fn digit_section(password: &str, _policy: &PasswordPolicy) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some(Violation::MissingDigit);
    }
    None
}
