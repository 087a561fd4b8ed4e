//! Special character sections.

use super::{SectionResult, Violation};
use crate::policy::PasswordPolicy;

/// Checks for at least one character from the policy's special set.
///
/// # Returns
/// - `Some(Violation::MissingSpecial)` if none is present
/// - `None` otherwise
pub fn special_section(password: &str, policy: &PasswordPolicy) -> SectionResult {
    if !password.chars().any(|c| policy.special_chars.contains(c)) {
        return Some(Violation::MissingSpecial);
    }
    None
}

/// Checks for at least one character outside `a-z`.
///
/// Overlaps the uppercase, digit and special rules. Both messages are
/// reported when both rules fail.
pub fn non_lowercase_section(password: &str, _policy: &PasswordPolicy) -> SectionResult {
    if password.chars().all(|c| c.is_ascii_lowercase()) {
        return Some(Violation::MissingNonLowercase);
    }
    None
}
