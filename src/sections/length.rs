//! Length section - checks password minimum length.

use super::{SectionResult, Violation};
use crate::policy::PasswordPolicy;

/// Checks if the password meets the policy's minimum length.
///
/// Length is counted in characters, not bytes.
///
/// # Returns
/// - `Some(Violation::TooShort)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &str, policy: &PasswordPolicy) -> SectionResult {
    if password.chars().count() < policy.min_length {
        return Some(Violation::TooShort {
            min_length: policy.min_length,
        });
    }
    None
}
