//! Password policy evaluator - runs every section and collects violations.

use std::sync::OnceLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::PasswordPolicy;
use crate::sections::{SECTIONS, Violation};

static DEFAULT_POLICY: OnceLock<PasswordPolicy> = OnceLock::new();

fn default_policy() -> &'static PasswordPolicy {
    DEFAULT_POLICY.get_or_init(PasswordPolicy::default)
}

impl PasswordPolicy {
    /// Validates a password against this policy.
    ///
    /// Every section runs; a failing rule never hides the ones after it.
    /// An empty result means the password is accepted.
    pub fn validate(&self, password: &SecretString) -> Vec<Violation> {
        let pwd = password.expose_secret();

        let violations: Vec<Violation> = SECTIONS
            .iter()
            .filter_map(|(_name, section_fn)| section_fn(pwd, self))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!("password validated: {} violation(s)", violations.len());

        violations
    }

    /// Returns `true` when the password satisfies every rule of this policy.
    pub fn is_valid(&self, password: &SecretString) -> bool {
        self.validate(password).is_empty()
    }
}

/// Validates a password against the default policy.
///
/// # Returns
/// The unmet rules in evaluation order; empty when the password is accepted.
pub fn validate_password(password: &SecretString) -> Vec<Violation> {
    default_policy().validate(password)
}

/// Returns `true` when the password satisfies the default policy.
pub fn is_valid_password(password: &SecretString) -> bool {
    default_policy().is_valid(password)
}

/// Delay before a keystroke-driven validation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the violations via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled by then, nothing is
/// sent, so a newer keystroke can supersede this evaluation.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    policy: &PasswordPolicy,
    token: CancellationToken,
    tx: mpsc::Sender<Vec<Violation>>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("validation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("validation cancelled");
        return;
    }

    let violations = policy.validate(password);

    if let Err(_e) = tx.send(violations).await {
        #[cfg(feature = "tracing")]
        tracing::warn!("Failed to send password validation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[test]
    fn test_validate_empty_password() {
        let violations = validate_password(&secret(""));
        assert_eq!(
            violations,
            vec![
                Violation::TooShort { min_length: 8 },
                Violation::MissingUppercase,
                Violation::MissingLowercase,
                Violation::MissingDigit,
                Violation::MissingSpecial,
                Violation::MissingNonLowercase,
            ]
        );
    }

    #[test]
    fn test_validate_accepted_password() {
        assert!(validate_password(&secret("Abc12345!")).is_empty());
        assert!(is_valid_password(&secret("Abc12345!")));
    }

    #[test]
    fn test_validate_short_password_always_reports_length() {
        for pwd in ["a", "Ab1!", "Abc123!", "ÄÖÜ!1aB"] {
            let violations = validate_password(&secret(pwd));
            assert!(
                violations.contains(&Violation::TooShort { min_length: 8 }),
                "missing length violation for {:?}",
                pwd
            );
        }
    }

    #[test]
    fn test_validate_no_digit_does_not_short_circuit() {
        let violations = validate_password(&secret("abc"));
        assert!(violations.contains(&Violation::MissingDigit));
        assert!(violations.contains(&Violation::TooShort { min_length: 8 }));
        assert!(violations.contains(&Violation::MissingSpecial));

        let violations = validate_password(&secret("LongPassword!"));
        assert_eq!(violations, vec![Violation::MissingDigit]);
    }

    #[test]
    fn test_validate_all_uppercase_with_digit_and_special() {
        let violations = validate_password(&secret("PASSWORD1!"));
        assert_eq!(violations, vec![Violation::MissingLowercase]);
    }

    #[test]
    fn test_validate_all_lowercase_reports_overlapping_rules() {
        let violations = validate_password(&secret("lowercaseonly"));
        assert_eq!(
            violations,
            vec![
                Violation::MissingUppercase,
                Violation::MissingDigit,
                Violation::MissingSpecial,
                Violation::MissingNonLowercase,
            ]
        );
    }

    #[test]
    fn test_validate_with_custom_policy() {
        let policy = PasswordPolicy {
            min_length: 10,
            special_chars: "-".to_string(),
        };
        assert_eq!(
            policy.validate(&secret("Abc12345!")),
            vec![Violation::TooShort { min_length: 10 }, Violation::MissingSpecial]
        );
        assert!(policy.is_valid(&secret("Abc-123456")));
    }
}
