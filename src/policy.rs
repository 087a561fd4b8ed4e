//! Password policy configuration
//!
//! Holds the tunable parts of the password rules and loads overrides
//! from the environment.

use thiserror::Error;

/// Environment variable overriding the minimum password length.
pub const MIN_LENGTH_VAR: &str = "PORTAL_PASSWORD_MIN_LENGTH";

/// Environment variable overriding the special character set.
pub const SPECIALS_VAR: &str = "PORTAL_PASSWORD_SPECIALS";

pub const DEFAULT_MIN_LENGTH: usize = 8;

pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>_";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid minimum password length: {0:?}")]
    InvalidMinLength(String),
    #[error("Special character set is empty")]
    EmptySpecialSet,
}

/// Tunable password rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum number of characters.
    pub min_length: usize,
    /// Characters accepted by the special character rule.
    pub special_chars: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
        }
    }
}

impl PasswordPolicy {
    /// Builds a policy from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PORTAL_PASSWORD_MIN_LENGTH`: minimum length (default: 8)
    /// - `PORTAL_PASSWORD_SPECIALS`: special characters
    ///   (default: `!@#$%^&*(),.?":{}|<>_`)
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The minimum length is not a positive integer
    /// - The special character set is empty
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Ok(raw) = std::env::var(MIN_LENGTH_VAR) {
            policy.min_length = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Policy initialization FAILED: {} = {:?}", MIN_LENGTH_VAR, raw);
                    return Err(PolicyError::InvalidMinLength(raw));
                }
            };
        }

        if let Ok(raw) = std::env::var(SPECIALS_VAR) {
            if raw.is_empty() {
                #[cfg(feature = "tracing")]
                tracing::error!("Policy initialization FAILED: {} is empty", SPECIALS_VAR);
                return Err(PolicyError::EmptySpecialSet);
            }
            policy.special_chars = raw;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Password policy loaded: min_length={} specials={:?}",
            policy.min_length,
            policy.special_chars
        );

        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        remove_env(MIN_LENGTH_VAR);
        remove_env(SPECIALS_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let policy = PasswordPolicy::from_env().unwrap();
        assert_eq!(policy, PasswordPolicy::default());
        assert_eq!(policy.min_length, 8);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env(MIN_LENGTH_VAR, " 12 ");
        set_env(SPECIALS_VAR, "-~");

        let policy = PasswordPolicy::from_env().unwrap();
        assert_eq!(policy.min_length, 12);
        assert_eq!(policy.special_chars, "-~");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_length() {
        clear_env();
        set_env(MIN_LENGTH_VAR, "eight");

        let result = PasswordPolicy::from_env();
        assert_eq!(result, Err(PolicyError::InvalidMinLength("eight".to_string())));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_length() {
        clear_env();
        set_env(MIN_LENGTH_VAR, "0");

        let result = PasswordPolicy::from_env();
        assert!(matches!(result, Err(PolicyError::InvalidMinLength(_))));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_specials() {
        clear_env();
        set_env(SPECIALS_VAR, "");

        let result = PasswordPolicy::from_env();
        assert_eq!(result, Err(PolicyError::EmptySpecialSet));

        clear_env();
    }
}
