//! Registration and login form validation.
//!
//! Forms arrive as typed structs rather than a loose name/value map. Each
//! `validate` returns the display errors keyed by field.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::policy::PasswordPolicy;

/// User names that cannot be registered.
const RESERVED_NAMES: &[&str] = &["admin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Terms,
}

impl Field {
    /// The form field name this error belongs to.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Terms => "terms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display errors keyed by field. Empty means the form was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, String>);

impl FormErrors {
    /// Returns `true` when the form was accepted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the error shown next to `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

#[derive(Debug)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub terms_accepted: bool,
}

impl RegistrationForm {
    /// Validates a submitted registration against the default password policy.
    pub fn validate(&self) -> FormErrors {
        self.validate_with(&PasswordPolicy::default())
    }

    /// Validates a submitted registration against `policy`.
    ///
    /// Password and name errors are reported together. The terms error is
    /// only reported once everything else is valid, and then on its own.
    pub fn validate_with(&self, policy: &PasswordPolicy) -> FormErrors {
        let mut errors = FormErrors::default();

        let violations = policy.validate(&self.password);
        if !violations.is_empty() {
            let messages: Vec<String> = violations.iter().map(|v| v.message()).collect();
            errors.insert(Field::Password, messages.join(", "));
        }

        if RESERVED_NAMES.contains(&self.name.as_str()) {
            errors.insert(Field::Name, "Nice try! Please choose another user name");
        }

        if errors.is_empty() && !self.terms_accepted {
            errors.insert(Field::Terms, "Please accept the terms");
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("registration validated: {} field error(s)", errors.len());

        errors
    }
}

#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    /// Checks that both fields are filled in. The password policy is not
    /// applied at login.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        }
        if self.password.expose_secret().is_empty() {
            errors.insert(Field::Password, "Password is required");
        }

        errors
    }
}
