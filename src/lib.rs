//! Text logic for a content portal
//!
//! This library provides the non-presentational pieces of the portal:
//! password policy validation, inline link extraction for article
//! paragraphs, article block rendering and registration/login form checks.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable password validation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`PasswordPolicy::from_env`]:
//!
//! - `PORTAL_PASSWORD_MIN_LENGTH`: minimum password length (default: 8)
//! - `PORTAL_PASSWORD_SPECIALS`: accepted special characters
//!
//! # Example
//!
//! ```rust
//! use portal_text::{extract_links, validate_password, Segment};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! assert!(validate_password(&password).is_empty());
//!
//! let segments = extract_links("see https://example.com now");
//! assert_eq!(segments[1], Segment::Link("https://example.com"));
//! ```

// Internal modules
mod article;
mod evaluator;
mod forms;
mod links;
mod policy;
mod sections;

// Public API
pub use article::{ArticleDocument, ArticleError, ContentBlock};
pub use evaluator::{is_valid_password, validate_password};
pub use forms::{Field, FormErrors, LoginForm, RegistrationForm};
pub use links::{extract_links, is_web_url, render_link, render_paragraph, render_segments, Segment};
pub use policy::{PasswordPolicy, PolicyError};
pub use sections::Violation;

#[cfg(feature = "async")]
pub use evaluator::{validate_password_tx, DEBOUNCE};
