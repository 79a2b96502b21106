//! Email shape validation for the newsletter and sign-in forms.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// True when `s` has the shape of an email address.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Distinguishes a missing value from a malformed one so the form can show
/// the right inline message.
pub fn validate_email(s: &str) -> Result<(), ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if !is_valid_email(s) {
        return Err(ValidationError::Malformed);
    }
    Ok(())
}
