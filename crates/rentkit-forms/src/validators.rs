//! Shared value validators used by the field kinds

use std::sync::LazyLock;

use regex::Regex;

use crate::field::{FieldError, FieldResult};

// One non-whitespace run, an @, another run, a dot, a final run.
// Deliberately loose: the server owns real address verification.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates an email address against the shared pattern
///
/// # Examples
///
/// ```
/// use rentkit_forms::validators::validate_email;
///
/// assert!(validate_email("alice@example.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// assert!(validate_email("a b@example.com").is_err());
/// ```
pub fn validate_email(value: &str) -> FieldResult<()> {
	if EMAIL_REGEX.is_match(value) {
		Ok(())
	} else {
		Err(FieldError::Validation(
			"Enter a valid email address".to_string(),
		))
	}
}

/// Validates that a string parses as an absolute URL
///
/// # Examples
///
/// ```
/// use rentkit_forms::validators::validate_url;
///
/// assert!(validate_url("https://example.com/cars").is_ok());
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(value: &str) -> FieldResult<()> {
	url::Url::parse(value)
		.map(|_| ())
		.map_err(|_| FieldError::Validation("Enter a valid URL".to_string()))
}

/// Formats a numeric bound the way it was declared: `18`, not `18.0`
pub fn format_bound(value: f64) -> String {
	if value.fract() == 0.0 && value.abs() < 1e15 {
		format!("{}", value as i64)
	} else {
		value.to_string()
	}
}
