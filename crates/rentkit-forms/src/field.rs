//! Field specs: the declarative description of one form input
//!
//! A [`FieldSpec`] carries everything the form needs to seed, validate,
//! and submit one value. The kind is a typed union so validation
//! dispatch is exhaustive rather than string-compared.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use crate::validators::{format_bound, validate_email, validate_url};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation failure for a single field
///
/// The `Display` text is the user-facing message shown next to the
/// offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// A required field was left empty
	#[error("This field is required")]
	Required,
	/// The value has the wrong shape for the field kind
	#[error("{0}")]
	Invalid(String),
	/// The value failed a kind, pattern, or custom rule
	#[error("{0}")]
	Validation(String),
}

/// Result alias for field validation
pub type FieldResult<T> = Result<T, FieldError>;

/// One option of a select or radio field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
	/// Submitted value
	pub value: String,
	/// Display label
	pub label: String,
}

impl Choice {
	/// Creates a choice
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// The typed kind of a field, driving validation and the empty value
#[derive(Debug, Clone)]
pub enum FieldKind {
	/// Single-line text
	Text,
	/// Email address, checked against the shared pattern
	Email,
	/// Absolute URL
	Url,
	/// Numeric input with optional inclusive bounds
	Number {
		/// Inclusive minimum
		min: Option<f64>,
		/// Inclusive maximum
		max: Option<f64>,
	},
	/// ISO date input with optional inclusive bounds
	Date {
		/// Earliest accepted date
		min: Option<NaiveDate>,
		/// Latest accepted date
		max: Option<NaiveDate>,
	},
	/// One value out of a declared choice list
	Select {
		/// The declared options
		choices: Vec<Choice>,
	},
	/// Multi-line text
	TextArea,
	/// Boolean toggle; absent means unchecked
	Checkbox,
	/// One value out of a declared choice list, rendered as radios
	Radio {
		/// The declared options
		choices: Vec<Choice>,
	},
}

impl FieldKind {
	/// Discriminant tag used for schema fingerprinting
	pub(crate) fn tag(&self) -> &'static str {
		match self {
			FieldKind::Text => "text",
			FieldKind::Email => "email",
			FieldKind::Url => "url",
			FieldKind::Number { .. } => "number",
			FieldKind::Date { .. } => "date",
			FieldKind::Select { .. } => "select",
			FieldKind::TextArea => "textarea",
			FieldKind::Checkbox => "checkbox",
			FieldKind::Radio { .. } => "radio",
		}
	}
}

/// Custom validator: receives the candidate value and the full form
/// snapshot, returns `Ok(())` or the error message to display
pub type Validator = Arc<dyn Fn(&Value, &HashMap<String, Value>) -> Result<(), String> + Send + Sync>;

/// Declarative description of one form field
///
/// # Example
///
/// ```rust
/// use rentkit_forms::{FieldKind, FieldSpec};
///
/// let age = FieldSpec::new("age", "Age", FieldKind::Number { min: Some(18.0), max: None })
///     .required();
/// assert_eq!(age.name(), "age");
/// assert!(age.is_required());
/// ```
#[derive(Clone)]
pub struct FieldSpec {
	name: String,
	label: String,
	kind: FieldKind,
	required: bool,
	pattern: Option<Regex>,
	validator: Option<Validator>,
	default: Option<Value>,
}

impl FieldSpec {
	/// Creates an optional field of the given kind
	pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			kind,
			required: false,
			pattern: None,
			validator: None,
			default: None,
		}
	}

	/// Marks the field as required
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Attaches a regex the stringified value must match
	pub fn with_pattern(mut self, pattern: Regex) -> Self {
		self.pattern = Some(pattern);
		self
	}

	/// Attaches a custom validator with access to the form snapshot
	///
	/// # Examples
	///
	/// ```
	/// use rentkit_forms::{FieldKind, FieldSpec};
	///
	/// let confirm = FieldSpec::new("confirm", "Confirm password", FieldKind::Text)
	///     .with_validator(|value, form| {
	///         if form.get("password") == Some(value) {
	///             Ok(())
	///         } else {
	///             Err("Passwords do not match".to_string())
	///         }
	///     });
	/// assert_eq!(confirm.name(), "confirm");
	/// ```
	pub fn with_validator<F>(mut self, validator: F) -> Self
	where
		F: Fn(&Value, &HashMap<String, Value>) -> Result<(), String> + Send + Sync + 'static,
	{
		self.validator = Some(Arc::new(validator));
		self
	}

	/// Sets the value used when no initial data covers the field
	pub fn with_default(mut self, default: Value) -> Self {
		self.default = Some(default);
		self
	}

	/// The submission key
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The display label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// The typed kind
	pub fn kind(&self) -> &FieldKind {
		&self.kind
	}

	/// Whether the field must be non-empty to submit
	pub fn is_required(&self) -> bool {
		self.required
	}

	/// The declared default value, if any
	pub fn default(&self) -> Option<&Value> {
		self.default.as_ref()
	}

	/// The value an untouched field starts from: declared default, or
	/// the kind's empty value (`false` for checkboxes, `""` otherwise)
	pub fn seed_value(&self) -> Value {
		if let Some(default) = &self.default {
			return default.clone();
		}
		match self.kind {
			FieldKind::Checkbox => Value::Bool(false),
			_ => Value::String(String::new()),
		}
	}

	/// Validates a candidate value against this spec
	///
	/// Rules run in order and short-circuit on the first failure:
	/// required-but-empty, kind-specific checks, the pattern, then the
	/// custom validator. Optional fields left empty skip everything
	/// after the emptiness check.
	pub fn validate(
		&self,
		value: Option<&Value>,
		snapshot: &HashMap<String, Value>,
	) -> FieldResult<()> {
		let empty = is_empty_value(value);

		// Checkboxes are exempt from the required-empty rule: an
		// unchecked box submits `false`, it is not "missing".
		if empty && !matches!(self.kind, FieldKind::Checkbox) {
			if self.required {
				return Err(FieldError::Required);
			}
			return Ok(());
		}

		let candidate = value.cloned().unwrap_or(Value::Null);
		self.validate_kind(&candidate)?;

		if let Some(pattern) = &self.pattern {
			let text = value_text(&candidate);
			if !pattern.is_match(&text) {
				return Err(FieldError::Validation(
					"Value does not match the required pattern".to_string(),
				));
			}
		}

		if let Some(validator) = &self.validator {
			validator(&candidate, snapshot).map_err(FieldError::Validation)?;
		}

		Ok(())
	}

	fn validate_kind(&self, value: &Value) -> FieldResult<()> {
		match &self.kind {
			FieldKind::Text | FieldKind::TextArea => {
				require_string(value)?;
				Ok(())
			}
			FieldKind::Email => {
				let text = require_string(value)?;
				validate_email(text.trim())
			}
			FieldKind::Url => {
				let text = require_string(value)?;
				validate_url(text.trim())
			}
			FieldKind::Number { min, max } => {
				let number = coerce_number(value)?;
				if let Some(min) = min
					&& number < *min
				{
					return Err(FieldError::Validation(format!(
						"Value must be at least {}",
						format_bound(*min)
					)));
				}
				if let Some(max) = max
					&& number > *max
				{
					return Err(FieldError::Validation(format!(
						"Value must be at most {}",
						format_bound(*max)
					)));
				}
				Ok(())
			}
			FieldKind::Date { min, max } => {
				let text = require_string(value)?;
				let date = NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
					.map_err(|_| FieldError::Validation("Enter a valid date".to_string()))?;
				if let Some(min) = min
					&& date < *min
				{
					return Err(FieldError::Validation(format!(
						"Date must be on or after {}",
						min.format(DATE_FORMAT)
					)));
				}
				if let Some(max) = max
					&& date > *max
				{
					return Err(FieldError::Validation(format!(
						"Date must be on or before {}",
						max.format(DATE_FORMAT)
					)));
				}
				Ok(())
			}
			FieldKind::Select { choices } | FieldKind::Radio { choices } => {
				let text = require_string(value)?;
				if choices.iter().any(|c| c.value == text) {
					Ok(())
				} else {
					Err(FieldError::Validation("Select a valid choice".to_string()))
				}
			}
			FieldKind::Checkbox => match value {
				Value::Bool(_) | Value::Null => Ok(()),
				Value::String(s) if s == "true" || s == "false" => Ok(()),
				_ => Err(FieldError::Invalid("Value must be a boolean".to_string())),
			},
		}
	}
}

impl fmt::Debug for FieldSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldSpec")
			.field("name", &self.name)
			.field("label", &self.label)
			.field("kind", &self.kind)
			.field("required", &self.required)
			.field("pattern", &self.pattern.as_ref().map(|p| p.as_str()))
			.field("has_validator", &self.validator.is_some())
			.field("default", &self.default)
			.finish()
	}
}

fn is_empty_value(value: Option<&Value>) -> bool {
	match value {
		None | Some(Value::Null) => true,
		Some(Value::String(s)) => s.trim().is_empty(),
		Some(_) => false,
	}
}

fn require_string(value: &Value) -> FieldResult<&str> {
	value
		.as_str()
		.ok_or_else(|| FieldError::Invalid("Value must be a string".to_string()))
}

fn coerce_number(value: &Value) -> FieldResult<f64> {
	let parsed = match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse::<f64>().ok(),
		_ => None,
	};
	parsed.ok_or_else(|| FieldError::Validation("Value must be a number".to_string()))
}

fn value_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}
