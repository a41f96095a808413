//! The controlled form state machine
//!
//! [`FormState`] owns the working values of one open form: seeding on
//! open, per-field validation, the blur-aware error display policy, and
//! submit gating. It performs no I/O and invokes nothing but the
//! caller-supplied submit handler.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use serde_json::Value;

use crate::field::FieldError;
use crate::schema::FormSchema;

/// Form-level failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	/// The referenced field is not part of the schema
	#[error("Unknown field: {0}")]
	UnknownField(String),
	/// Submission was rejected because at least one field is invalid
	#[error("Form has invalid fields")]
	Invalid {
		/// Field name to user-facing message
		errors: HashMap<String, String>,
	},
}

/// Result alias for form operations
pub type FormResult<T> = Result<T, FormError>;

/// Working state of one form instance
///
/// # Example
///
/// ```rust
/// use rentkit_forms::{FieldKind, FieldSpec, FormSchema, FormState, SchemaNode};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let schema = FormSchema::new(vec![SchemaNode::Field(
///     FieldSpec::new("make", "Make", FieldKind::Text).required(),
/// )]);
/// let mut form = FormState::new(schema);
/// form.open(&HashMap::new());
///
/// form.set_value("make", json!("Toyota")).unwrap();
/// let payload = form.submit().unwrap();
/// assert_eq!(payload.get("make"), Some(&json!("Toyota")));
/// ```
#[derive(Debug)]
pub struct FormState {
	schema: FormSchema,
	values: HashMap<String, Value>,
	touched: HashSet<String>,
	errors: HashMap<String, String>,
	open: bool,
	seeded_from: Option<u64>,
}

impl FormState {
	/// Creates a closed form over the schema
	pub fn new(schema: FormSchema) -> Self {
		Self {
			schema,
			values: HashMap::new(),
			touched: HashSet::new(),
			errors: HashMap::new(),
			open: false,
			seeded_from: None,
		}
	}

	/// The schema this form renders
	pub fn schema(&self) -> &FormSchema {
		&self.schema
	}

	/// Whether the form is currently open
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Opens the form, seeding working values when needed
	///
	/// Seeding precedence per field: caller initial data, then the
	/// field's declared default, then the kind's empty value. A closed
	/// form always seeds on open; an already-open form re-seeds only
	/// when the schema or the initial data identity changed, so routine
	/// re-renders never discard in-progress edits.
	pub fn open(&mut self, initial: &HashMap<String, Value>) {
		let identity = self.seed_identity(initial);
		let must_seed = !self.open || self.seeded_from != Some(identity);
		self.open = true;
		if !must_seed {
			return;
		}

		self.values.clear();
		for field in self.schema.fields() {
			let value = initial
				.get(field.name())
				.cloned()
				.unwrap_or_else(|| field.seed_value());
			self.values.insert(field.name().to_string(), value);
		}
		self.touched.clear();
		self.errors.clear();
		self.seeded_from = Some(identity);
		tracing::debug!(fields = self.schema.len(), "form seeded");
	}

	/// Closes the form, discarding nothing until the next open
	pub fn close(&mut self) {
		self.open = false;
		// Force a reseed on the next open even with identical data
		self.seeded_from = None;
	}

	/// The current working value of a field
	pub fn value(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	/// Updates a working value
	///
	/// Fields the user has already blurred re-validate immediately so a
	/// correction clears its error without another blur.
	pub fn set_value(&mut self, name: &str, value: Value) -> FormResult<()> {
		if self.schema.field(name).is_none() {
			return Err(FormError::UnknownField(name.to_string()));
		}
		self.values.insert(name.to_string(), value);
		if self.touched.contains(name) {
			self.validate_field(name);
		}
		Ok(())
	}

	/// Marks a field as blurred and validates it
	pub fn blur(&mut self, name: &str) {
		if self.schema.field(name).is_none() {
			return;
		}
		self.touched.insert(name.to_string());
		self.validate_field(name);
	}

	/// The stored error for a field, regardless of display policy
	pub fn error(&self, name: &str) -> Option<&str> {
		self.errors.get(name).map(String::as_str)
	}

	/// The error to display: present only once the field was blurred
	/// (or a submit attempt touched everything)
	pub fn visible_error(&self, name: &str) -> Option<&str> {
		if self.touched.contains(name) {
			self.error(name)
		} else {
			None
		}
	}

	/// Validates every field; true when the form is clean
	pub fn validate_all(&mut self) -> bool {
		let names: Vec<String> = self.schema.fields().map(|f| f.name().to_string()).collect();
		for name in names {
			self.validate_field(&name);
		}
		self.errors.is_empty()
	}

	/// Attempts submission
	///
	/// Marks every field touched (making all errors visible), re-runs
	/// full validation, and returns the flat name-to-value payload only
	/// when no field is in error.
	pub fn submit(&mut self) -> FormResult<HashMap<String, Value>> {
		for field in self.schema.fields() {
			self.touched.insert(field.name().to_string());
		}
		if !self.validate_all() {
			return Err(FormError::Invalid {
				errors: self.errors.clone(),
			});
		}

		let payload = self
			.schema
			.fields()
			.map(|field| {
				let value = self
					.values
					.get(field.name())
					.cloned()
					.unwrap_or_else(|| field.seed_value());
				(field.name().to_string(), value)
			})
			.collect();
		Ok(payload)
	}

	/// Runs the handler with the payload only when the form is valid
	///
	/// The handler is invoked at most once per call and never for an
	/// invalid form.
	pub fn submit_with<T, F>(&mut self, handler: F) -> FormResult<T>
	where
		F: FnOnce(&HashMap<String, Value>) -> T,
	{
		let payload = self.submit()?;
		Ok(handler(&payload))
	}

	fn validate_field(&mut self, name: &str) {
		let Some(field) = self.schema.field(name) else {
			return;
		};
		match field.validate(self.values.get(name), &self.values) {
			Ok(()) => {
				self.errors.remove(name);
			}
			Err(error) => {
				self.errors.insert(name.to_string(), field_message(&error));
			}
		}
	}

	fn seed_identity(&self, initial: &HashMap<String, Value>) -> u64 {
		let mut hasher = DefaultHasher::new();
		self.schema.fingerprint().hash(&mut hasher);
		// Hash in sorted key order; HashMap iteration order is not stable
		let mut keys: Vec<&String> = initial.keys().collect();
		keys.sort();
		for key in keys {
			key.hash(&mut hasher);
			if let Some(value) = initial.get(key) {
				value.to_string().hash(&mut hasher);
			}
		}
		hasher.finish()
	}
}

fn field_message(error: &FieldError) -> String {
	error.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::{FieldKind, FieldSpec};
	use crate::schema::SchemaNode;
	use serde_json::json;

	fn schema() -> FormSchema {
		FormSchema::new(vec![
			SchemaNode::Field(FieldSpec::new("make", "Make", FieldKind::Text).required()),
			SchemaNode::Field(FieldSpec::new("email", "Email", FieldKind::Email)),
		])
	}

	#[test]
	fn test_error_hidden_until_blur() {
		let mut form = FormState::new(schema());
		form.open(&HashMap::new());

		form.set_value("email", json!("nope")).unwrap();
		// Not blurred yet: nothing to display
		assert_eq!(form.visible_error("email"), None);

		form.blur("email");
		assert_eq!(form.visible_error("email"), Some("Enter a valid email address"));
	}

	#[test]
	fn test_submit_marks_all_touched() {
		let mut form = FormState::new(schema());
		form.open(&HashMap::new());

		assert!(form.submit().is_err());
		// The required error became visible without any blur
		assert_eq!(form.visible_error("make"), Some("This field is required"));
	}

	#[test]
	fn test_correction_clears_error_after_blur() {
		let mut form = FormState::new(schema());
		form.open(&HashMap::new());
		form.blur("make");
		assert!(form.visible_error("make").is_some());

		form.set_value("make", json!("Honda")).unwrap();
		assert_eq!(form.visible_error("make"), None);
	}

	#[test]
	fn test_reopen_reseeds_but_rerender_keeps_edits() {
		let mut form = FormState::new(schema());
		let mut initial = HashMap::new();
		initial.insert("make".to_string(), json!("Toyota"));

		form.open(&initial);
		form.set_value("make", json!("Mazda")).unwrap();

		// Same open call again (a parent re-render): edits survive
		form.open(&initial);
		assert_eq!(form.value("make"), Some(&json!("Mazda")));

		// Close and reopen: back to the initial data
		form.close();
		form.open(&initial);
		assert_eq!(form.value("make"), Some(&json!("Toyota")));
	}

	#[test]
	fn test_changed_initial_data_reseeds_open_form() {
		let mut form = FormState::new(schema());
		let mut initial = HashMap::new();
		initial.insert("make".to_string(), json!("Toyota"));
		form.open(&initial);
		form.set_value("make", json!("Mazda")).unwrap();

		initial.insert("make".to_string(), json!("Honda"));
		form.open(&initial);
		assert_eq!(form.value("make"), Some(&json!("Honda")));
	}

	#[test]
	fn test_set_value_unknown_field() {
		let mut form = FormState::new(schema());
		form.open(&HashMap::new());
		assert!(matches!(
			form.set_value("vin", json!("x")),
			Err(FormError::UnknownField(_))
		));
	}
}
