//! The account profile page

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;
use rentkit_api::{ApiClient, require_token};
use rentkit_forms::{FieldKind, FieldSpec, FormSchema, FormState, SchemaNode};
use rentkit_notify::Notifier;
use rentkit_session::{Session, UserProfile};
use serde_json::{Value, json};

use crate::error::Result;

/// The declarative profile form: account fields plus grouped contact
/// details
pub fn profile_schema() -> FormSchema {
	// Loose on purpose; the backend normalizes numbers properly
	let phone_pattern = Regex::new(r"^[0-9+\-\s().]{7,20}$").expect("phone pattern is valid");

	FormSchema::new(vec![
		SchemaNode::Field(FieldSpec::new("username", "Username", FieldKind::Text).required()),
		SchemaNode::Field(FieldSpec::new("email", "Email", FieldKind::Email).required()),
		SchemaNode::Group {
			label: "Contact details".to_string(),
			fields: vec![
				FieldSpec::new("first_name", "First name", FieldKind::Text),
				FieldSpec::new("last_name", "Last name", FieldKind::Text),
				FieldSpec::new("phone", "Phone", FieldKind::Text).with_pattern(phone_pattern),
				FieldSpec::new("address", "Address", FieldKind::TextArea),
			],
		},
		SchemaNode::Field(FieldSpec::new(
			"license_number",
			"Driver's license number",
			FieldKind::Text,
		)),
	])
}

fn profile_initial(profile: &UserProfile) -> HashMap<String, Value> {
	let mut initial = HashMap::new();
	initial.insert("username".to_string(), json!(profile.username));
	initial.insert("email".to_string(), json!(profile.email));
	let optional = [
		("first_name", &profile.first_name),
		("last_name", &profile.last_name),
		("phone", &profile.phone),
		("address", &profile.address),
		("license_number", &profile.license_number),
	];
	for (key, value) in optional {
		if let Some(value) = value {
			initial.insert(key.to_string(), json!(value));
		}
	}
	initial
}

/// Viewing and editing the signed-in profile
pub struct ProfilePage {
	client: Arc<ApiClient>,
	session: Session,
	notifier: Notifier,
	/// The profile form state
	pub form: FormState,
}

impl ProfilePage {
	/// Creates the page over shared services
	pub fn new(client: Arc<ApiClient>, session: Session, notifier: Notifier) -> Self {
		Self {
			client,
			session,
			notifier,
			form: FormState::new(profile_schema()),
		}
	}

	/// Opens the form seeded from the session's cached profile
	pub async fn open(&mut self) {
		let initial = match self.session.user().await {
			Some(profile) => profile_initial(&profile),
			None => HashMap::new(),
		};
		self.form.open(&initial);
	}

	/// Validates, saves, and refreshes the cached session profile
	///
	/// An invalid form never reaches the network; a rejected save is
	/// surfaced as an error notification and the form stays open.
	pub async fn submit(&mut self) -> Result<UserProfile> {
		let payload = self.form.submit().map_err(|e| {
			crate::error::PageError::Validation(e.to_string())
		})?;
		let token = require_token(self.session.token().await)?;

		let body = Value::Object(payload.into_iter().collect());
		match self.client.update_profile(&token, &body).await {
			Ok(updated) => {
				if let Err(e) = self.session.refresh_user(updated.clone()).await {
					tracing::warn!(error = %e, "profile saved but session cache not updated");
				}
				self.notifier.success("Profile updated");
				Ok(updated)
			}
			Err(e) => {
				self.notifier.error(e.to_string());
				Err(e.into())
			}
		}
	}
}
