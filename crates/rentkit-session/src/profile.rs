//! The authenticated user's profile as held client-side

use serde::{Deserialize, Serialize};

/// Access role attached to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	/// Regular renting customer
	Customer,
	/// Administrative console access
	Admin,
}

/// Profile snapshot of the signed-in user
///
/// This mirrors what the auth endpoint returns; it is persisted as JSON
/// under the `user` storage key and treated as immutable between
/// fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
	/// Account id
	pub id: i64,
	/// Login name
	pub username: String,
	/// Contact email
	pub email: String,
	/// Access role
	pub role: Role,
	/// Given name
	#[serde(default)]
	pub first_name: Option<String>,
	/// Family name
	#[serde(default)]
	pub last_name: Option<String>,
	/// Contact phone
	#[serde(default)]
	pub phone: Option<String>,
	/// Postal address
	#[serde(default)]
	pub address: Option<String>,
	/// Driver's license number
	#[serde(default)]
	pub license_number: Option<String>,
}

impl UserProfile {
	/// Whether this profile carries administrative access
	pub fn is_admin(&self) -> bool {
		self.role == Role::Admin
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_profile_roundtrip_with_optional_fields_absent() {
		let raw = json!({
			"id": 4,
			"username": "alice",
			"email": "alice@example.com",
			"role": "customer",
		});

		let profile: UserProfile = serde_json::from_value(raw).unwrap();
		assert!(!profile.is_admin());
		assert_eq!(profile.phone, None);

		let back = serde_json::to_value(&profile).unwrap();
		assert_eq!(back["role"], json!("customer"));
	}

	#[test]
	fn test_admin_role() {
		let raw = json!({
			"id": 1,
			"username": "root",
			"email": "root@example.com",
			"role": "admin",
		});
		let profile: UserProfile = serde_json::from_value(raw).unwrap();
		assert!(profile.is_admin());
	}
}
