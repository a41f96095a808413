//! Authentication and profile endpoints

use rentkit_session::UserProfile;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::Result;
use crate::resources::{LoginResponse, RegisterRequest};
use crate::transport::Method;

impl ApiClient {
	/// Signs in and returns the bearer token plus profile
	pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
		self.fetch(
			Method::Post,
			"auth",
			&[("action", "login".to_string())],
			None,
			Some(json!({"username": username, "password": password})),
		)
		.await
	}

	/// Registers a new customer account
	pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile> {
		self.fetch(
			Method::Post,
			"auth",
			&[("action", "register".to_string())],
			None,
			Some(json!(request)),
		)
		.await
	}

	/// Fetches the signed-in profile
	pub async fn profile(&self, token: &str) -> Result<UserProfile> {
		self.fetch(Method::Get, "auth", &[], Some(token), None).await
	}

	/// Updates the signed-in profile and returns the stored version
	pub async fn update_profile(
		&self,
		token: &str,
		fields: &serde_json::Value,
	) -> Result<UserProfile> {
		self.fetch(Method::Put, "auth", &[], Some(token), Some(fields.clone()))
			.await
	}
}
