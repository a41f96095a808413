//! Administrative console endpoints
//!
//! The admin surface hangs off a single script-style endpoint with an
//! `action` selector, so every method here targets `admin.php`.

use rentkit_session::UserProfile;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::Result;
use crate::resources::{AdminStats, RevenuePoint, UserRequest, UtilizationPoint};
use crate::transport::Method;

const ADMIN_PATH: &str = "admin.php";

fn action(name: &str) -> Vec<(&'static str, String)> {
	vec![("action", name.to_string())]
}

impl ApiClient {
	/// Lists every account (admin)
	pub async fn admin_users(&self, token: &str) -> Result<Vec<UserProfile>> {
		self.fetch(Method::Get, ADMIN_PATH, &action("users"), Some(token), None)
			.await
	}

	/// Creates an account (admin)
	pub async fn admin_create_user(
		&self,
		token: &str,
		user: &UserRequest,
	) -> Result<UserProfile> {
		self.fetch(
			Method::Post,
			ADMIN_PATH,
			&action("users"),
			Some(token),
			Some(json!(user)),
		)
		.await
	}

	/// Updates an account (admin)
	pub async fn admin_update_user(
		&self,
		token: &str,
		id: i64,
		user: &UserRequest,
	) -> Result<UserProfile> {
		self.fetch(
			Method::Put,
			ADMIN_PATH,
			&[("action", "users".to_string()), ("id", id.to_string())],
			Some(token),
			Some(json!(user)),
		)
		.await
	}

	/// Deletes an account (admin)
	pub async fn admin_delete_user(&self, token: &str, id: i64) -> Result<()> {
		self.fetch_unit(
			Method::Delete,
			ADMIN_PATH,
			&[("action", "users".to_string()), ("id", id.to_string())],
			Some(token),
			None,
		)
		.await
	}

	/// Headline dashboard numbers (admin)
	pub async fn admin_stats(&self, token: &str) -> Result<AdminStats> {
		self.fetch(Method::Get, ADMIN_PATH, &action("stats"), Some(token), None)
			.await
	}

	/// Monthly revenue series (admin)
	pub async fn admin_revenue_chart(&self, token: &str) -> Result<Vec<RevenuePoint>> {
		self.fetch(
			Method::Get,
			ADMIN_PATH,
			&action("revenue-chart"),
			Some(token),
			None,
		)
		.await
	}

	/// Per-car utilization series (admin)
	pub async fn admin_car_utilization(&self, token: &str) -> Result<Vec<UtilizationPoint>> {
		self.fetch(
			Method::Get,
			ADMIN_PATH,
			&action("car-utilization"),
			Some(token),
			None,
		)
		.await
	}

	/// Applies one operation to a selected subset of records (admin)
	pub async fn admin_bulk(&self, token: &str, operation: &str, ids: &[i64]) -> Result<()> {
		self.fetch_unit(
			Method::Post,
			ADMIN_PATH,
			&action("bulk"),
			Some(token),
			Some(json!({"operation": operation, "ids": ids})),
		)
		.await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::client::ApiClientBuilder;
	use crate::transport::{ApiResponse, MockHttpTransport};
	use std::sync::Arc;

	fn client_with(transport: MockHttpTransport) -> ApiClient {
		ApiClientBuilder::new()
			.base_url("http://backend.test/api")
			.transport(Arc::new(transport))
			.build()
			.unwrap()
	}

	#[tokio::test]
	async fn test_stats_target_and_decode() {
		let mut transport = MockHttpTransport::new();
		transport
			.expect_execute()
			.withf(|request| request.url.ends_with("/admin.php?action=stats"))
			.return_once(|_| {
				Ok(ApiResponse {
					status: 200,
					body: serde_json::to_vec(&json!({
						"success": true,
						"data": {
							"total_cars": 24,
							"available_cars": 18,
							"total_bookings": 310,
							"active_bookings": 9,
							"total_users": 122,
							"total_revenue": 45870.5,
						},
					}))
					.unwrap(),
				})
			});
		let client = client_with(transport);

		let stats = client.admin_stats("tok").await.unwrap();
		assert_eq!(stats.total_cars, 24);
		assert_eq!(stats.total_revenue, 45870.5);
	}

	#[tokio::test]
	async fn test_bulk_sends_operation_and_ids() {
		let mut transport = MockHttpTransport::new();
		transport
			.expect_execute()
			.withf(|request| {
				request.url.contains("action=bulk")
					&& request
						.body
						.as_ref()
						.is_some_and(|b| b["ids"] == json!([1, 2]) && b["operation"] == "delete")
			})
			.return_once(|_| {
				Ok(ApiResponse {
					status: 200,
					body: serde_json::to_vec(&json!({"success": true, "message": "2 deleted"}))
						.unwrap(),
				})
			});
		let client = client_with(transport);

		client.admin_bulk("tok", "delete", &[1, 2]).await.unwrap();
	}
}
