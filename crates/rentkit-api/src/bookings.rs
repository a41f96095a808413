//! Booking, payment, and review endpoints

use serde_json::json;

use crate::client::ApiClient;
use crate::error::Result;
use crate::resources::{
	Booking, BookingList, BookingRequest, BookingStatus, Payment, Review, ReviewRequest,
};
use crate::transport::Method;

impl ApiClient {
	/// Lists the caller's bookings (admins see all of them)
	pub async fn list_bookings(&self, token: &str, page: Option<u32>) -> Result<BookingList> {
		let mut query = Vec::new();
		if let Some(page) = page {
			query.push(("page", page.to_string()));
		}
		self.fetch(Method::Get, "bookings", &query, Some(token), None)
			.await
	}

	/// Creates a booking
	pub async fn create_booking(&self, token: &str, booking: &BookingRequest) -> Result<Booking> {
		self.fetch(Method::Post, "bookings", &[], Some(token), Some(json!(booking)))
			.await
	}

	/// Moves a booking to a new lifecycle status (admin)
	pub async fn update_booking_status(
		&self,
		token: &str,
		id: i64,
		status: BookingStatus,
	) -> Result<Booking> {
		self.fetch(
			Method::Put,
			"bookings",
			&[("id", id.to_string()), ("action", "status".to_string())],
			Some(token),
			Some(json!({"status": status})),
		)
		.await
	}

	/// Cancels a booking
	pub async fn cancel_booking(&self, token: &str, id: i64) -> Result<()> {
		self.fetch_unit(
			Method::Put,
			"bookings",
			&[("id", id.to_string()), ("action", "cancel".to_string())],
			Some(token),
			None,
		)
		.await
	}

	/// Lists the caller's payments
	pub async fn list_payments(&self, token: &str) -> Result<Vec<Payment>> {
		self.fetch(Method::Get, "payments", &[], Some(token), None)
			.await
	}

	/// Lists reviews for one car
	pub async fn list_reviews(&self, car_id: i64) -> Result<Vec<Review>> {
		self.fetch(
			Method::Get,
			"reviews",
			&[("car_id", car_id.to_string())],
			None,
			None,
		)
		.await
	}

	/// Leaves a review
	pub async fn create_review(&self, token: &str, review: &ReviewRequest) -> Result<Review> {
		self.fetch(Method::Post, "reviews", &[], Some(token), Some(json!(review)))
			.await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::client::ApiClientBuilder;
	use crate::transport::{ApiResponse, MockHttpTransport};
	use chrono::NaiveDate;
	use std::sync::Arc;

	fn client_with(transport: MockHttpTransport) -> ApiClient {
		ApiClientBuilder::new()
			.base_url("http://backend.test/api")
			.transport(Arc::new(transport))
			.build()
			.unwrap()
	}

	fn booking_json() -> serde_json::Value {
		json!({
			"id": 11,
			"user_id": 7,
			"car_id": 3,
			"start_date": "2025-08-10",
			"end_date": "2025-08-15",
			"status": "pending",
			"total_amount": 225.0,
		})
	}

	#[tokio::test]
	async fn test_create_booking_posts_payload() {
		let mut transport = MockHttpTransport::new();
		transport
			.expect_execute()
			.withf(|request| {
				request.method == Method::Post
					&& request.body.as_ref().is_some_and(|b| b["car_id"] == json!(3))
			})
			.return_once(|_| {
				Ok(ApiResponse {
					status: 200,
					body: serde_json::to_vec(&json!({"success": true, "data": booking_json()}))
						.unwrap(),
				})
			});
		let client = client_with(transport);

		let booking = client
			.create_booking(
				"tok",
				&BookingRequest {
					car_id: 3,
					start_date: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
					end_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
					pickup_location: None,
					dropoff_location: None,
					notes: None,
				},
			)
			.await
			.unwrap();

		assert_eq!(booking.id, 11);
		assert_eq!(booking.status, BookingStatus::Pending);
	}

	#[tokio::test]
	async fn test_cancel_booking_targets_action() {
		let mut transport = MockHttpTransport::new();
		transport
			.expect_execute()
			.withf(|request| {
				request.url.contains("id=11") && request.url.contains("action=cancel")
			})
			.return_once(|_| {
				Ok(ApiResponse {
					status: 200,
					body: serde_json::to_vec(&json!({"success": true})).unwrap(),
				})
			});
		let client = client_with(transport);

		client.cancel_booking("tok", 11).await.unwrap();
	}

	#[tokio::test]
	async fn test_list_bookings_tolerates_missing_pagination() {
		let mut transport = MockHttpTransport::new();
		transport.expect_execute().return_once(|_| {
			Ok(ApiResponse {
				status: 200,
				body: serde_json::to_vec(&json!({
					"success": true,
					"data": {"bookings": [booking_json()]},
				}))
				.unwrap(),
			})
		});
		let client = client_with(transport);

		let list = client.list_bookings("tok", None).await.unwrap();
		assert_eq!(list.bookings.len(), 1);
		assert!(list.pagination.is_none());
	}
}
