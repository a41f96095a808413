//! Resource models mirrored from the backend API
//!
//! These shapes are owned by the server; the client treats each fetch
//! as an immutable snapshot held for the lifetime of a screen. The
//! profile type lives in `rentkit-session` because it doubles as the
//! persisted identity.

use chrono::NaiveDate;
use rentkit_session::UserProfile;
use serde::{Deserialize, Serialize};

/// Fleet status of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
	/// Bookable
	Available,
	/// Currently out with a customer
	Rented,
	/// Pulled from the fleet for service
	Maintenance,
}

/// One rentable vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
	/// Vehicle id
	pub id: i64,
	/// Manufacturer
	pub make: String,
	/// Model name
	pub model: String,
	/// Model year
	pub year: i32,
	/// Category reference
	pub category_id: i64,
	/// Resolved category name, when the endpoint joins it in
	#[serde(default)]
	pub category: Option<String>,
	/// Price per rental day
	pub daily_rate: f64,
	/// Fleet status
	pub status: CarStatus,
	/// Feature tags (automatic, GPS, ...)
	#[serde(default)]
	pub features: Vec<String>,
	/// Image reference
	#[serde(default)]
	pub image_url: Option<String>,
	/// Fuel type, used by the browse filter
	#[serde(default)]
	pub fuel_type: Option<String>,
}

/// A car category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	/// Category id
	pub id: i64,
	/// Display name
	pub name: String,
}

/// Query parameters of the car listing endpoint
#[derive(Debug, Clone, Default)]
pub struct CarQuery {
	/// Free-text search
	pub search: Option<String>,
	/// Category filter
	pub category: Option<i64>,
	/// Minimum daily rate
	pub min_price: Option<f64>,
	/// Maximum daily rate
	pub max_price: Option<f64>,
	/// Fuel type filter
	pub fuel_type: Option<String>,
	/// Fleet status filter
	pub status: Option<CarStatus>,
	/// 1-based page
	pub page: Option<u32>,
	/// Page size
	pub limit: Option<u32>,
}

impl CarQuery {
	pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::new();
		if let Some(search) = &self.search {
			pairs.push(("search", search.clone()));
		}
		if let Some(category) = self.category {
			pairs.push(("category", category.to_string()));
		}
		if let Some(min_price) = self.min_price {
			pairs.push(("min_price", min_price.to_string()));
		}
		if let Some(max_price) = self.max_price {
			pairs.push(("max_price", max_price.to_string()));
		}
		if let Some(fuel_type) = &self.fuel_type {
			pairs.push(("fuel_type", fuel_type.clone()));
		}
		if let Some(status) = self.status {
			let status = match status {
				CarStatus::Available => "available",
				CarStatus::Rented => "rented",
				CarStatus::Maintenance => "maintenance",
			};
			pairs.push(("status", status.to_string()));
		}
		if let Some(page) = self.page {
			pairs.push(("page", page.to_string()));
		}
		if let Some(limit) = self.limit {
			pairs.push(("limit", limit.to_string()));
		}
		pairs
	}
}

/// Payload for creating or updating a car (admin)
#[derive(Debug, Clone, Serialize)]
pub struct CarRequest {
	/// Manufacturer
	pub make: String,
	/// Model name
	pub model: String,
	/// Model year
	pub year: i32,
	/// Category reference
	pub category_id: i64,
	/// Price per rental day
	pub daily_rate: f64,
	/// Fleet status
	pub status: CarStatus,
	/// Feature tags
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub features: Vec<String>,
	/// Image reference
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
	/// Fuel type
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fuel_type: Option<String>,
}

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
	/// Created, awaiting confirmation
	Pending,
	/// Confirmed by an administrator
	Confirmed,
	/// Car picked up
	Active,
	/// Car returned
	Completed,
	/// Cancelled before pickup
	Cancelled,
}

/// One rental booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
	/// Booking id
	pub id: i64,
	/// Booking owner
	pub user_id: i64,
	/// Booked car
	pub car_id: i64,
	/// First rental day
	pub start_date: NaiveDate,
	/// Return day
	pub end_date: NaiveDate,
	/// Lifecycle status
	pub status: BookingStatus,
	/// Total charged amount
	pub total_amount: f64,
	/// Where the car is collected
	#[serde(default)]
	pub pickup_location: Option<String>,
	/// Where the car is returned
	#[serde(default)]
	pub dropoff_location: Option<String>,
	/// Free-form customer notes
	#[serde(default)]
	pub notes: Option<String>,
}

/// Payload for creating a booking
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
	/// Car to book
	pub car_id: i64,
	/// First rental day
	pub start_date: NaiveDate,
	/// Return day
	pub end_date: NaiveDate,
	/// Where the car is collected
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pickup_location: Option<String>,
	/// Where the car is returned
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dropoff_location: Option<String>,
	/// Free-form customer notes
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

/// Settlement status of a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
	/// Awaiting settlement
	Pending,
	/// Settled
	Completed,
	/// Settlement failed
	Failed,
	/// Returned to the customer
	Refunded,
}

/// One payment against a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
	/// Payment id
	pub id: i64,
	/// The booking paid for
	pub booking_id: i64,
	/// Paid amount
	pub amount: f64,
	/// Payment method label
	pub method: String,
	/// Settlement status
	pub status: PaymentStatus,
	/// Processor transaction reference
	#[serde(default)]
	pub transaction_id: Option<String>,
}

/// One customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
	/// Review id
	pub id: i64,
	/// Reviewed car
	pub car_id: i64,
	/// Originating booking, when linked
	#[serde(default)]
	pub booking_id: Option<i64>,
	/// Star rating, 1 through 5
	pub rating: u8,
	/// Review text
	#[serde(default)]
	pub comment: Option<String>,
}

/// Payload for leaving a review
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRequest {
	/// Reviewed car
	pub car_id: i64,
	/// Originating booking
	#[serde(skip_serializing_if = "Option::is_none")]
	pub booking_id: Option<i64>,
	/// Star rating, 1 through 5
	pub rating: u8,
	/// Review text
	#[serde(skip_serializing_if = "Option::is_none")]
	pub comment: Option<String>,
}

/// Payload for account registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
	/// Login name
	pub username: String,
	/// Contact email
	pub email: String,
	/// Plain-text password, transported once over TLS
	pub password: String,
	/// Given name
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	/// Family name
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	/// Contact phone
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
}

/// Successful login payload: the credential plus the profile
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
	/// Bearer credential for subsequent calls
	pub token: String,
	/// The signed-in profile
	pub user: UserProfile,
}

/// Payload for creating or updating an account (admin)
#[derive(Debug, Clone, Serialize)]
pub struct UserRequest {
	/// Login name
	pub username: String,
	/// Contact email
	pub email: String,
	/// Access role, `customer` or `admin`
	pub role: String,
	/// New password; omitted keeps the current one
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
}

/// Server-side pagination descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
	/// 1-based page
	pub current_page: u32,
	/// Rows per page
	pub per_page: u32,
	/// Total rows
	pub total: u64,
	/// Total pages
	pub total_pages: u32,
}

/// `data` payload of the car listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CarList {
	/// The requested page of cars
	pub cars: Vec<Car>,
	/// Page descriptor
	pub pagination: Pagination,
}

/// `data` payload of the booking listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct BookingList {
	/// The requested page of bookings
	pub bookings: Vec<Booking>,
	/// Page descriptor; absent when the endpoint returns everything
	#[serde(default)]
	pub pagination: Option<Pagination>,
}

/// Headline numbers for the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AdminStats {
	/// Fleet size
	pub total_cars: u64,
	/// Currently bookable cars
	pub available_cars: u64,
	/// All bookings ever
	pub total_bookings: u64,
	/// Bookings currently active
	pub active_bookings: u64,
	/// Registered accounts
	pub total_users: u64,
	/// Lifetime revenue
	pub total_revenue: f64,
}

/// One point of the revenue chart
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevenuePoint {
	/// Period label (e.g. `2025-07`)
	pub label: String,
	/// Revenue in that period
	pub revenue: f64,
}

/// One bar of the car utilization chart
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UtilizationPoint {
	/// Car label
	pub car: String,
	/// Share of days rented, 0 through 100
	pub utilization: f64,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_car_deserializes_with_defaults() {
		let car: Car = serde_json::from_value(json!({
			"id": 3,
			"make": "Toyota",
			"model": "Corolla",
			"year": 2023,
			"category_id": 1,
			"daily_rate": 45.0,
			"status": "available",
		}))
		.unwrap();
		assert!(car.features.is_empty());
		assert_eq!(car.status, CarStatus::Available);
	}

	#[test]
	fn test_booking_status_wire_names() {
		let status: BookingStatus = serde_json::from_value(json!("cancelled")).unwrap();
		assert_eq!(status, BookingStatus::Cancelled);
		assert_eq!(serde_json::to_value(BookingStatus::Active).unwrap(), json!("active"));
	}

	#[test]
	fn test_car_query_pairs_skip_unset() {
		let query = CarQuery {
			search: Some("corolla".to_string()),
			min_price: Some(20.0),
			status: Some(CarStatus::Available),
			..CarQuery::default()
		};
		let pairs = query.to_pairs();
		assert_eq!(
			pairs,
			vec![
				("search", "corolla".to_string()),
				("min_price", "20".to_string()),
				("status", "available".to_string()),
			]
		);
	}

	#[test]
	fn test_booking_request_omits_empty_options() {
		let request = BookingRequest {
			car_id: 3,
			start_date: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
			end_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
			pickup_location: None,
			dropoff_location: None,
			notes: None,
		};
		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(
			value,
			json!({"car_id": 3, "start_date": "2025-08-10", "end_date": "2025-08-15"})
		);
	}
}
