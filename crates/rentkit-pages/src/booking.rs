//! Booking flows and the rental price arithmetic

use std::sync::Arc;

use chrono::NaiveDate;
use rentkit_api::{ApiClient, Booking, BookingRequest, require_token};
use rentkit_notify::Notifier;
use rentkit_session::Session;
use rentkit_tables::{ColumnKind, ColumnSpec, Record, RowAction, TableQuery, ViewState};

use crate::error::{PageError, Result};
use crate::guard::{FetchGuard, FetchTicket};
use crate::records::to_records;

/// Number of charged rental days between pickup and return
///
/// The difference is counted in calendar days: picking up on the 10th
/// and returning on the 15th charges 5 days. A return date on or before
/// pickup is a validation failure that never reaches the network.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rentkit_pages::rental_days;
///
/// let pickup = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
/// let ret = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// assert_eq!(rental_days(pickup, ret).unwrap(), 5);
/// ```
pub fn rental_days(pickup: NaiveDate, ret: NaiveDate) -> Result<i64> {
	let days = (ret - pickup).num_days();
	if days < 1 {
		return Err(PageError::Validation(
			"Return date must be after pickup date".to_string(),
		));
	}
	Ok(days)
}

/// A priced rental period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
	/// Charged days
	pub days: i64,
	/// `daily_rate` times `days`
	pub total: f64,
}

/// Prices a rental period at the car's daily rate
pub fn quote(daily_rate: f64, pickup: NaiveDate, ret: NaiveDate) -> Result<Quote> {
	let days = rental_days(pickup, ret)?;
	Ok(Quote {
		days,
		total: daily_rate * days as f64,
	})
}

/// Column schema of the bookings grid
pub fn booking_columns() -> Vec<ColumnSpec> {
	vec![
		ColumnSpec::new("id", "ID", ColumnKind::Number),
		ColumnSpec::new("car_id", "Car", ColumnKind::Number),
		ColumnSpec::new("start_date", "Pickup", ColumnKind::Date),
		ColumnSpec::new("end_date", "Return", ColumnKind::Date),
		ColumnSpec::new("total_amount", "Total", ColumnKind::Currency),
		ColumnSpec::new("status", "Status", ColumnKind::Status),
	]
}

/// The "cancel" row action, visible only while cancellation is allowed
pub fn cancel_action() -> RowAction {
	RowAction::new("cancel", "Cancel").visible_when(|row| {
		matches!(
			row.get("status").and_then(|v| v.as_str()),
			Some("pending") | Some("confirmed")
		)
	})
}

/// The customer's bookings page
///
/// Listing bookings is the primary load (blocking error with retry);
/// creating and cancelling are secondary mutations surfaced through the
/// notifier without blocking the view.
pub struct BookingsPage {
	client: Arc<ApiClient>,
	session: Session,
	notifier: Notifier,
	guard: FetchGuard,
	bookings: Vec<Booking>,
	error: Option<String>,
	loading: bool,
	/// Search/filter/sort state over the loaded bookings
	pub query: TableQuery,
}

impl BookingsPage {
	/// Creates the page over shared services
	pub fn new(client: Arc<ApiClient>, session: Session, notifier: Notifier) -> Self {
		Self {
			client,
			session,
			notifier,
			guard: FetchGuard::new(),
			bookings: Vec::new(),
			error: None,
			loading: false,
			query: TableQuery::new(booking_columns()),
		}
	}

	/// Marks a fetch as started and returns its ticket
	pub fn begin_load(&mut self) -> FetchTicket {
		self.loading = true;
		self.error = None;
		self.guard.begin()
	}

	/// Applies a fetch outcome if its ticket is still the newest
	pub fn finish_load(
		&mut self,
		ticket: FetchTicket,
		result: rentkit_api::Result<Vec<Booking>>,
	) {
		if !self.guard.admit(ticket) {
			tracing::debug!("stale booking listing dropped");
			return;
		}
		self.loading = false;
		match result {
			Ok(bookings) => {
				self.bookings = bookings;
				self.error = None;
			}
			Err(e) => self.error = Some(e.to_string()),
		}
	}

	/// Fetches the caller's bookings
	pub async fn load(&mut self) {
		let ticket = self.begin_load();
		let result = match require_token(self.session.token().await) {
			Ok(token) => self
				.client
				.list_bookings(&token, None)
				.await
				.map(|list| list.bookings),
			Err(e) => Err(e),
		};
		self.finish_load(ticket, result);
	}

	/// Creates a booking and surfaces the outcome as a notification
	pub async fn create(&mut self, request: &BookingRequest) -> Result<Booking> {
		let token = require_token(self.session.token().await)?;
		match self.client.create_booking(&token, request).await {
			Ok(booking) => {
				self.notifier
					.success(format!("Booking #{} created", booking.id));
				self.bookings.push(booking.clone());
				Ok(booking)
			}
			Err(e) => {
				self.notifier.error(e.to_string());
				Err(e.into())
			}
		}
	}

	/// Moves a booking to a new lifecycle status (admin console)
	pub async fn update_status(
		&mut self,
		id: i64,
		status: rentkit_api::BookingStatus,
	) -> Result<()> {
		let token = require_token(self.session.token().await)?;
		match self.client.update_booking_status(&token, id, status).await {
			Ok(updated) => {
				self.notifier.success(format!("Booking #{id} updated"));
				if let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) {
					*booking = updated;
				}
				Ok(())
			}
			Err(e) => {
				self.notifier.error(e.to_string());
				Err(e.into())
			}
		}
	}

	/// Cancels a booking and surfaces the outcome as a notification
	pub async fn cancel(&mut self, id: i64) -> Result<()> {
		let token = require_token(self.session.token().await)?;
		match self.client.cancel_booking(&token, id).await {
			Ok(()) => {
				self.notifier.success(format!("Booking #{id} cancelled"));
				if let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) {
					booking.status = rentkit_api::BookingStatus::Cancelled;
				}
				Ok(())
			}
			Err(e) => {
				self.notifier.error(e.to_string());
				Err(e.into())
			}
		}
	}

	/// Builds the create payload from a validated quote
	pub fn build_request(
		car_id: i64,
		pickup: NaiveDate,
		ret: NaiveDate,
		pickup_location: Option<String>,
		dropoff_location: Option<String>,
		notes: Option<String>,
	) -> Result<BookingRequest> {
		// Reject impossible periods before any network traffic
		rental_days(pickup, ret)?;
		Ok(BookingRequest {
			car_id,
			start_date: pickup,
			end_date: ret,
			pickup_location,
			dropoff_location,
			notes,
		})
	}

	/// The loaded bookings
	pub fn bookings(&self) -> &[Booking] {
		&self.bookings
	}

	/// The loaded bookings as table records
	pub fn records(&self) -> Vec<Record> {
		to_records(&self.bookings)
	}

	/// The rows after search, filters, and sort
	pub fn visible(&self) -> Vec<Record> {
		self.query.apply(&self.records())
	}

	/// Blocking page error, when the primary load failed
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// Current view state (failed > loading > empty > ready)
	pub fn view_state(&self) -> ViewState {
		ViewState::resolve(self.error.as_deref(), self.loading, self.visible().len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[test]
	fn test_rental_days_counts_calendar_days() {
		assert_eq!(
			rental_days(date(2025, 8, 10), date(2025, 8, 15)).unwrap(),
			5
		);
	}

	#[test]
	fn test_quote_multiplies_rate_by_days() {
		let quote = quote(45.0, date(2025, 8, 10), date(2025, 8, 15)).unwrap();
		assert_eq!(quote.days, 5);
		assert_eq!(quote.total, 225.0);
	}

	#[test]
	fn test_same_day_return_rejected() {
		let result = rental_days(date(2025, 8, 10), date(2025, 8, 10));
		assert!(matches!(result, Err(PageError::Validation(_))));
	}

	#[test]
	fn test_return_before_pickup_rejected() {
		assert!(rental_days(date(2025, 8, 10), date(2025, 8, 9)).is_err());
	}

	#[test]
	fn test_cancel_action_visibility() {
		let action = cancel_action();
		let pending = json!({"status": "pending"}).as_object().cloned().unwrap();
		let active = json!({"status": "active"}).as_object().cloned().unwrap();
		assert!(action.is_visible(&pending));
		assert!(!action.is_visible(&active));
	}

	#[test]
	fn test_build_request_validates_period() {
		let result = BookingsPage::build_request(
			3,
			date(2025, 8, 15),
			date(2025, 8, 10),
			None,
			None,
			None,
		);
		assert!(result.is_err());
	}
}
