//! The customer-facing car browsing page

use std::sync::Arc;

use rentkit_api::{ApiClient, Car, CarList, CarQuery, Pagination};
use rentkit_tables::{ColumnKind, ColumnSpec, PageInfo, Record, TableQuery, ViewState};

use crate::guard::{FetchGuard, FetchTicket};
use crate::records::{page_info, to_records};

/// Column schema of the car grid
pub fn car_columns() -> Vec<ColumnSpec> {
	vec![
		ColumnSpec::new("make", "Make", ColumnKind::Text),
		ColumnSpec::new("model", "Model", ColumnKind::Text),
		ColumnSpec::new("year", "Year", ColumnKind::Number),
		ColumnSpec::new("category", "Category", ColumnKind::Text),
		ColumnSpec::new("daily_rate", "Daily Rate", ColumnKind::Currency),
		ColumnSpec::new("status", "Status", ColumnKind::Status),
	]
}

/// Browsing and filtering the vehicle inventory
///
/// The car listing is this page's primary load: a failure blocks the
/// view and offers retry instead of toasting. Server-side pagination is
/// reflected through [`PageInfo`]; the in-memory query engine refines
/// whatever page the server returned.
pub struct CarBrowsePage {
	client: Arc<ApiClient>,
	guard: FetchGuard,
	cars: Vec<Car>,
	pagination: Option<Pagination>,
	error: Option<String>,
	loading: bool,
	/// Search/filter/sort state over the loaded page
	pub query: TableQuery,
}

impl CarBrowsePage {
	/// Creates the page over a shared client
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self {
			client,
			guard: FetchGuard::new(),
			cars: Vec::new(),
			pagination: None,
			error: None,
			loading: false,
			query: TableQuery::new(car_columns()),
		}
	}

	/// Marks a fetch as started and returns its ticket
	///
	/// Split from [`finish_load`](Self::finish_load) so overlapping
	/// fetches stay testable; [`load`](Self::load) composes the two.
	pub fn begin_load(&mut self) -> FetchTicket {
		self.loading = true;
		self.error = None;
		self.guard.begin()
	}

	/// Applies a fetch outcome if its ticket is still the newest
	pub fn finish_load(&mut self, ticket: FetchTicket, result: rentkit_api::Result<CarList>) {
		if !self.guard.admit(ticket) {
			tracing::debug!("stale car listing dropped");
			return;
		}
		self.loading = false;
		match result {
			Ok(list) => {
				self.cars = list.cars;
				self.pagination = Some(list.pagination);
				self.error = None;
			}
			Err(e) => {
				self.error = Some(e.to_string());
			}
		}
	}

	/// Fetches one page of cars
	pub async fn load(&mut self, query: &CarQuery) {
		let ticket = self.begin_load();
		let result = self.client.list_cars(query).await;
		self.finish_load(ticket, result);
	}

	/// Re-runs the last failed load (the retry control)
	pub async fn retry(&mut self, query: &CarQuery) {
		self.load(query).await;
	}

	/// The loaded cars as typed resources
	pub fn cars(&self) -> &[Car] {
		&self.cars
	}

	/// The loaded cars as table records
	pub fn records(&self) -> Vec<Record> {
		to_records(&self.cars)
	}

	/// The rows after search, filters, and sort
	pub fn visible(&self) -> Vec<Record> {
		self.query.apply(&self.records())
	}

	/// Blocking page error, when the primary load failed
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// Server-side page descriptor
	pub fn page_info(&self) -> Option<PageInfo> {
		self.pagination.map(page_info)
	}

	/// Current view state (failed > loading > empty > ready)
	pub fn view_state(&self) -> ViewState {
		ViewState::resolve(self.error.as_deref(), self.loading, self.visible().len())
	}
}
