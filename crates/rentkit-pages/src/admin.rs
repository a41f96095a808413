//! The administrative console pages
//!
//! The dashboard keeps its data behind a shared lock so the periodic
//! refresh task can update it; the task is aborted on teardown so a
//! tick never fires against a dismounted view. The management tables
//! (users here, cars/bookings wired the same way) add selection, bulk
//! dispatch, and CSV export on top of the shared table engine.

use std::sync::Arc;
use std::time::Duration;

use rentkit_api::{
	AdminStats, ApiClient, RevenuePoint, UtilizationPoint, require_token,
};
use rentkit_notify::Notifier;
use rentkit_session::{Session, UserProfile};
use rentkit_tables::{ColumnKind, ColumnSpec, Record, Selection, TableQuery, ViewState};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::guard::{FetchGuard, FetchTicket};
use crate::records::to_records;

/// Everything the dashboard renders
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
	/// Headline numbers
	pub stats: Option<AdminStats>,
	/// Monthly revenue series
	pub revenue: Vec<RevenuePoint>,
	/// Per-car utilization series
	pub utilization: Vec<UtilizationPoint>,
	/// Blocking error of the last load
	pub error: Option<String>,
	/// Whether a load is in flight
	pub loading: bool,
}

/// The admin dashboard with periodic refresh
pub struct AdminDashboardPage {
	client: Arc<ApiClient>,
	session: Session,
	guard: Arc<FetchGuard>,
	data: Arc<RwLock<DashboardData>>,
	refresh: Option<JoinHandle<()>>,
}

impl AdminDashboardPage {
	/// Creates the page over shared services
	pub fn new(client: Arc<ApiClient>, session: Session) -> Self {
		Self {
			client,
			session,
			guard: Arc::new(FetchGuard::new()),
			data: Arc::new(RwLock::new(DashboardData::default())),
			refresh: None,
		}
	}

	/// A snapshot of the current dashboard data
	pub async fn data(&self) -> DashboardData {
		self.data.read().await.clone()
	}

	/// Fetches stats and both chart series once
	pub async fn load(&self) {
		Self::load_once(&self.client, &self.session, &self.guard, &self.data).await;
	}

	async fn load_once(
		client: &ApiClient,
		session: &Session,
		guard: &FetchGuard,
		data: &RwLock<DashboardData>,
	) {
		let ticket = guard.begin();
		data.write().await.loading = true;

		let result = Self::fetch_all(client, session).await;

		if !guard.admit(ticket) {
			tracing::debug!("stale dashboard load dropped");
			return;
		}
		let mut data = data.write().await;
		data.loading = false;
		match result {
			Ok((stats, revenue, utilization)) => {
				data.stats = Some(stats);
				data.revenue = revenue;
				data.utilization = utilization;
				data.error = None;
			}
			Err(e) => data.error = Some(e.to_string()),
		}
	}

	async fn fetch_all(
		client: &ApiClient,
		session: &Session,
	) -> rentkit_api::Result<(AdminStats, Vec<RevenuePoint>, Vec<UtilizationPoint>)> {
		let token = require_token(session.token().await)?;
		let stats = client.admin_stats(&token).await?;
		let revenue = client.admin_revenue_chart(&token).await?;
		let utilization = client.admin_car_utilization(&token).await?;
		Ok((stats, revenue, utilization))
	}

	/// Starts (or restarts) the periodic refresh task
	pub fn start_refresh(&mut self, period: Duration) {
		self.stop_refresh();
		let client = self.client.clone();
		let session = self.session.clone();
		let guard = self.guard.clone();
		let data = self.data.clone();
		self.refresh = Some(tokio::spawn(async move {
			let mut interval = tokio::time::interval(period);
			// The first tick completes immediately; the caller already
			// loaded, so skip it.
			interval.tick().await;
			loop {
				interval.tick().await;
				Self::load_once(&client, &session, &guard, &data).await;
			}
		}));
	}

	/// Stops the periodic refresh task
	pub fn stop_refresh(&mut self) {
		if let Some(task) = self.refresh.take() {
			task.abort();
		}
	}
}

impl Drop for AdminDashboardPage {
	fn drop(&mut self) {
		// A tick must never fire against a dismounted view
		self.stop_refresh();
	}
}

/// Fleet administration: the full inventory with status filters,
/// selection, and car CRUD dispatch
pub struct AdminCarsPage {
	client: Arc<ApiClient>,
	session: Session,
	notifier: Notifier,
	guard: FetchGuard,
	cars: Vec<rentkit_api::Car>,
	error: Option<String>,
	loading: bool,
	/// Search/filter/sort state over the loaded fleet
	pub query: TableQuery,
	/// Selected car ids
	pub selection: Selection,
}

impl AdminCarsPage {
	/// Creates the page over shared services
	pub fn new(client: Arc<ApiClient>, session: Session, notifier: Notifier) -> Self {
		Self {
			client,
			session,
			notifier,
			guard: FetchGuard::new(),
			cars: Vec::new(),
			error: None,
			loading: false,
			query: TableQuery::new(crate::cars::car_columns()),
			selection: Selection::new(),
		}
	}

	/// Fetches one page of the fleet (admins also see rented and
	/// maintenance cars)
	pub async fn load(&mut self, query: &rentkit_api::CarQuery) {
		self.loading = true;
		self.error = None;
		let ticket = self.guard.begin();
		let result = self.client.list_cars(query).await;
		if !self.guard.admit(ticket) {
			tracing::debug!("stale fleet listing dropped");
			return;
		}
		self.loading = false;
		match result {
			Ok(list) => {
				self.cars = list.cars;
				self.error = None;
			}
			Err(e) => self.error = Some(e.to_string()),
		}
	}

	/// Creates a car and surfaces the outcome as a notification
	pub async fn create(&mut self, car: &rentkit_api::CarRequest) -> Result<()> {
		let token = require_token(self.session.token().await)?;
		match self.client.create_car(&token, car).await {
			Ok(created) => {
				self.notifier
					.success(format!("{} {} added", created.make, created.model));
				self.cars.push(created);
				Ok(())
			}
			Err(e) => {
				self.notifier.error(e.to_string());
				Err(e.into())
			}
		}
	}

	/// Updates a car and surfaces the outcome as a notification
	pub async fn update(&mut self, id: i64, car: &rentkit_api::CarRequest) -> Result<()> {
		let token = require_token(self.session.token().await)?;
		match self.client.update_car(&token, id, car).await {
			Ok(updated) => {
				self.notifier.success(format!("Car #{id} updated"));
				if let Some(existing) = self.cars.iter_mut().find(|c| c.id == id) {
					*existing = updated;
				}
				Ok(())
			}
			Err(e) => {
				self.notifier.error(e.to_string());
				Err(e.into())
			}
		}
	}

	/// Deletes a car and surfaces the outcome as a notification
	pub async fn delete(&mut self, id: i64) -> Result<()> {
		let token = require_token(self.session.token().await)?;
		match self.client.delete_car(&token, id).await {
			Ok(()) => {
				self.notifier.success(format!("Car #{id} removed"));
				self.cars.retain(|c| c.id != id);
				Ok(())
			}
			Err(e) => {
				self.notifier.error(e.to_string());
				Err(e.into())
			}
		}
	}

	/// The loaded fleet
	pub fn cars(&self) -> &[rentkit_api::Car] {
		&self.cars
	}

	/// The loaded fleet as table records
	pub fn records(&self) -> Vec<Record> {
		to_records(&self.cars)
	}

	/// The rows after search, filters, and sort
	pub fn visible(&self) -> Vec<Record> {
		self.query.apply(&self.records())
	}

	/// Toggles select-all against the visible rows
	pub fn toggle_select_all(&mut self) {
		let visible = self.query.visible_ids(&self.records());
		self.selection.toggle_all(&visible);
	}

	/// Blocking page error, when the primary load failed
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// Current view state (failed > loading > empty > ready)
	pub fn view_state(&self) -> ViewState {
		ViewState::resolve(self.error.as_deref(), self.loading, self.visible().len())
	}

	/// Writes the visible rows as CSV
	pub fn export_csv<W: std::io::Write>(&self, writer: W) -> Result<()> {
		rentkit_tables::export::write_csv(writer, self.query.columns(), &self.visible())?;
		Ok(())
	}
}

/// Column schema of the user management grid
pub fn user_columns() -> Vec<ColumnSpec> {
	vec![
		ColumnSpec::new("id", "ID", ColumnKind::Number),
		ColumnSpec::new("username", "Username", ColumnKind::Text),
		ColumnSpec::new("email", "Email", ColumnKind::Text),
		ColumnSpec::new("role", "Role", ColumnKind::Status),
	]
}

/// User administration: listing, selection, bulk operations, export
pub struct AdminUsersPage {
	client: Arc<ApiClient>,
	session: Session,
	notifier: Notifier,
	guard: FetchGuard,
	users: Vec<UserProfile>,
	error: Option<String>,
	loading: bool,
	/// Search/filter/sort state over the loaded accounts
	pub query: TableQuery,
	/// Selected account ids
	pub selection: Selection,
}

impl AdminUsersPage {
	/// Creates the page over shared services
	pub fn new(client: Arc<ApiClient>, session: Session, notifier: Notifier) -> Self {
		Self {
			client,
			session,
			notifier,
			guard: FetchGuard::new(),
			users: Vec::new(),
			error: None,
			loading: false,
			query: TableQuery::new(user_columns()),
			selection: Selection::new(),
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
		result: rentkit_api::Result<Vec<UserProfile>>,
	) {
		if !self.guard.admit(ticket) {
			tracing::debug!("stale user listing dropped");
			return;
		}
		self.loading = false;
		match result {
			Ok(users) => {
				self.users = users;
				self.error = None;
			}
			Err(e) => self.error = Some(e.to_string()),
		}
	}

	/// Fetches every account
	pub async fn load(&mut self) {
		let ticket = self.begin_load();
		let result = match require_token(self.session.token().await) {
			Ok(token) => self.client.admin_users(&token).await,
			Err(e) => Err(e),
		};
		self.finish_load(ticket, result);
	}

	/// Dispatches a bulk operation against the selected accounts
	///
	/// The selection clears as soon as the action fires, success or
	/// not. Outcomes surface as notifications; a successful operation
	/// also reloads the listing.
	pub async fn bulk(&mut self, operation: &str) -> Result<()> {
		let ids: Vec<i64> = self
			.selection
			.ids()
			.iter()
			.filter_map(|id| id.parse().ok())
			.collect();
		if ids.is_empty() {
			return Ok(());
		}
		self.selection.clear();

		let token = require_token(self.session.token().await)?;
		match self.client.admin_bulk(&token, operation, &ids).await {
			Ok(()) => {
				self.notifier
					.success(format!("Applied \"{operation}\" to {} account(s)", ids.len()));
				self.load().await;
				Ok(())
			}
			Err(e) => {
				self.notifier.error(e.to_string());
				Err(e.into())
			}
		}
	}

	/// The loaded accounts
	pub fn users(&self) -> &[UserProfile] {
		&self.users
	}

	/// The loaded accounts as table records
	pub fn records(&self) -> Vec<Record> {
		to_records(&self.users)
	}

	/// The rows after search, filters, and sort
	pub fn visible(&self) -> Vec<Record> {
		self.query.apply(&self.records())
	}

	/// Toggles select-all against the visible rows
	pub fn toggle_select_all(&mut self) {
		let visible = self.query.visible_ids(&self.records());
		self.selection.toggle_all(&visible);
	}

	/// Blocking page error, when the primary load failed
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// Current view state (failed > loading > empty > ready)
	pub fn view_state(&self) -> ViewState {
		ViewState::resolve(self.error.as_deref(), self.loading, self.visible().len())
	}

	/// Writes the visible rows as CSV
	pub fn export_csv<W: std::io::Write>(&self, writer: W) -> Result<()> {
		rentkit_tables::export::write_csv(writer, self.query.columns(), &self.visible())?;
		Ok(())
	}
}
