//! # Rentkit
//!
//! The client-side core of a car rental management frontend: browsing
//! and filtering the vehicle inventory, creating and managing bookings,
//! session/authentication state, and the administrative console, all
//! against an external REST backend that owns the business rules.
//!
//! There is no rendering here. Each subsystem owns the data and state
//! machinery a UI shell binds to:
//!
//! - [`tables`] - the generic list-view engine: typed column schemas,
//!   search/filter/sort pipeline, selection, pagination descriptors,
//!   CSV export
//! - [`forms`] - declarative field schemas with field-level and
//!   submit-time validation and blur-aware error display
//! - [`notify`] - the process-wide notification queue with cancellable
//!   auto-expiry
//! - [`session`] - the injected session service persisting the signed-in
//!   identity and bearer token
//! - [`api`] - the typed REST client over the backend's response
//!   envelope, with its transport seam for tests
//! - [`pages`] - page view-models composing everything above, including
//!   the stale-fetch guard and the admin dashboard's periodic refresh
//!
//! ## Feature Flags
//!
//! Every subsystem sits behind a flag of the same name; `full` (the
//! default) enables all of them, and `export` adds CSV export of table
//! rows.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rentkit::api::{ApiClientBuilder, ApiSettings};
//! use rentkit::notify::Notifier;
//! use rentkit::pages::CarBrowsePage;
//! use rentkit::session::{MemoryStorage, Session};
//!
//! # async fn demo() {
//! let client = Arc::new(
//!     ApiClientBuilder::new()
//!         .settings(ApiSettings::from_env())
//!         .build()
//!         .expect("valid configuration"),
//! );
//! let session = Session::new(Arc::new(MemoryStorage::new()));
//! session.restore().await.ok();
//! let notifier = Notifier::new();
//!
//! let mut browse = CarBrowsePage::new(client);
//! browse.load(&Default::default()).await;
//! # }
//! ```

/// Data table query engine
#[cfg(feature = "tables")]
pub mod tables {
	pub use rentkit_tables::*;
}

/// Declarative forms and validation
#[cfg(feature = "forms")]
pub mod forms {
	pub use rentkit_forms::*;
}

/// Notification queue
#[cfg(feature = "notify")]
pub mod notify {
	pub use rentkit_notify::*;
}

/// Session state and storage backends
#[cfg(feature = "session")]
pub mod session {
	pub use rentkit_session::*;
}

/// REST API client
#[cfg(feature = "api")]
pub mod api {
	pub use rentkit_api::*;
}

/// Page view-models
#[cfg(feature = "pages")]
pub mod pages {
	pub use rentkit_pages::*;
}

/// Commonly used types in one import
pub mod prelude {
	#[cfg(feature = "api")]
	pub use crate::api::{ApiClient, ApiClientBuilder, ApiError, ApiSettings};
	#[cfg(feature = "forms")]
	pub use crate::forms::{FieldKind, FieldSpec, FormSchema, FormState, SchemaNode};
	#[cfg(feature = "notify")]
	pub use crate::notify::{Level, Notifier};
	#[cfg(feature = "pages")]
	pub use crate::pages::{
		Access, AdminCarsPage, AdminDashboardPage, AdminUsersPage, BookingsPage, CarBrowsePage,
		ProfilePage,
	};
	#[cfg(feature = "session")]
	pub use crate::session::{Session, SessionStorage, UserProfile};
	#[cfg(feature = "tables")]
	pub use crate::tables::{ColumnKind, ColumnSpec, Selection, TableQuery, ViewState};
}
