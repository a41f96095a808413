//! Page view-models for the car rental frontend
//!
//! Each page composes the lower crates: it fetches through the API
//! client, holds the fetched snapshot in local view state, feeds it to
//! the table or form engine, and surfaces failures either as a blocking
//! page error (primary loads, with retry) or as a transient
//! notification (secondary mutations). Rendering and routing stay
//! outside; pages expose state and transitions only.
//!
//! Overlapping fetches are guarded by [`FetchGuard`] sequence tickets
//! so a stale response can never overwrite state from a newer request.

pub mod access;
pub mod admin;
pub mod booking;
pub mod cars;
pub mod error;
pub mod guard;
pub mod profile;
mod records;

pub use access::Access;
pub use admin::{AdminCarsPage, AdminDashboardPage, AdminUsersPage, DashboardData};
pub use booking::{BookingsPage, Quote, quote, rental_days};
pub use cars::CarBrowsePage;
pub use error::PageError;
pub use guard::{FetchGuard, FetchTicket};
pub use profile::{ProfilePage, profile_schema};
