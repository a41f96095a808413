//! Typed REST client for the car rental backend
//!
//! Every response uses the `{success, data|message}` envelope; this
//! crate owns envelope decoding, the error taxonomy (transport failure,
//! non-success status, rejected envelope, malformed body, missing
//! credential), bearer-token injection, and the typed resource models.
//! The HTTP layer sits behind [`HttpTransport`] so tests script
//! responses instead of running a server.
//!
//! Endpoint groups mirror the backend surface: cars and categories,
//! bookings, payments, reviews, auth/profile, and the admin console
//! (users, stats, chart series, bulk operations).

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod cars;
pub mod client;
pub mod envelope;
pub mod error;
pub mod resources;
pub mod settings;
pub mod transport;

pub use client::{ApiClient, ApiClientBuilder};
pub use envelope::Envelope;
pub use error::{ApiError, Result, require_token};
pub use resources::*;
pub use settings::ApiSettings;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};
