//! Transient notification queue for rentkit
//!
//! One process-wide [`Notifier`] is created at the top of the
//! application and handed (cloned) to every page that needs to surface
//! a one-time message. Each entry auto-expires after its duration via a
//! cancellable timer task; manual dismissal and provider teardown abort
//! the timer instead of letting it fire against a dead queue.

pub mod notification;
pub mod notifier;

pub use notification::{
	DEFAULT_DURATION_MS, ERROR_DURATION_MS, Level, Notification, ShowOptions,
};
pub use notifier::Notifier;
