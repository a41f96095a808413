//! Notification entries and their display metadata

use std::time::Duration;

use uuid::Uuid;

/// Default lifetime of a notification
pub const DEFAULT_DURATION_MS: i64 = 5_000;

/// Default lifetime of an error notification (errors linger longer)
pub const ERROR_DURATION_MS: i64 = 7_000;

/// Severity of a notification, driving styling and default duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	/// An action completed
	Success,
	/// An action failed
	Error,
	/// Something needs attention but nothing failed
	Warning,
	/// Neutral information
	Info,
}

impl Level {
	/// The default lifetime for this level, in milliseconds
	pub fn default_duration_ms(self) -> i64 {
		match self {
			Level::Error => ERROR_DURATION_MS,
			_ => DEFAULT_DURATION_MS,
		}
	}
}

/// Options accepted by [`Notifier::show_with`](crate::Notifier::show_with)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowOptions {
	/// Lifetime override in milliseconds
	///
	/// `None` uses the level default; a non-positive value makes the
	/// notification sticky (it persists until manually dismissed).
	pub duration_ms: Option<i64>,
}

impl ShowOptions {
	/// A sticky notification that never auto-expires
	pub fn sticky() -> Self {
		Self {
			duration_ms: Some(0),
		}
	}

	/// A notification with an explicit lifetime
	pub fn lasting_ms(duration_ms: i64) -> Self {
		Self {
			duration_ms: Some(duration_ms),
		}
	}

	pub(crate) fn resolve(self, level: Level) -> Option<Duration> {
		let ms = self.duration_ms.unwrap_or_else(|| level.default_duration_ms());
		if ms <= 0 {
			None
		} else {
			Some(Duration::from_millis(ms as u64))
		}
	}
}

/// One queued notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	/// Generated unique id, used for dismissal
	pub id: Uuid,
	/// Severity
	pub level: Level,
	/// Message text
	pub message: String,
}

impl Notification {
	pub(crate) fn new(level: Level, message: impl Into<String>) -> Self {
		Self {
			id: Uuid::new_v4(),
			level,
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_level_default_durations() {
		assert_eq!(Level::Success.default_duration_ms(), 5_000);
		assert_eq!(Level::Info.default_duration_ms(), 5_000);
		assert_eq!(Level::Error.default_duration_ms(), 7_000);
	}

	#[test]
	fn test_options_resolve() {
		assert_eq!(
			ShowOptions::default().resolve(Level::Info),
			Some(Duration::from_millis(5_000))
		);
		assert_eq!(
			ShowOptions::default().resolve(Level::Error),
			Some(Duration::from_millis(7_000))
		);
		assert_eq!(ShowOptions::sticky().resolve(Level::Info), None);
		assert_eq!(ShowOptions::lasting_ms(-1).resolve(Level::Info), None);
		assert_eq!(
			ShowOptions::lasting_ms(250).resolve(Level::Error),
			Some(Duration::from_millis(250))
		);
	}

	#[test]
	fn test_ids_are_unique() {
		let a = Notification::new(Level::Info, "a");
		let b = Notification::new(Level::Info, "b");
		assert_ne!(a.id, b.id);
	}
}
