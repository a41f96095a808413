//! The process-wide notification provider

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::notification::{Level, Notification, ShowOptions};

struct Entry {
	notification: Notification,
	timer: Option<AbortHandle>,
}

#[derive(Default)]
struct Inner {
	entries: Mutex<Vec<Entry>>,
}

impl Inner {
	fn remove(&self, id: Uuid) -> bool {
		let mut entries = self.entries.lock();
		let before = entries.len();
		entries.retain(|entry| {
			if entry.notification.id != id {
				return true;
			}
			if let Some(timer) = &entry.timer {
				timer.abort();
			}
			false
		});
		before != entries.len()
	}
}

impl Drop for Inner {
	fn drop(&mut self) {
		// Provider teardown: no timer may outlive the queue
		for entry in self.entries.lock().iter() {
			if let Some(timer) = &entry.timer {
				timer.abort();
			}
		}
	}
}

/// Handle to the notification queue
///
/// Cheap to clone; every clone sees the same queue. Must be used from
/// within a tokio runtime because expiry timers are spawned tasks.
///
/// # Example
///
/// ```rust,no_run
/// use rentkit_notify::{Level, Notifier};
///
/// # async fn demo() {
/// let notifier = Notifier::new();
/// notifier.success("Booking confirmed");
/// notifier.error("Could not update car status");
/// assert_eq!(notifier.len(), 2);
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Notifier {
	inner: Arc<Inner>,
}

impl Notifier {
	/// Creates an empty queue
	pub fn new() -> Self {
		Self::default()
	}

	/// Enqueues a notification with the level's default duration
	pub fn show(&self, level: Level, message: impl Into<String>) -> Uuid {
		self.show_with(level, message, ShowOptions::default())
	}

	/// Enqueues a notification with explicit options
	///
	/// A positive duration schedules a cancellable removal task; a
	/// non-positive one makes the entry sticky until dismissed.
	pub fn show_with(
		&self,
		level: Level,
		message: impl Into<String>,
		options: ShowOptions,
	) -> Uuid {
		let notification = Notification::new(level, message);
		let id = notification.id;
		let duration = options.resolve(level);

		let timer = duration.map(|duration| {
			let queue: Weak<Inner> = Arc::downgrade(&self.inner);
			tokio::spawn(async move {
				tokio::time::sleep(duration).await;
				// The queue may already be torn down; expiring then is
				// a no-op, same as dismissing an already-removed id.
				if let Some(queue) = queue.upgrade() {
					queue.remove(id);
				}
			})
			.abort_handle()
		});

		tracing::debug!(%id, ?level, ?duration, "notification enqueued");
		self.inner.entries.lock().push(Entry { notification, timer });
		id
	}

	/// Shorthand for a success notification
	pub fn success(&self, message: impl Into<String>) -> Uuid {
		self.show(Level::Success, message)
	}

	/// Shorthand for an error notification
	pub fn error(&self, message: impl Into<String>) -> Uuid {
		self.show(Level::Error, message)
	}

	/// Shorthand for a warning notification
	pub fn warning(&self, message: impl Into<String>) -> Uuid {
		self.show(Level::Warning, message)
	}

	/// Shorthand for an info notification
	pub fn info(&self, message: impl Into<String>) -> Uuid {
		self.show(Level::Info, message)
	}

	/// Removes a notification and cancels its timer
	///
	/// Removing an id that already expired (or was never queued) is a
	/// no-op, so dismissal and expiry can race freely.
	pub fn dismiss(&self, id: Uuid) {
		self.inner.remove(id);
	}

	/// Empties the whole queue, cancelling every timer
	pub fn clear(&self) {
		let mut entries = self.inner.entries.lock();
		for entry in entries.iter() {
			if let Some(timer) = &entry.timer {
				timer.abort();
			}
		}
		entries.clear();
	}

	/// Whether the given id is still queued
	pub fn contains(&self, id: Uuid) -> bool {
		self.inner
			.entries
			.lock()
			.iter()
			.any(|entry| entry.notification.id == id)
	}

	/// The queued notifications in insertion order
	pub fn snapshot(&self) -> Vec<Notification> {
		self.inner
			.entries
			.lock()
			.iter()
			.map(|entry| entry.notification.clone())
			.collect()
	}

	/// Number of queued notifications
	pub fn len(&self) -> usize {
		self.inner.entries.lock().len()
	}

	/// Whether the queue is empty
	pub fn is_empty(&self) -> bool {
		self.inner.entries.lock().is_empty()
	}
}
