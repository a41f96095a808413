//! Row and bulk action descriptors
//!
//! Actions are declarative: the table dispatches them but never
//! implements their semantics. A row action may carry a per-row
//! visibility predicate (e.g. "cancel" only on pending bookings).

use std::fmt;
use std::sync::Arc;

use crate::value::Record;

/// Per-row visibility predicate
pub type RowPredicate = Arc<dyn Fn(&Record) -> bool + Send + Sync>;

/// An action rendered on every (matching) row
#[derive(Clone)]
pub struct RowAction {
	id: String,
	label: String,
	icon: Option<String>,
	visible_when: Option<RowPredicate>,
}

impl RowAction {
	/// Creates a row action visible on every row
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			icon: None,
			visible_when: None,
		}
	}

	/// Sets the icon name
	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	/// Restricts the action to rows matching the predicate
	///
	/// # Examples
	///
	/// ```
	/// use rentkit_tables::RowAction;
	/// use serde_json::json;
	///
	/// let cancel = RowAction::new("cancel", "Cancel")
	///     .visible_when(|row| row.get("status") == Some(&json!("pending")));
	///
	/// let pending = json!({"status": "pending"}).as_object().cloned().unwrap();
	/// let done = json!({"status": "done"}).as_object().cloned().unwrap();
	/// assert!(cancel.is_visible(&pending));
	/// assert!(!cancel.is_visible(&done));
	/// ```
	pub fn visible_when<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&Record) -> bool + Send + Sync + 'static,
	{
		self.visible_when = Some(Arc::new(predicate));
		self
	}

	/// The action identifier used at dispatch
	pub fn id(&self) -> &str {
		&self.id
	}

	/// The display label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// The icon name, if any
	pub fn icon(&self) -> Option<&str> {
		self.icon.as_deref()
	}

	/// Evaluates the visibility predicate for a row
	pub fn is_visible(&self, record: &Record) -> bool {
		match &self.visible_when {
			Some(predicate) => predicate(record),
			None => true,
		}
	}
}

impl fmt::Debug for RowAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RowAction")
			.field("id", &self.id)
			.field("label", &self.label)
			.field("icon", &self.icon)
			.field("conditional", &self.visible_when.is_some())
			.finish()
	}
}

/// An action applied to the selected subset of records in one request
#[derive(Debug, Clone)]
pub struct BulkAction {
	id: String,
	label: String,
	icon: Option<String>,
}

impl BulkAction {
	/// Creates a bulk action
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			icon: None,
		}
	}

	/// Sets the icon name
	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	/// The action identifier used at dispatch
	pub fn id(&self) -> &str {
		&self.id
	}

	/// The display label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// The icon name, if any
	pub fn icon(&self) -> Option<&str> {
		self.icon.as_deref()
	}
}
