//! Column schema for the generic list view
//!
//! Each column is described declaratively: a record key, a display
//! label, a typed kind driving rendering and filter dispatch, and
//! sortable/filterable flags. The typed kind replaces string tags so
//! that dispatch over cell behavior is exhaustive.

use serde_json::Value;

use crate::value::{as_number, stringify};

/// How a column's cells are interpreted and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
	/// Free-form text, rendered verbatim
	Text,
	/// Plain numeric value
	Number,
	/// Monetary amount, rendered with a currency prefix
	Currency,
	/// Boolean flag, rendered as Yes/No
	Boolean,
	/// Enumerated status value (pending, confirmed, ...)
	Status,
	/// ISO calendar date (`YYYY-MM-DD`)
	Date,
}

/// Declarative description of one table column
///
/// # Example
///
/// ```rust
/// use rentkit_tables::{ColumnKind, ColumnSpec};
///
/// let column = ColumnSpec::new("daily_rate", "Daily Rate", ColumnKind::Currency)
///     .filterable(true)
///     .sortable(true);
/// assert_eq!(column.key(), "daily_rate");
/// assert_eq!(column.label(), "Daily Rate");
/// ```
#[derive(Debug, Clone)]
pub struct ColumnSpec {
	key: String,
	label: String,
	kind: ColumnKind,
	sortable: bool,
	filterable: bool,
}

impl ColumnSpec {
	/// Creates a new column spec; columns default to sortable and
	/// filterable
	pub fn new(key: impl Into<String>, label: impl Into<String>, kind: ColumnKind) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			kind,
			sortable: true,
			filterable: true,
		}
	}

	/// Sets whether this column participates in the sort toggle
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether this column accepts filters
	pub fn filterable(mut self, filterable: bool) -> Self {
		self.filterable = filterable;
		self
	}

	/// The record key this column reads
	pub fn key(&self) -> &str {
		&self.key
	}

	/// The header label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// The column's typed kind
	pub fn kind(&self) -> ColumnKind {
		self.kind
	}

	/// Whether the column participates in the sort toggle
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Whether the column accepts filters
	pub fn is_filterable(&self) -> bool {
		self.filterable
	}

	/// Renders a cell value for display or export
	///
	/// Rendering dispatches on the column kind: booleans become
	/// `Yes`/`No`, currency values gain a `$` prefix with two decimals,
	/// everything else renders as plain text.
	///
	/// # Examples
	///
	/// ```
	/// use rentkit_tables::{ColumnKind, ColumnSpec};
	/// use serde_json::json;
	///
	/// let rate = ColumnSpec::new("daily_rate", "Daily Rate", ColumnKind::Currency);
	/// assert_eq!(rate.render(&json!(45.5)), "$45.50");
	///
	/// let active = ColumnSpec::new("active", "Active", ColumnKind::Boolean);
	/// assert_eq!(active.render(&json!(true)), "Yes");
	/// ```
	pub fn render(&self, value: &Value) -> String {
		match self.kind {
			ColumnKind::Boolean => {
				let truthy = matches!(value, Value::Bool(true))
					|| matches!(value, Value::String(s) if s == "true");
				if truthy { "Yes".to_string() } else { "No".to_string() }
			}
			ColumnKind::Currency => match as_number(value) {
				Some(amount) => format!("${amount:.2}"),
				None => stringify(value),
			},
			ColumnKind::Text | ColumnKind::Number | ColumnKind::Status | ColumnKind::Date => {
				stringify(value)
			}
		}
	}
}
