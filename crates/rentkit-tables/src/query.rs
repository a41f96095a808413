//! The list-view query pipeline
//!
//! [`TableQuery`] holds the active search, filters, and sort for one
//! table and recomputes the visible rows from the full page of records
//! the caller supplied. The pipeline order is fixed and must stay fixed
//! for deterministic output:
//!
//! search -> basic filters -> advanced filters -> date range -> sort
//!
//! All stages are non-destructive: the input slice is never mutated and
//! clearing every filter restores the original input order (the sort is
//! stable, so equal keys also preserve it).

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::column::{ColumnKind, ColumnSpec};
use crate::error::{Result, TableError};
use crate::value::{Record, as_number, cmp_values, field, record_id, stringify};

/// Sentinel filter value that disables a basic filter
pub const FILTER_ALL: &str = "all";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
	/// Smallest values first
	Ascending,
	/// Largest values first
	Descending,
}

impl SortOrder {
	fn flipped(self) -> Self {
		match self {
			SortOrder::Ascending => SortOrder::Descending,
			SortOrder::Descending => SortOrder::Ascending,
		}
	}
}

/// The active sort: a single column key and a direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
	/// Column key being sorted
	pub key: String,
	/// Sort direction
	pub order: SortOrder,
}

/// Inclusive date bounds applied to the first date column
///
/// Either side may be open. An empty range matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
	/// Inclusive lower bound
	pub start: Option<NaiveDate>,
	/// Inclusive upper bound
	pub end: Option<NaiveDate>,
}

impl DateRange {
	fn is_empty(&self) -> bool {
		self.start.is_none() && self.end.is_none()
	}
}

/// Search, filter, and sort state for one table
///
/// # Example
///
/// ```rust
/// use rentkit_tables::{ColumnKind, ColumnSpec, TableQuery};
/// use serde_json::json;
///
/// let mut query = TableQuery::new(vec![
///     ColumnSpec::new("status", "Status", ColumnKind::Status),
/// ]);
/// query.set_filter("status", Some("pending")).unwrap();
///
/// let rows: Vec<_> = [
///     json!({"id": 1, "status": "pending"}),
///     json!({"id": 2, "status": "done"}),
/// ]
/// .iter()
/// .map(|v| v.as_object().cloned().unwrap())
/// .collect();
///
/// let visible = query.apply(&rows);
/// assert_eq!(visible.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TableQuery {
	columns: Vec<ColumnSpec>,
	search: String,
	filters: HashMap<String, String>,
	advanced: HashMap<String, String>,
	date_range: DateRange,
	sort: Option<SortConfig>,
}

impl TableQuery {
	/// Creates a query over the given column schema with nothing active
	pub fn new(columns: Vec<ColumnSpec>) -> Self {
		Self {
			columns,
			search: String::new(),
			filters: HashMap::new(),
			advanced: HashMap::new(),
			date_range: DateRange::default(),
			sort: None,
		}
	}

	/// The column schema
	pub fn columns(&self) -> &[ColumnSpec] {
		&self.columns
	}

	/// Looks up a column by key
	pub fn column(&self, key: &str) -> Option<&ColumnSpec> {
		self.columns.iter().find(|c| c.key() == key)
	}

	fn filterable_column(&self, key: &str) -> Result<&ColumnSpec> {
		let column = self
			.column(key)
			.ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
		if !column.is_filterable() {
			return Err(TableError::NotFilterable(key.to_string()));
		}
		Ok(column)
	}

	/// Sets the search query; blank input clears it
	pub fn set_search(&mut self, query: impl Into<String>) {
		self.search = query.into();
	}

	/// The current search query
	pub fn search(&self) -> &str {
		&self.search
	}

	/// Sets or clears the basic equality filter for a column
	///
	/// Passing `None` or the [`FILTER_ALL`] sentinel removes the filter.
	/// The column must exist and be filterable.
	pub fn set_filter(&mut self, key: &str, value: Option<&str>) -> Result<()> {
		self.filterable_column(key)?;
		match value {
			None | Some(FILTER_ALL) => {
				self.filters.remove(key);
			}
			Some(v) => {
				self.filters.insert(key.to_string(), v.to_string());
			}
		}
		Ok(())
	}

	/// Sets or clears the advanced filter for a column
	///
	/// The accepted value depends on the column kind: number and
	/// currency columns take a numeric greater-or-equal threshold, date
	/// columns an on/after date, every other kind a substring. Invalid
	/// thresholds are rejected up front.
	pub fn set_advanced_filter(&mut self, key: &str, value: Option<&str>) -> Result<()> {
		let column = self.filterable_column(key)?;
		let Some(raw) = value else {
			self.advanced.remove(key);
			return Ok(());
		};
		let raw = raw.trim();
		if raw.is_empty() {
			self.advanced.remove(key);
			return Ok(());
		}

		match column.kind() {
			ColumnKind::Number | ColumnKind::Currency => {
				if raw.parse::<f64>().is_err() {
					return Err(TableError::InvalidFilterValue {
						column: key.to_string(),
						value: raw.to_string(),
					});
				}
			}
			ColumnKind::Date => {
				if NaiveDate::parse_from_str(raw, DATE_FORMAT).is_err() {
					return Err(TableError::InvalidFilterValue {
						column: key.to_string(),
						value: raw.to_string(),
					});
				}
			}
			_ => {}
		}

		self.advanced.insert(key.to_string(), raw.to_string());
		Ok(())
	}

	/// Sets the date range applied to the first date column
	pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
		self.date_range = DateRange { start, end };
	}

	/// Removes every basic, advanced, and date-range filter
	///
	/// The search query and the sort are left untouched.
	pub fn clear_filters(&mut self) {
		self.filters.clear();
		self.advanced.clear();
		self.date_range = DateRange::default();
	}

	/// True when no search, filter, or date range is active
	pub fn is_unfiltered(&self) -> bool {
		self.search.trim().is_empty()
			&& self.filters.is_empty()
			&& self.advanced.is_empty()
			&& self.date_range.is_empty()
	}

	/// Toggles the sort on a column header
	///
	/// A first activation sorts ascending; activating the same column
	/// again flips the direction. Activating a different column replaces
	/// the sort. Non-sortable and unknown columns are rejected.
	pub fn toggle_sort(&mut self, key: &str) -> Result<SortConfig> {
		let column = self
			.column(key)
			.ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
		if !column.is_sortable() {
			return Err(TableError::NotSortable(key.to_string()));
		}

		let order = match &self.sort {
			Some(current) if current.key == key => current.order.flipped(),
			_ => SortOrder::Ascending,
		};
		let config = SortConfig {
			key: key.to_string(),
			order,
		};
		self.sort = Some(config.clone());
		tracing::debug!(column = key, ?order, "table sort toggled");
		Ok(config)
	}

	/// Removes the active sort, restoring input order
	pub fn clear_sort(&mut self) {
		self.sort = None;
	}

	/// The active sort, if any
	pub fn sort(&self) -> Option<&SortConfig> {
		self.sort.as_ref()
	}

	/// Distinct observed values for a filterable column
	///
	/// Computed from the full unfiltered input (not the already-filtered
	/// subset) so filter options never vanish while one is active.
	/// Values keep their first-appearance order.
	pub fn distinct_values(&self, records: &[Record], key: &str) -> Result<Vec<String>> {
		self.filterable_column(key)?;
		let mut seen = std::collections::HashSet::new();
		let mut values = Vec::new();
		for record in records {
			let text = stringify(field(record, key));
			if text.is_empty() {
				continue;
			}
			if seen.insert(text.clone()) {
				values.push(text);
			}
		}
		Ok(values)
	}

	/// Runs the full pipeline and returns the visible rows
	///
	/// The input is never mutated; the output is a subset of the input
	/// containing exactly the rows matching the search (OR across
	/// columns) and every active filter (AND), in input order unless a
	/// sort is active.
	pub fn apply(&self, records: &[Record]) -> Vec<Record> {
		let mut rows: Vec<Record> = records
			.iter()
			.filter(|r| self.matches_search(r))
			.filter(|r| self.matches_filters(r))
			.filter(|r| self.matches_advanced(r))
			.filter(|r| self.matches_date_range(r))
			.cloned()
			.collect();

		if let Some(sort) = &self.sort {
			// Vec::sort_by is stable: rows with equal keys keep their
			// input order, which is what restores the original order
			// when the sort is cleared.
			rows.sort_by(|a, b| {
				let ordering = cmp_values(field(a, &sort.key), field(b, &sort.key));
				match sort.order {
					SortOrder::Ascending => ordering,
					SortOrder::Descending => ordering.reverse(),
				}
			});
		}

		rows
	}

	/// Ids of the currently visible rows, for select-all semantics
	pub fn visible_ids(&self, records: &[Record]) -> Vec<String> {
		self.apply(records)
			.iter()
			.filter_map(record_id)
			.collect()
	}

	fn matches_search(&self, record: &Record) -> bool {
		let query = self.search.trim().to_lowercase();
		if query.is_empty() {
			return true;
		}
		self.columns.iter().any(|column| {
			stringify(field(record, column.key()))
				.to_lowercase()
				.contains(&query)
		})
	}

	fn matches_filters(&self, record: &Record) -> bool {
		self.filters
			.iter()
			.all(|(key, want)| stringify(field(record, key)) == *want)
	}

	fn matches_advanced(&self, record: &Record) -> bool {
		self.advanced.iter().all(|(key, raw)| {
			let Some(column) = self.column(key) else {
				return true;
			};
			let cell = field(record, key);
			match column.kind() {
				ColumnKind::Number | ColumnKind::Currency => {
					match (as_number(cell), raw.parse::<f64>()) {
						(Some(value), Ok(threshold)) => value >= threshold,
						_ => false,
					}
				}
				ColumnKind::Date => {
					let cell_date = NaiveDate::parse_from_str(&stringify(cell), DATE_FORMAT);
					let threshold = NaiveDate::parse_from_str(raw, DATE_FORMAT);
					match (cell_date, threshold) {
						(Ok(value), Ok(threshold)) => value >= threshold,
						_ => false,
					}
				}
				_ => stringify(cell).to_lowercase().contains(&raw.to_lowercase()),
			}
		})
	}

	fn matches_date_range(&self, record: &Record) -> bool {
		if self.date_range.is_empty() {
			return true;
		}
		// The range binds to the first date column only; tables without
		// one ignore the range entirely.
		let Some(column) = self.columns.iter().find(|c| c.kind() == ColumnKind::Date) else {
			return true;
		};
		let Ok(value) =
			NaiveDate::parse_from_str(&stringify(field(record, column.key())), DATE_FORMAT)
		else {
			return false;
		};
		if let Some(start) = self.date_range.start
			&& value < start
		{
			return false;
		}
		if let Some(end) = self.date_range.end
			&& value > end
		{
			return false;
		}
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::{ColumnKind, ColumnSpec};
	use serde_json::json;

	fn record(value: serde_json::Value) -> Record {
		value.as_object().cloned().unwrap()
	}

	fn columns() -> Vec<ColumnSpec> {
		vec![
			ColumnSpec::new("make", "Make", ColumnKind::Text),
			ColumnSpec::new("year", "Year", ColumnKind::Number),
			ColumnSpec::new("status", "Status", ColumnKind::Status),
		]
	}

	#[test]
	fn test_set_filter_all_sentinel_clears() {
		let mut query = TableQuery::new(columns());
		query.set_filter("status", Some("pending")).unwrap();
		assert!(!query.is_unfiltered());

		query.set_filter("status", Some(FILTER_ALL)).unwrap();
		assert!(query.is_unfiltered());
	}

	#[test]
	fn test_set_filter_unknown_column() {
		let mut query = TableQuery::new(columns());
		assert!(matches!(
			query.set_filter("fuel", Some("gas")),
			Err(TableError::UnknownColumn(_))
		));
	}

	#[test]
	fn test_set_filter_non_filterable_column() {
		let mut query = TableQuery::new(vec![
			ColumnSpec::new("image", "Image", ColumnKind::Text).filterable(false),
		]);
		assert!(matches!(
			query.set_filter("image", Some("x")),
			Err(TableError::NotFilterable(_))
		));
	}

	#[test]
	fn test_advanced_filter_rejects_bad_threshold() {
		let mut query = TableQuery::new(columns());
		assert!(matches!(
			query.set_advanced_filter("year", Some("soon")),
			Err(TableError::InvalidFilterValue { .. })
		));
	}

	#[test]
	fn test_toggle_sort_two_state_cycle() {
		let mut query = TableQuery::new(columns());

		assert_eq!(query.toggle_sort("year").unwrap().order, SortOrder::Ascending);
		assert_eq!(
			query.toggle_sort("year").unwrap().order,
			SortOrder::Descending
		);
		assert_eq!(query.toggle_sort("year").unwrap().order, SortOrder::Ascending);

		// Switching columns resets to ascending
		query.toggle_sort("make").unwrap();
		assert_eq!(query.sort().unwrap().key, "make");
		assert_eq!(query.sort().unwrap().order, SortOrder::Ascending);
	}

	#[test]
	fn test_toggle_sort_non_sortable() {
		let mut query = TableQuery::new(vec![
			ColumnSpec::new("actions", "Actions", ColumnKind::Text).sortable(false),
		]);
		assert!(matches!(
			query.toggle_sort("actions"),
			Err(TableError::NotSortable(_))
		));
	}

	#[test]
	fn test_distinct_values_from_full_input() {
		let mut query = TableQuery::new(columns());
		let records = vec![
			record(json!({"id": 1, "make": "Toyota", "status": "pending"})),
			record(json!({"id": 2, "make": "Honda", "status": "done"})),
			record(json!({"id": 3, "make": "Toyota", "status": "pending"})),
		];

		// Active filter must not shrink the option list
		query.set_filter("status", Some("done")).unwrap();
		let values = query.distinct_values(&records, "status").unwrap();
		assert_eq!(values, vec!["pending", "done"]);
	}

	#[test]
	fn test_apply_does_not_mutate_input() {
		let mut query = TableQuery::new(columns());
		query.toggle_sort("make").unwrap();
		let records = vec![
			record(json!({"id": 1, "make": "Zeta"})),
			record(json!({"id": 2, "make": "Alpha"})),
		];

		let visible = query.apply(&records);

		assert_eq!(visible[0]["make"], json!("Alpha"));
		// Source untouched
		assert_eq!(records[0]["make"], json!("Zeta"));
	}
}
