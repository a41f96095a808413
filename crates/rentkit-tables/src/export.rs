//! CSV export of the visible rows
//!
//! Exports reuse the per-kind cell rendering of the grid, so a currency
//! column exports `$45.00` exactly as displayed. Callers pass the rows
//! already produced by [`TableQuery::apply`](crate::TableQuery::apply),
//! which keeps the export consistent with the active search, filters,
//! and sort.

use std::io::Write;

use crate::column::ColumnSpec;
use crate::error::Result;
use crate::value::{Record, field};

/// Writes the given rows as CSV: one header row built from the column
/// labels, then one line per record
///
/// # Examples
///
/// ```
/// use rentkit_tables::{ColumnKind, ColumnSpec};
/// use rentkit_tables::export::write_csv;
/// use serde_json::json;
///
/// let columns = vec![
///     ColumnSpec::new("make", "Make", ColumnKind::Text),
///     ColumnSpec::new("daily_rate", "Daily Rate", ColumnKind::Currency),
/// ];
/// let rows = vec![
///     json!({"make": "Toyota", "daily_rate": 45.0})
///         .as_object()
///         .cloned()
///         .unwrap(),
/// ];
///
/// let mut out = Vec::new();
/// write_csv(&mut out, &columns, &rows).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("Make,Daily Rate\n"));
/// assert!(text.contains("Toyota,$45.00"));
/// ```
pub fn write_csv<W: Write>(writer: W, columns: &[ColumnSpec], rows: &[Record]) -> Result<()> {
	let mut csv_writer = csv::Writer::from_writer(writer);

	csv_writer.write_record(columns.iter().map(|c| c.label()))?;
	for row in rows {
		csv_writer.write_record(columns.iter().map(|c| c.render(field(row, c.key()))))?;
	}
	csv_writer.flush()?;
	Ok(())
}
