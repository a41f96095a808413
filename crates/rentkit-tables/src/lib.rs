//! Data table query engine for rentkit
//!
//! This crate implements the client-side core of the generic list view:
//! given a page of records and a column schema, it produces the visible
//! rows after search, filtering, and sorting, and tracks row selection.
//!
//! # Features
//!
//! - **Column Schema**: Declarative column specs with a typed kind
//!   (text, number, currency, boolean, status, date)
//! - **Search**: Case-insensitive substring search across all columns
//! - **Filtering**: Per-column equality filters, threshold filters, and
//!   a date-range filter bound to the first date column
//! - **Sorting**: Single-key stable sort with ascending/descending toggle
//! - **Selection**: Id-based selection with select-all semantics
//! - **Pagination**: External page descriptors (the server paginates;
//!   this crate never slices the record array by page)
//! - **Export**: CSV export of the visible rows (requires the `export`
//!   feature)
//!
//! The recomputation order is fixed: search, then basic filters, then
//! advanced filters, then the date-range filter, then sort. Filtering is
//! non-destructive; clearing every filter restores the input order.
//!
//! # Example
//!
//! ```rust
//! use rentkit_tables::{ColumnKind, ColumnSpec, TableQuery};
//! use serde_json::json;
//!
//! let columns = vec![
//!     ColumnSpec::new("make", "Make", ColumnKind::Text),
//!     ColumnSpec::new("daily_rate", "Daily Rate", ColumnKind::Currency),
//! ];
//! let mut query = TableQuery::new(columns);
//! query.set_search("toy");
//!
//! let records = vec![
//!     json!({"id": 1, "make": "Toyota", "daily_rate": 45.0})
//!         .as_object()
//!         .cloned()
//!         .unwrap(),
//! ];
//! assert_eq!(query.apply(&records).len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod actions;
pub mod column;
pub mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod query;
pub mod selection;
pub mod value;
pub mod view;

pub use actions::{BulkAction, RowAction};
pub use column::{ColumnKind, ColumnSpec};
pub use error::{Result, TableError};
pub use query::{DateRange, SortConfig, SortOrder, TableQuery};
pub use selection::Selection;
pub use value::Record;
pub use view::{PageInfo, ViewState};
