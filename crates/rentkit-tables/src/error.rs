//! Error types for table operations

/// Errors raised by table query configuration and export
#[derive(Debug, thiserror::Error)]
pub enum TableError {
	/// The referenced column key does not exist in the schema
	#[error("Unknown column: {0}")]
	UnknownColumn(String),

	/// The column exists but is not marked sortable
	#[error("Column is not sortable: {0}")]
	NotSortable(String),

	/// The column exists but is not marked filterable
	#[error("Column is not filterable: {0}")]
	NotFilterable(String),

	/// The filter value cannot be interpreted for the column's kind
	/// (e.g. a non-numeric threshold on a currency column)
	#[error("Invalid filter value {value:?} for column {column}")]
	InvalidFilterValue {
		/// The column the filter was applied to
		column: String,
		/// The rejected raw filter value
		value: String,
	},

	/// CSV serialization failed during export
	#[cfg(feature = "export")]
	#[error("CSV export failed: {0}")]
	Csv(#[from] csv::Error),

	/// Flushing the export writer failed
	#[cfg(feature = "export")]
	#[error("Export I/O failed: {0}")]
	Io(#[from] std::io::Error),
}

/// Result alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;
