//! Conversion from typed resources to table records

use rentkit_tables::Record;
use serde_json::Value;

/// Serializes typed API resources into the opaque field maps the table
/// engine consumes
pub(crate) fn to_records<T: serde::Serialize>(items: &[T]) -> Vec<Record> {
	items
		.iter()
		.filter_map(|item| match serde_json::to_value(item) {
			Ok(Value::Object(map)) => Some(map),
			_ => None,
		})
		.collect()
}

/// Converts the API pagination descriptor into the table's page info
pub(crate) fn page_info(pagination: rentkit_api::Pagination) -> rentkit_tables::PageInfo {
	rentkit_tables::PageInfo {
		current_page: pagination.current_page,
		per_page: pagination.per_page,
		total: pagination.total,
		total_pages: pagination.total_pages,
	}
}
