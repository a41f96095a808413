use chrono::NaiveDate;
use rentkit_tables::value::record_id;
use rentkit_tables::{ColumnKind, ColumnSpec, Selection, SortOrder, TableQuery};
use rstest::*;
use serde_json::json;

type Record = serde_json::Map<String, serde_json::Value>;

fn record(value: serde_json::Value) -> Record {
	value.as_object().cloned().expect("fixture must be an object")
}

fn booking_columns() -> Vec<ColumnSpec> {
	vec![
		ColumnSpec::new("id", "ID", ColumnKind::Number),
		ColumnSpec::new("customer", "Customer", ColumnKind::Text),
		ColumnSpec::new("start_date", "Start Date", ColumnKind::Date),
		ColumnSpec::new("end_date", "End Date", ColumnKind::Date),
		ColumnSpec::new("total_amount", "Total", ColumnKind::Currency),
		ColumnSpec::new("status", "Status", ColumnKind::Status),
	]
}

#[fixture]
fn bookings() -> Vec<Record> {
	vec![
		record(json!({
			"id": 1,
			"customer": "Alice Park",
			"start_date": "2025-08-10",
			"end_date": "2025-08-15",
			"total_amount": 225.0,
			"status": "pending",
		})),
		record(json!({
			"id": 2,
			"customer": "Bob Marsh",
			"start_date": "2025-07-01",
			"end_date": "2025-07-03",
			"total_amount": 90.0,
			"status": "done",
		})),
		record(json!({
			"id": 3,
			"customer": "Carol Diaz",
			"start_date": "2025-09-20",
			"end_date": "2025-09-22",
			"total_amount": 130.0,
			"status": "pending",
		})),
	]
}

fn ids(rows: &[Record]) -> Vec<i64> {
	rows.iter()
		.map(|r| r["id"].as_i64().expect("fixture ids are integers"))
		.collect()
}

#[rstest]
fn test_status_filter_keeps_original_order(bookings: Vec<Record>) {
	// Arrange
	let mut query = TableQuery::new(booking_columns());
	query.set_filter("status", Some("pending")).unwrap();

	// Act
	let visible = query.apply(&bookings);

	// Assert: rows 1 and 3, in input order
	assert_eq!(ids(&visible), vec![1, 3]);
}

#[rstest]
fn test_search_is_case_insensitive_or_across_columns(bookings: Vec<Record>) {
	// Arrange
	let mut query = TableQuery::new(booking_columns());
	query.set_search("MARSH");

	// Act
	let visible = query.apply(&bookings);

	// Assert
	assert_eq!(ids(&visible), vec![2]);

	// A query matching a different column still hits (OR semantics)
	query.set_search("2025-09");
	assert_eq!(ids(&query.apply(&bookings)), vec![3]);
}

#[rstest]
fn test_search_ands_with_filters(bookings: Vec<Record>) {
	// Arrange: search matches rows 1 and 3, filter narrows to pending
	let mut query = TableQuery::new(booking_columns());
	query.set_search("a");
	query.set_filter("status", Some("done")).unwrap();

	// Act
	let visible = query.apply(&bookings);

	// Assert: only the intersection survives
	assert_eq!(ids(&visible), vec![2]);
}

#[rstest]
fn test_advanced_threshold_on_currency(bookings: Vec<Record>) {
	// Arrange
	let mut query = TableQuery::new(booking_columns());
	query.set_advanced_filter("total_amount", Some("130")).unwrap();

	// Act
	let visible = query.apply(&bookings);

	// Assert: greater-or-equal, so 130 itself is included
	assert_eq!(ids(&visible), vec![1, 3]);
}

#[rstest]
fn test_advanced_substring_on_text(bookings: Vec<Record>) {
	// Arrange
	let mut query = TableQuery::new(booking_columns());
	query.set_advanced_filter("customer", Some("diaz")).unwrap();

	// Act & Assert
	assert_eq!(ids(&query.apply(&bookings)), vec![3]);
}

#[rstest]
fn test_date_range_binds_to_first_date_column_only(bookings: Vec<Record>) {
	// Arrange: range covers start_date of row 1 only; row 2's end_date
	// is irrelevant because the range binds to start_date
	let mut query = TableQuery::new(booking_columns());
	query.set_date_range(
		NaiveDate::from_ymd_opt(2025, 8, 1),
		NaiveDate::from_ymd_opt(2025, 8, 31),
	);

	// Act
	let visible = query.apply(&bookings);

	// Assert
	assert_eq!(ids(&visible), vec![1]);
}

#[rstest]
fn test_date_range_inclusive_and_open_ended(bookings: Vec<Record>) {
	// Arrange: inclusive lower bound equal to row 1's start date
	let mut query = TableQuery::new(booking_columns());
	query.set_date_range(NaiveDate::from_ymd_opt(2025, 8, 10), None);

	// Act
	let visible = query.apply(&bookings);

	// Assert: open end keeps everything on/after the bound
	assert_eq!(ids(&visible), vec![1, 3]);
}

#[rstest]
fn test_sort_descending_then_clear_restores_input_order(bookings: Vec<Record>) {
	// Arrange
	let mut query = TableQuery::new(booking_columns());
	query.toggle_sort("total_amount").unwrap();
	query.toggle_sort("total_amount").unwrap();
	assert_eq!(query.sort().unwrap().order, SortOrder::Descending);

	// Act
	let sorted = query.apply(&bookings);
	query.clear_sort();
	let restored = query.apply(&bookings);

	// Assert
	assert_eq!(ids(&sorted), vec![1, 3, 2]);
	assert_eq!(ids(&restored), vec![1, 2, 3]);
}

#[rstest]
fn test_sort_is_stable_for_equal_keys(bookings: Vec<Record>) {
	// Arrange: both pending rows compare equal on status
	let mut query = TableQuery::new(booking_columns());
	query.toggle_sort("status").unwrap();

	// Act
	let visible = query.apply(&bookings);

	// Assert: "done" < "pending"; the pending rows keep input order
	assert_eq!(ids(&visible), vec![2, 1, 3]);
}

#[rstest]
fn test_clear_filters_restores_full_input(bookings: Vec<Record>) {
	// Arrange
	let mut query = TableQuery::new(booking_columns());
	query.set_filter("status", Some("pending")).unwrap();
	query.set_advanced_filter("total_amount", Some("200")).unwrap();
	query.set_date_range(NaiveDate::from_ymd_opt(2025, 8, 1), None);
	assert_eq!(ids(&query.apply(&bookings)), vec![1]);

	// Act
	query.clear_filters();

	// Assert
	assert_eq!(ids(&query.apply(&bookings)), vec![1, 2, 3]);
	assert!(query.is_unfiltered());
}

#[rstest]
fn test_select_all_follows_visible_rows(bookings: Vec<Record>) {
	// Arrange
	let mut query = TableQuery::new(booking_columns());
	query.set_filter("status", Some("pending")).unwrap();
	let mut selection = Selection::new();

	// Act: select all visible, then toggle once more
	let visible = query.visible_ids(&bookings);
	selection.toggle_all(&visible);

	// Assert
	assert_eq!(selection.len(), 2);
	assert!(selection.is_selected("1"));
	assert!(selection.is_selected("3"));

	selection.toggle_all(&visible);
	assert!(selection.is_empty());
}

#[rstest]
fn test_select_all_on_filtered_to_empty_view(bookings: Vec<Record>) {
	// Arrange
	let mut query = TableQuery::new(booking_columns());
	query.set_filter("status", Some("cancelled")).unwrap();
	let mut selection = Selection::new();
	selection.toggle("1");

	// Act
	selection.toggle_all(&query.visible_ids(&bookings));

	// Assert: no-op on an empty view
	assert_eq!(selection.len(), 1);
}

#[rstest]
fn test_visible_ids_skip_records_without_id() {
	// Arrange
	let query = TableQuery::new(vec![ColumnSpec::new("name", "Name", ColumnKind::Text)]);
	let records = vec![
		record(json!({"id": 1, "name": "a"})),
		record(json!({"name": "b"})),
	];

	// Act & Assert
	assert_eq!(query.visible_ids(&records), vec!["1".to_string()]);
	assert_eq!(record_id(&records[1]), None);
}

#[rstest]
fn test_pipeline_composes_all_stages(bookings: Vec<Record>) {
	// Arrange: search hits every row ("2025"), pending filter keeps 1
	// and 3, threshold keeps both, range keeps both, sort reverses them
	let mut query = TableQuery::new(booking_columns());
	query.set_search("2025");
	query.set_filter("status", Some("pending")).unwrap();
	query.set_advanced_filter("total_amount", Some("100")).unwrap();
	query.set_date_range(NaiveDate::from_ymd_opt(2025, 1, 1), None);
	query.toggle_sort("total_amount").unwrap();
	query.toggle_sort("total_amount").unwrap();

	// Act
	let visible = query.apply(&bookings);

	// Assert
	assert_eq!(ids(&visible), vec![1, 3]);
}
