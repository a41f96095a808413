//! Dynamic record values and their ordering
//!
//! Records are opaque JSON field maps; the table engine only interprets
//! individual cells on demand (stringification for search and display,
//! numeric/date coercion for threshold filters, and a total order for
//! sorting).

use std::cmp::Ordering;

use serde_json::Value;

/// One row of data, treated as an opaque field map
pub type Record = serde_json::Map<String, Value>;

/// Returns the cell value for `key`, or `Null` when the field is absent
pub fn field<'a>(record: &'a Record, key: &str) -> &'a Value {
	static NULL: Value = Value::Null;
	record.get(key).unwrap_or(&NULL)
}

/// Renders a cell value as plain text
///
/// `Null` renders as the empty string so absent fields never match a
/// search query. Strings render without quotes; everything else uses its
/// JSON representation.
///
/// # Examples
///
/// ```
/// use rentkit_tables::value::stringify;
/// use serde_json::json;
///
/// assert_eq!(stringify(&json!("Toyota")), "Toyota");
/// assert_eq!(stringify(&json!(45.5)), "45.5");
/// assert_eq!(stringify(&json!(null)), "");
/// ```
pub fn stringify(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		other => other.to_string(),
	}
}

/// Attempts to read a cell as a number
///
/// Accepts JSON numbers and numeric strings; everything else is `None`.
pub fn as_number(value: &Value) -> Option<f64> {
	match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse::<f64>().ok(),
		_ => None,
	}
}

fn type_rank(value: &Value) -> u8 {
	match value {
		Value::Null => 0,
		Value::Bool(_) => 1,
		Value::Number(_) => 2,
		Value::String(_) => 3,
		Value::Array(_) => 4,
		Value::Object(_) => 5,
	}
}

/// Total order over raw JSON values used by column sorting
///
/// Same-typed values compare natively: numbers numerically, strings
/// byte-wise (not locale-aware), booleans `false < true`. Mixed types
/// fall back to a fixed type rank (`null < bool < number < string`) so
/// sorting is total and deterministic for any input.
///
/// # Examples
///
/// ```
/// use rentkit_tables::value::cmp_values;
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// assert_eq!(cmp_values(&json!(2), &json!(10)), Ordering::Less);
/// assert_eq!(cmp_values(&json!("b"), &json!("a")), Ordering::Greater);
/// assert_eq!(cmp_values(&json!(null), &json!(0)), Ordering::Less);
/// ```
pub fn cmp_values(a: &Value, b: &Value) -> Ordering {
	match (a, b) {
		(Value::Null, Value::Null) => Ordering::Equal,
		(Value::Bool(x), Value::Bool(y)) => x.cmp(y),
		(Value::Number(x), Value::Number(y)) => {
			let x = x.as_f64().unwrap_or(f64::NAN);
			let y = y.as_f64().unwrap_or(f64::NAN);
			x.partial_cmp(&y).unwrap_or(Ordering::Equal)
		}
		(Value::String(x), Value::String(y)) => x.cmp(y),
		_ => type_rank(a).cmp(&type_rank(b)),
	}
}

/// Extracts the record identifier from the `id` field, stringified
///
/// Selection is keyed by this value. Records without an `id` field (or
/// with a non-scalar one) yield `None` and cannot be selected.
pub fn record_id(record: &Record) -> Option<String> {
	match record.get("id") {
		Some(Value::String(s)) => Some(s.clone()),
		Some(Value::Number(n)) => Some(n.to_string()),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_field_missing_is_null() {
		let record = json!({"make": "Mazda"}).as_object().cloned().unwrap();
		assert_eq!(field(&record, "model"), &Value::Null);
		assert_eq!(field(&record, "make"), &json!("Mazda"));
	}

	#[test]
	fn test_as_number_coerces_strings() {
		assert_eq!(as_number(&json!("42.5")), Some(42.5));
		assert_eq!(as_number(&json!(7)), Some(7.0));
		assert_eq!(as_number(&json!("n/a")), None);
		assert_eq!(as_number(&json!(true)), None);
	}

	#[test]
	fn test_cmp_values_numeric_not_lexicographic() {
		// 2 < 10 numerically even though "10" < "2" lexicographically
		assert_eq!(cmp_values(&json!(2), &json!(10)), Ordering::Less);
	}

	#[test]
	fn test_cmp_values_mixed_types_use_rank() {
		assert_eq!(cmp_values(&json!(null), &json!(false)), Ordering::Less);
		assert_eq!(cmp_values(&json!(true), &json!(0)), Ordering::Less);
		assert_eq!(cmp_values(&json!(99), &json!("a")), Ordering::Less);
	}

	#[test]
	fn test_record_id_variants() {
		let numeric = json!({"id": 7}).as_object().cloned().unwrap();
		let string = json!({"id": "abc"}).as_object().cloned().unwrap();
		let missing = json!({"name": "x"}).as_object().cloned().unwrap();

		assert_eq!(record_id(&numeric), Some("7".to_string()));
		assert_eq!(record_id(&string), Some("abc".to_string()));
		assert_eq!(record_id(&missing), None);
	}
}
