use std::collections::HashMap;

use rentkit_forms::{FieldKind, FieldSpec, FormSchema, FormState, SchemaNode};
use rstest::*;
use serde_json::{Value, json};

fn booking_schema() -> FormSchema {
	FormSchema::new(vec![
		SchemaNode::Field(
			FieldSpec::new("customer_email", "Email", FieldKind::Email).required(),
		),
		SchemaNode::Group {
			label: "Rental period".to_string(),
			fields: vec![
				FieldSpec::new(
					"pickup_date",
					"Pickup date",
					FieldKind::Date {
						min: None,
						max: None,
					},
				)
				.required(),
				FieldSpec::new(
					"return_date",
					"Return date",
					FieldKind::Date {
						min: None,
						max: None,
					},
				)
				.required()
				.with_validator(|value, form| {
					let pickup = form
						.get("pickup_date")
						.and_then(Value::as_str)
						.unwrap_or("");
					match value.as_str() {
						Some(ret) if ret > pickup => Ok(()),
						_ => Err("Return date must be after pickup".to_string()),
					}
				}),
			],
		},
		SchemaNode::Field(
			FieldSpec::new(
				"drivers",
				"Drivers",
				FieldKind::Number {
					min: Some(1.0),
					max: Some(3.0),
				},
			)
			.with_default(json!("1")),
		),
		SchemaNode::Field(FieldSpec::new("insurance", "Insurance", FieldKind::Checkbox)),
	])
}

fn fill_valid(form: &mut FormState) {
	form.set_value("customer_email", json!("alice@example.com"))
		.unwrap();
	form.set_value("pickup_date", json!("2025-08-10")).unwrap();
	form.set_value("return_date", json!("2025-08-15")).unwrap();
}

#[rstest]
fn test_invalid_form_never_invokes_handler() {
	// Arrange: return date before pickup
	let mut form = FormState::new(booking_schema());
	form.open(&HashMap::new());
	fill_valid(&mut form);
	form.set_value("return_date", json!("2025-08-01")).unwrap();

	let mut calls = 0;

	// Act
	let result = form.submit_with(|_| calls += 1);

	// Assert
	assert!(result.is_err());
	assert_eq!(calls, 0);
	assert_eq!(
		form.visible_error("return_date"),
		Some("Return date must be after pickup")
	);
}

#[rstest]
fn test_valid_form_invokes_handler_once_with_flat_payload() {
	// Arrange
	let mut form = FormState::new(booking_schema());
	form.open(&HashMap::new());
	fill_valid(&mut form);

	let mut calls = 0;
	let mut seen: Option<HashMap<String, Value>> = None;

	// Act
	form.submit_with(|payload| {
		calls += 1;
		seen = Some(payload.clone());
	})
	.unwrap();

	// Assert
	assert_eq!(calls, 1);
	let payload = seen.unwrap();
	// Groups flatten away: every non-group field name is a top-level key
	assert_eq!(payload.len(), 5);
	assert_eq!(payload["customer_email"], json!("alice@example.com"));
	assert_eq!(payload["pickup_date"], json!("2025-08-10"));
	assert_eq!(payload["return_date"], json!("2025-08-15"));
	assert_eq!(payload["drivers"], json!("1"));
	assert_eq!(payload["insurance"], json!(false));
}

#[rstest]
fn test_required_empty_always_errors() {
	// Arrange
	let mut form = FormState::new(booking_schema());
	form.open(&HashMap::new());
	form.set_value("customer_email", json!("")).unwrap();

	// Act
	let result = form.submit();

	// Assert
	assert!(result.is_err());
	assert_eq!(
		form.visible_error("customer_email"),
		Some("This field is required")
	);
}

#[rstest]
#[case("alice@example.com")]
#[case("a@b.co")]
#[case("x.y+z@cars.example.org")]
fn test_matching_email_never_yields_format_error(#[case] email: &str) {
	// Arrange
	let mut form = FormState::new(booking_schema());
	form.open(&HashMap::new());
	fill_valid(&mut form);
	form.set_value("customer_email", json!(email)).unwrap();

	// Act
	let result = form.submit();

	// Assert
	assert!(result.is_ok(), "expected '{email}' to pass validation");
}

#[rstest]
fn test_seeding_initial_beats_default_beats_empty() {
	// Arrange
	let mut initial = HashMap::new();
	initial.insert("drivers".to_string(), json!("2"));

	let mut form = FormState::new(booking_schema());

	// Act
	form.open(&initial);

	// Assert: initial data wins for drivers, the declared default is
	// unused; fields without either seed empty
	assert_eq!(form.value("drivers"), Some(&json!("2")));
	assert_eq!(form.value("customer_email"), Some(&json!("")));
	assert_eq!(form.value("insurance"), Some(&json!(false)));
}

#[rstest]
fn test_group_fields_validate_like_flat_fields() {
	// Arrange: pickup_date lives inside a group
	let mut form = FormState::new(booking_schema());
	form.open(&HashMap::new());
	form.set_value("pickup_date", json!("sometime")).unwrap();
	form.blur("pickup_date");

	// Assert
	assert_eq!(form.visible_error("pickup_date"), Some("Enter a valid date"));
}
