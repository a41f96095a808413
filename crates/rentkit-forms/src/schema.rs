//! Form schemas: flat field lists with optional layout groups
//!
//! Groups exist purely for layout. Validation and the submission
//! payload flatten them away, so a grouped schema behaves exactly like
//! the equivalent flat one.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::field::FieldSpec;

/// One entry of a form schema: a field, or a labelled group of fields
#[derive(Debug, Clone)]
pub enum SchemaNode {
	/// A single field
	Field(FieldSpec),
	/// A layout-only group of fields
	Group {
		/// Group heading
		label: String,
		/// The grouped fields
		fields: Vec<FieldSpec>,
	},
}

/// An ordered form schema
///
/// # Example
///
/// ```rust
/// use rentkit_forms::{FieldKind, FieldSpec, FormSchema, SchemaNode};
///
/// let schema = FormSchema::new(vec![
///     SchemaNode::Field(FieldSpec::new("make", "Make", FieldKind::Text).required()),
///     SchemaNode::Group {
///         label: "Contact".to_string(),
///         fields: vec![FieldSpec::new("email", "Email", FieldKind::Email)],
///     },
/// ]);
/// // Groups flatten away
/// assert_eq!(schema.fields().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FormSchema {
	nodes: Vec<SchemaNode>,
}

impl FormSchema {
	/// Creates a schema from its nodes
	pub fn new(nodes: Vec<SchemaNode>) -> Self {
		Self { nodes }
	}

	/// The schema nodes in declaration order (for layout)
	pub fn nodes(&self) -> &[SchemaNode] {
		&self.nodes
	}

	/// Every field in declaration order, groups flattened
	pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
		self.nodes.iter().flat_map(|node| match node {
			SchemaNode::Field(field) => std::slice::from_ref(field).iter(),
			SchemaNode::Group { fields, .. } => fields.iter(),
		})
	}

	/// Looks up a field by name
	pub fn field(&self, name: &str) -> Option<&FieldSpec> {
		self.fields().find(|f| f.name() == name)
	}

	/// Number of fields, groups flattened
	pub fn len(&self) -> usize {
		self.fields().count()
	}

	/// Whether the schema declares no fields
	pub fn is_empty(&self) -> bool {
		self.fields().next().is_none()
	}

	/// Identity hash over field names, kinds, and requiredness
	///
	/// Used to detect "the schema itself changed" so an open form
	/// re-seeds only when it must, not on every parent re-render.
	pub fn fingerprint(&self) -> u64 {
		let mut hasher = DefaultHasher::new();
		for field in self.fields() {
			field.name().hash(&mut hasher);
			field.kind().tag().hash(&mut hasher);
			field.is_required().hash(&mut hasher);
		}
		hasher.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldKind;

	fn grouped_schema() -> FormSchema {
		FormSchema::new(vec![
			SchemaNode::Field(FieldSpec::new("make", "Make", FieldKind::Text)),
			SchemaNode::Group {
				label: "Dates".to_string(),
				fields: vec![
					FieldSpec::new("pickup", "Pickup", FieldKind::Text),
					FieldSpec::new("return", "Return", FieldKind::Text),
				],
			},
		])
	}

	#[test]
	fn test_fields_flatten_groups_in_order() {
		let schema = grouped_schema();
		let names: Vec<&str> = schema.fields().map(|f| f.name()).collect();
		assert_eq!(names, vec!["make", "pickup", "return"]);
		assert_eq!(schema.len(), 3);
	}

	#[test]
	fn test_field_lookup_reaches_into_groups() {
		let schema = grouped_schema();
		assert!(schema.field("return").is_some());
		assert!(schema.field("missing").is_none());
	}

	#[test]
	fn test_fingerprint_changes_with_schema() {
		let a = grouped_schema();
		let b = FormSchema::new(vec![SchemaNode::Field(FieldSpec::new(
			"make",
			"Make",
			FieldKind::Text,
		))]);
		assert_ne!(a.fingerprint(), b.fingerprint());
		assert_eq!(a.fingerprint(), grouped_schema().fingerprint());
	}
}
