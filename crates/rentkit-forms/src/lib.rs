//! Form processing and validation for rentkit
//!
//! This crate renders nothing: it owns the data side of the generic
//! form view. A declarative field list (flat or grouped) produces a
//! controlled working-value map, field-level and submit-time
//! validation, a blur-aware error display policy, and a flat
//! name-to-value submission payload.
//!
//! Validation per field short-circuits in a fixed order: required-but-
//! empty, then the kind-specific check (email pattern, URL parse,
//! numeric bounds, date bounds, choice membership), then the optional
//! pattern, then the optional custom validator. Custom validators see
//! the whole form snapshot so cross-field rules (password confirmation,
//! date ordering) stay expressible.

pub mod field;
pub mod form;
pub mod schema;
pub mod validators;

pub use field::{Choice, FieldError, FieldKind, FieldResult, FieldSpec};
pub use form::{FormError, FormResult, FormState};
pub use schema::{FormSchema, SchemaNode};
