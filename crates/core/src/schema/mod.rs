//! Declarative entity schemas and their evaluator.
//!
//! A [`Schema`] lists the fields an entity accepts together with their
//! constraints (required, type, max length, enumerated values, numeric range,
//! format) and defaults. The evaluator is pure logic: it normalizes a JSON
//! payload against a schema and reports every field violation at once, so
//! the persistence layer only ever sees payloads that already satisfy the
//! declared constraints.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate, normalize, validate_payload};
pub use rules::{
    DefaultValue, FieldKind, FieldSpec, FieldViolation, Format, Schema, ValidationResult,
};
