//! Declarative form validation
//!
//! A small schema layer checked against submitted form data: per-field
//! rules plus cross-field refinements. Validation failures are reported
//! per field as a mapping from field name to human-readable messages;
//! they are ordinary data, not errors, and never cross the page boundary
//! as exceptions.
//!
//! - `schema`: the generic rule container
//! - `rules`: reusable field-level checks
//! - `signup`: the signup form schema and its value types

mod field_errors;
pub mod rules;
mod schema;
pub mod signup;

pub use field_errors::FieldErrors;
pub use schema::Schema;
