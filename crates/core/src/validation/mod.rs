//! Payload validation.
//!
//! A [`Schema`] is plain data describing the expected shape of a JSON
//! object; [`validate`] checks a decoded body against it without any
//! knowledge of HTTP or storage.

pub mod evaluator;
pub mod rules;

pub use evaluator::validate;
pub use rules::{Constraint, FieldRule, FieldViolation, JsonType, Schema};
