//! Schema and violation types.

use serde::Serialize;
use serde_json::{Map, Value};

/// JSON value kinds a [`Constraint::Type`] can demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Integer,
    String,
    Boolean,
    Object,
}

impl JsonType {
    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Integer => "integer",
            JsonType::String => "string",
            JsonType::Boolean => "boolean",
            JsonType::Object => "object",
        }
    }

    /// Whether `value` is of this kind. Floats and integers beyond `i64` never
    /// count as integers.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            JsonType::Integer => value.is_i64(),
            JsonType::String => value.is_string(),
            JsonType::Boolean => value.is_boolean(),
            JsonType::Object => value.is_object(),
        }
    }
}

/// A single rule applied to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// The key must be present. A present `null` satisfies it.
    Required,
    /// Non-null values must be of the given kind.
    Type(JsonType),
    /// Rejects `null`, empty or whitespace-only strings, and empty arrays.
    NotBlank,
}

impl Constraint {
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::Type(_) => "type",
            Constraint::NotBlank => "not_blank",
        }
    }
}

/// Constraints for one named field, checked in declaration order.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraints: Vec<Constraint>,
}

impl FieldRule {
    pub fn new(field: &'static str, constraints: Vec<Constraint>) -> Self {
        Self { field, constraints }
    }

    pub fn is_required(&self) -> bool {
        self.constraints.contains(&Constraint::Required)
    }
}

/// Expected shape of a JSON object.
#[derive(Debug, Clone)]
pub struct Schema {
    pub fields: Vec<FieldRule>,
    /// When false, keys not named in `fields` are violations.
    pub allow_extra_fields: bool,
}

impl Schema {
    pub fn new(fields: Vec<FieldRule>) -> Self {
        Self {
            fields,
            allow_extra_fields: false,
        }
    }

    pub fn knows(&self, field: &str) -> bool {
        self.fields.iter().any(|rule| rule.field == field)
    }
}

/// A single field-level violation.
///
/// `parameters` carries diagnostic context (field name, offending value,
/// expected type) and is returned to the caller as-is.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub constraint: &'static str,
    pub message: String,
    pub parameters: Map<String, Value>,
}

impl FieldViolation {
    /// A violation of the document as a whole, e.g. a body that validated
    /// but could not be decoded into its target type.
    pub fn document(message: impl Into<String>) -> Self {
        Self {
            field: String::new(),
            constraint: "decode",
            message: message.into(),
            parameters: Map::new(),
        }
    }
}
