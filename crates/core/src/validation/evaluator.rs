//! Schema evaluator — pure logic, no database access.

use serde_json::{Map, Value};

use super::rules::{Constraint, FieldRule, FieldViolation, JsonType, Schema};

/// Check `data` against `schema`, returning every violation found.
///
/// Declared fields are checked in schema order, then unexpected keys. A
/// `null` document passes: "no data" is the caller's concern, not a shape
/// error.
pub fn validate(data: &Value, schema: &Schema) -> Vec<FieldViolation> {
    let object = match data {
        Value::Null => return Vec::new(),
        Value::Object(object) => object,
        other => {
            return vec![type_violation("", JsonType::Object, other)];
        }
    };

    let mut violations = Vec::new();

    for rule in &schema.fields {
        match object.get(rule.field) {
            Some(value) => violations.extend(check_field(rule, value)),
            None if rule.is_required() => violations.push(missing(rule.field)),
            None => {}
        }
    }

    if !schema.allow_extra_fields {
        violations.extend(
            object
                .keys()
                .filter(|key| !schema.knows(key))
                .map(|key| unexpected(key)),
        );
    }

    violations
}

fn check_field(rule: &FieldRule, value: &Value) -> Vec<FieldViolation> {
    rule.constraints
        .iter()
        .filter_map(|constraint| match constraint {
            Constraint::Required => None,
            Constraint::Type(_) if value.is_null() => None,
            Constraint::Type(expected) if expected.matches(value) => None,
            Constraint::Type(expected) => Some(type_violation(rule.field, *expected, value)),
            Constraint::NotBlank if is_blank(value) => Some(blank(rule.field, value)),
            Constraint::NotBlank => None,
        })
        .collect()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn parameters(pairs: [(&str, Value); 2]) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn type_violation(field: &str, expected: JsonType, value: &Value) -> FieldViolation {
    let mut params = parameters([
        ("field", Value::String(field.to_string())),
        ("value", value.clone()),
    ]);
    params.insert("type".into(), Value::String(expected.as_str().into()));
    FieldViolation {
        field: field.to_string(),
        constraint: Constraint::Type(expected).name(),
        message: format!("This value should be of type {}.", expected.as_str()),
        parameters: params,
    }
}

fn blank(field: &str, value: &Value) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        constraint: Constraint::NotBlank.name(),
        message: "This value should not be blank.".to_string(),
        parameters: parameters([
            ("field", Value::String(field.to_string())),
            ("value", value.clone()),
        ]),
    }
}

fn missing(field: &str) -> FieldViolation {
    let mut params = Map::new();
    params.insert("field".into(), Value::String(field.to_string()));
    FieldViolation {
        field: field.to_string(),
        constraint: Constraint::Required.name(),
        message: "This field is missing.".to_string(),
        parameters: params,
    }
}

fn unexpected(field: &str) -> FieldViolation {
    let mut params = Map::new();
    params.insert("field".into(), Value::String(field.to_string()));
    FieldViolation {
        field: field.to_string(),
        constraint: "extra_field",
        message: "This field was not expected.".to_string(),
        parameters: params,
    }
}
