//! Insert validation over raw JSON candidates.
//!
//! Validation semantics:
//! - The candidate must be a JSON object
//! - All required contract fields must be present
//! - No undeclared fields
//! - No null values
//! - Field values must satisfy their semantic type
//!
//! Validation is pure, deterministic and total: every field failure in the
//! candidate is reported, in field-path order. The successful result is a
//! normalized insert value (strings trimmed, emails lowercased, references in
//! canonical UUID form) containing exactly the contract fields that were
//! supplied. Re-validating a normalized value yields it unchanged.

use std::sync::OnceLock;

use chrono::DateTime;
use regex::Regex;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::errors::{FieldFailure, ValidationErrors, ValidationResult};
use super::registry::insert_schema;
use super::types::{EntityKind, FieldType, Fields};

/// Validates a raw candidate against the insert contract of `kind`.
///
/// Returns the normalized insert value, or a `ValidationErrors` carrying
/// every field failure found.
pub fn validate_insert(kind: EntityKind, raw: &Value) -> ValidationResult<Value> {
    let schema = insert_schema(kind);

    let obj = match raw.as_object() {
        Some(obj) => obj,
        None => {
            return Err(ValidationErrors::new(
                kind,
                vec![FieldFailure::new(
                    "$root",
                    "object",
                    json_type_name(raw),
                )],
            ));
        }
    };

    let (normalized, failures) = validate_object(obj, &schema.fields, "");
    if failures.is_empty() {
        Ok(Value::Object(normalized))
    } else {
        Err(ValidationErrors::new(kind, failures))
    }
}

/// Walks one object level against its field definitions.
///
/// Returns the normalized fields that validated plus every failure found at
/// this level and below. Failures are ordered: undeclared fields first (in
/// candidate key order, which serde_json keeps sorted), then declared fields
/// in contract order.
fn validate_object(
    obj: &Map<String, Value>,
    fields: &Fields,
    path_prefix: &str,
) -> (Map<String, Value>, Vec<FieldFailure>) {
    let mut normalized = Map::new();
    let mut failures = Vec::new();

    for key in obj.keys() {
        if !fields.contains_key(key) {
            failures.push(FieldFailure::undeclared_field(make_path(path_prefix, key)));
        }
    }

    for (name, def) in fields {
        let field_path = make_path(path_prefix, name);
        match obj.get(name) {
            None => {
                if def.required {
                    failures.push(FieldFailure::missing_field(field_path));
                }
            }
            Some(Value::Null) => {
                failures.push(FieldFailure::null_value(field_path));
            }
            Some(value) => match validate_value(value, &def.field_type, &field_path) {
                Ok(norm) => {
                    normalized.insert(name.clone(), norm);
                }
                Err(mut field_failures) => failures.append(&mut field_failures),
            },
        }
    }

    (normalized, failures)
}

/// Validates a single value against its semantic type, returning the
/// normalized value or the failures it produced.
fn validate_value(
    value: &Value,
    expected: &FieldType,
    field_path: &str,
) -> Result<Value, Vec<FieldFailure>> {
    match expected {
        FieldType::Text { min_len } => {
            let s = require_string(value, field_path, "a string")?;
            let trimmed = s.trim();
            let len = trimmed.chars().count();
            if len < *min_len {
                return Err(vec![FieldFailure::new(
                    field_path,
                    format!("text with at least {} character{}", min_len, plural(*min_len)),
                    format!("{} character{}", len, plural(len)),
                )]);
            }
            Ok(Value::String(trimmed.to_string()))
        }
        FieldType::Email => {
            let s = require_string(value, field_path, "an email address")?;
            let normalized = s.trim().to_ascii_lowercase();
            if !email_regex().is_match(&normalized) {
                return Err(vec![FieldFailure::new(
                    field_path,
                    "an email address",
                    format!("'{}'", s.trim()),
                )]);
            }
            Ok(Value::String(normalized))
        }
        FieldType::Positive => match value.as_i64() {
            Some(n) if n > 0 => Ok(Value::from(n)),
            _ => Err(vec![FieldFailure::new(
                field_path,
                "an integer greater than zero",
                value.to_string(),
            )]),
        },
        FieldType::Timestamp => {
            let s = require_string(value, field_path, "an RFC 3339 timestamp")?;
            let trimmed = s.trim();
            if DateTime::parse_from_rfc3339(trimmed).is_err() {
                return Err(vec![FieldFailure::new(
                    field_path,
                    "an RFC 3339 timestamp",
                    format!("'{}'", trimmed),
                )]);
            }
            Ok(Value::String(trimmed.to_string()))
        }
        FieldType::Enumerated { allowed } => {
            let s = require_string(value, field_path, "an enumerated value")?;
            if !allowed.iter().any(|candidate| *candidate == s) {
                return Err(vec![FieldFailure::new(
                    field_path,
                    format!("one of [{}]", allowed.join(", ")),
                    format!("'{}'", s),
                )]);
            }
            Ok(Value::String(s.to_string()))
        }
        FieldType::StringList { min_items } => {
            let arr = match value.as_array() {
                Some(arr) => arr,
                None => {
                    return Err(vec![FieldFailure::new(
                        field_path,
                        "a list of strings",
                        json_type_name(value),
                    )]);
                }
            };

            let mut failures = Vec::new();
            let mut items = Vec::with_capacity(arr.len());
            for (i, elem) in arr.iter().enumerate() {
                let elem_path = format!("{}[{}]", field_path, i);
                match elem.as_str() {
                    Some(s) if !s.trim().is_empty() => {
                        items.push(Value::String(s.trim().to_string()));
                    }
                    Some(_) => {
                        failures.push(FieldFailure::new(
                            elem_path,
                            "a non-empty string",
                            "empty string",
                        ));
                    }
                    None => {
                        failures.push(FieldFailure::new(
                            elem_path,
                            "a non-empty string",
                            json_type_name(elem),
                        ));
                    }
                }
            }
            if failures.is_empty() && items.len() < *min_items {
                failures.push(FieldFailure::new(
                    field_path,
                    format!("at least {} item{}", min_items, plural(*min_items)),
                    format!("{} item{}", items.len(), plural(items.len())),
                ));
            }
            if failures.is_empty() {
                Ok(Value::Array(items))
            } else {
                Err(failures)
            }
        }
        FieldType::Reference { entity } => {
            let expected_msg = format!("a UUID referencing a {}", entity);
            let s = require_string(value, field_path, &expected_msg)?;
            match Uuid::parse_str(s.trim()) {
                Ok(id) => Ok(Value::String(id.to_string())),
                Err(_) => Err(vec![FieldFailure::new(
                    field_path,
                    expected_msg,
                    format!("'{}'", s.trim()),
                )]),
            }
        }
        FieldType::Object { fields } => {
            let obj = match value.as_object() {
                Some(obj) => obj,
                None => {
                    return Err(vec![FieldFailure::new(
                        field_path,
                        "object",
                        json_type_name(value),
                    )]);
                }
            };
            let (normalized, failures) = validate_object(obj, fields, field_path);
            if failures.is_empty() {
                Ok(Value::Object(normalized))
            } else {
                Err(failures)
            }
        }
    }
}

fn require_string<'a>(
    value: &'a Value,
    field_path: &str,
    expected: &str,
) -> Result<&'a str, Vec<FieldFailure>> {
    value.as_str().ok_or_else(|| {
        vec![FieldFailure::new(
            field_path,
            expected,
            json_type_name(value),
        )]
    })
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$")
            .unwrap_or_else(|e| panic!("email pattern must compile: {}", e))
    })
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
