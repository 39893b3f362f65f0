//! Tool Input Validation
//!
//! Evaluates a tool's input schema against raw call arguments before the
//! handler runs. Only the schema subset the catalog actually uses is
//! supported: flat objects with typed properties, `required` lists,
//! numeric `minimum`/`maximum` bounds, and `additionalProperties: false`.
//! A validation failure short-circuits the dispatch; the handler never
//! sees partially valid input.

use crate::mcp::error::McpError;
use serde_json::{Map, Value};

/// Validates `args` against `schema`, returning `McpError::InvalidArguments`
/// on the first violation found.
pub fn validate(schema: &Value, args: &Value) -> Result<(), McpError> {
    let Some(schema_obj) = schema.as_object() else {
        return Ok(());
    };

    let empty = Map::new();
    let args_obj = match args {
        Value::Object(map) => map,
        // Tools without required parameters accept an absent argument object.
        Value::Null => &empty,
        other => {
            return Err(McpError::InvalidArguments(format!(
                "arguments must be an object, got {}",
                type_name(other)
            )))
        }
    };

    if let Some(required) = schema_obj.get("required").and_then(Value::as_array) {
        for field in required.iter().filter_map(Value::as_str) {
            if !args_obj.contains_key(field) {
                return Err(McpError::InvalidArguments(format!(
                    "missing required field '{field}'"
                )));
            }
        }
    }

    let Some(properties) = schema_obj.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };

    for (name, prop) in properties {
        if let Some(value) = args_obj.get(name) {
            check_property(name, prop, value)?;
        }
    }

    if schema_obj.get("additionalProperties").and_then(Value::as_bool) == Some(false) {
        for key in args_obj.keys() {
            if !properties.contains_key(key) {
                return Err(McpError::InvalidArguments(format!(
                    "unexpected field '{key}'"
                )));
            }
        }
    }

    Ok(())
}

/// Checks one property value against its declared type and bounds.
fn check_property(name: &str, prop: &Value, value: &Value) -> Result<(), McpError> {
    match prop.get("type").and_then(Value::as_str) {
        Some("integer") => {
            let Some(n) = value.as_i64() else {
                return Err(McpError::InvalidArguments(format!(
                    "field '{name}' must be an integer"
                )));
            };
            check_bounds(name, n as f64, prop)
        }
        Some("number") => {
            let Some(n) = value.as_f64() else {
                return Err(McpError::InvalidArguments(format!(
                    "field '{name}' must be a number"
                )));
            };
            check_bounds(name, n, prop)
        }
        Some("string") => {
            if !value.is_string() {
                return Err(McpError::InvalidArguments(format!(
                    "field '{name}' must be a string"
                )));
            }
            Ok(())
        }
        Some("boolean") => {
            if !value.is_boolean() {
                return Err(McpError::InvalidArguments(format!(
                    "field '{name}' must be a boolean"
                )));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn check_bounds(name: &str, n: f64, prop: &Value) -> Result<(), McpError> {
    let min = prop.get("minimum").and_then(Value::as_f64);
    let max = prop.get("maximum").and_then(Value::as_f64);

    if min.is_some_and(|m| n < m) || max.is_some_and(|m| n > m) {
        let bounds = match (min, max) {
            (Some(lo), Some(hi)) => format!("between {lo} and {hi}"),
            (Some(lo), None) => format!("at least {lo}"),
            (None, Some(hi)) => format!("at most {hi}"),
            (None, None) => unreachable!(),
        };
        return Err(McpError::InvalidArguments(format!(
            "field '{name}' must be {bounds}, got {n}"
        )));
    }
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
