//! Check tool call arguments against the tool's JSON Schema before the
//! handler runs.

use serde_json::Value;

use crate::error::{Result, TtsError};

/// Validate arguments against an object schema.
///
/// Covers what the tool schemas use: object shape, required fields,
/// primitive property types and `enum` membership. Optional properties may be
/// `null`, which handlers treat as absent. Unknown properties are ignored.
pub fn validate_arguments(args: &Value, schema: &Value) -> Result<()> {
    let Some(obj) = args.as_object() else {
        if args.is_null() {
            return check_required(&serde_json::Map::new(), schema);
        }
        return Err(invalid(format!(
            "expected object arguments, got {}",
            json_type_name(args)
        )));
    };

    check_required(obj, schema)?;

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };
    for (key, value) in obj {
        let Some(prop_schema) = properties.get(key) else {
            continue;
        };
        if value.is_null() && !is_required(schema, key) {
            continue;
        }
        if let Some(expected) = prop_schema.get("type").and_then(Value::as_str) {
            if !value_matches_type(value, expected) {
                return Err(invalid(format!(
                    "field '{key}' expected type '{expected}', got {}",
                    json_type_name(value)
                )));
            }
        }
        if let Some(allowed) = prop_schema.get("enum").and_then(Value::as_array) {
            if !allowed.contains(value) {
                let choices: Vec<String> = allowed.iter().map(ToString::to_string).collect();
                return Err(invalid(format!(
                    "field '{key}' must be one of {}, got {value}",
                    choices.join(", ")
                )));
            }
        }
    }

    Ok(())
}

fn check_required(obj: &serde_json::Map<String, Value>, schema: &Value) -> Result<()> {
    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str);
    for name in required {
        if obj.get(name).map_or(true, Value::is_null) {
            return Err(invalid(format!("missing required field '{name}'")));
        }
    }
    Ok(())
}

fn is_required(schema: &Value, key: &str) -> bool {
    schema
        .get("required")
        .and_then(Value::as_array)
        .is_some_and(|required| required.iter().any(|v| v.as_str() == Some(key)))
}

fn invalid(message: String) -> TtsError {
    TtsError::InvalidArgument(message)
}

fn value_matches_type(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => {
            value.is_i64()
                || value.is_u64()
                || value.as_f64().is_some_and(|number| number.fract() == 0.0)
        }
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        _ => true,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
