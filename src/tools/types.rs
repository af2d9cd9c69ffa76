//! Tool parameter schemas and results.

use serde::{Deserialize, Serialize};

/// JSON Schema-based parameter definition for a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameters {
    /// JSON Schema object describing the parameters.
    pub schema: serde_json::Value,
}

impl ToolParameters {
    /// Create an empty parameter schema (no parameters).
    pub fn empty() -> Self {
        Self::object().build()
    }

    /// Builder: create an object schema with properties.
    pub fn object() -> ParameterBuilder {
        ParameterBuilder {
            properties: serde_json::Map::new(),
            required: Vec::new(),
        }
    }

    /// The schema as a JSON object map.
    pub fn as_object(&self) -> serde_json::Map<String, serde_json::Value> {
        self.schema.as_object().cloned().unwrap_or_default()
    }
}

/// Builder for constructing tool parameter schemas.
pub struct ParameterBuilder {
    properties: serde_json::Map<String, serde_json::Value>,
    required: Vec<String>,
}

impl ParameterBuilder {
    fn property(mut self, name: &str, schema: serde_json::Value, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    /// Add a string property.
    pub fn string(self, name: &str, description: &str, required: bool) -> Self {
        self.property(
            name,
            serde_json::json!({ "type": "string", "description": description }),
            required,
        )
    }

    /// Add a boolean property with a default.
    pub fn boolean(self, name: &str, description: &str, default: bool) -> Self {
        self.property(
            name,
            serde_json::json!({
                "type": "boolean",
                "description": description,
                "default": default,
            }),
            false,
        )
    }

    /// Add an optional integer property bounded to `[min, max]`.
    pub fn integer_range(self, name: &str, description: &str, min: i64, max: i64, default: i64) -> Self {
        self.property(
            name,
            serde_json::json!({
                "type": "integer",
                "description": description,
                "minimum": min,
                "maximum": max,
                "default": default,
            }),
            false,
        )
    }

    /// Add an optional string property restricted to `values`.
    pub fn string_enum(self, name: &str, description: &str, values: &[&str], default: &str) -> Self {
        self.property(
            name,
            serde_json::json!({
                "type": "string",
                "description": description,
                "enum": values,
                "default": default,
            }),
            false,
        )
    }

    /// Add an optional integer property restricted to `values`.
    pub fn integer_enum(self, name: &str, description: &str, values: &[u32], default: u32) -> Self {
        self.property(
            name,
            serde_json::json!({
                "type": "integer",
                "description": description,
                "enum": values,
                "default": default,
            }),
            false,
        )
    }

    /// Build into ToolParameters.
    pub fn build(self) -> ToolParameters {
        ToolParameters {
            schema: serde_json::json!({
                "type": "object",
                "properties": self.properties,
                "required": self.required,
            }),
        }
    }
}

/// What a tool hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Human-readable status message.
    Text(String),
    /// Structured record or list.
    Json(serde_json::Value),
}

impl ToolOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    pub fn into_value(self) -> serde_json::Value {
        match self {
            Self::Text(text) => serde_json::Value::String(text),
            Self::Json(value) => value,
        }
    }
}
