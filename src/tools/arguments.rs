//! Typed access to tool call arguments.

use crate::error::TtsError;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone, Default)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Deserialize the entire arguments into a typed struct.
    ///
    /// Missing or `null` arguments deserialize as an empty object.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, TtsError> {
        let value = match &self.value {
            serde_json::Value::Null => serde_json::json!({}),
            other => other.clone(),
        };
        serde_json::from_value(value)
            .map_err(|e| TtsError::InvalidArgument(format!("Failed to deserialize arguments: {e}")))
    }
}

impl From<serde_json::Value> for ToolArguments {
    fn from(value: serde_json::Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Args {
        #[serde(default)]
        text: String,
        output_path: Option<String>,
    }

    #[test]
    fn null_arguments_deserialize_as_empty_object() {
        let args: Args = ToolArguments::new(serde_json::Value::Null).deserialize().unwrap();
        assert_eq!(args.text, "");
        assert_eq!(args.output_path, None);
    }

    #[test]
    fn wrong_shape_is_an_invalid_argument() {
        let err = ToolArguments::new(json!({ "text": 5 }))
            .deserialize::<Args>()
            .unwrap_err();
        assert!(matches!(err, TtsError::InvalidArgument(m) if m.contains("Failed to deserialize")));
    }
}
