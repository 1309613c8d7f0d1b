//! Tool trait definition and call envelope types.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
///
/// A thin typed view over the JSON argument map of a tool call. Required
/// parameters that are absent or `null` fail with
/// [`ToolError::MissingParameter`] before any network call is made.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self { params }
    }

    fn present(&self, key: &str) -> Option<&Value> {
        match self.params.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    /// Get a required string parameter.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.present(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            })
    }

    /// Get an optional string parameter.
    pub fn get_string_opt(&self, key: &str) -> Option<String> {
        self.present(key)?.as_str().map(|s| s.to_string())
    }

    /// Get an optional numeric parameter.
    ///
    /// The number is returned as-is; range constraints declared in a tool's
    /// input schema are not re-checked here, the upstream API owns those.
    pub fn get_number_opt(&self, key: &str) -> Result<Option<Number>, ToolError> {
        match self.present(key) {
            Some(Value::Number(n)) => Ok(Some(n.clone())),
            Some(_) => Err(ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected number".to_string(),
            }),
            None => Ok(None),
        }
    }

    /// Get an optional boolean parameter with a default value.
    ///
    /// Any value that is not a JSON boolean (absent, null, a string) falls
    /// back to the default.
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.params
            .get(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }
}

/// Output from a successful tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The result content (raw text or serialized JSON).
    pub content: String,
}

impl ToolOutput {
    /// Create an output carrying the given text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A tool advertised to MCP clients: name, description, JSON input schema.
///
/// Serialized with the MCP wire names (`inputSchema`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// A single content block in a tool call result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolContent {
    /// Create a `text` content block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// The result envelope of a tool call.
///
/// `isError` is omitted on success and `true` on failure; the message text
/// inside `content` is the only diagnostic surface callers get.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    /// Create a successful result with a single text block.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            is_error: None,
        }
    }

    /// Create a failed result. The message is prefixed with `Error: `.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(format!("Error: {}", message.into()))],
            is_error: Some(true),
        }
    }

    /// Whether this result reports a failure.
    pub fn is_error(&self) -> bool {
        self.is_error == Some(true)
    }
}

/// Trait for tools dispatched by the registry.
///
/// Each tool owns its name, description, and input schema, and translates
/// one call into exactly one request against the SVGL API.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's arguments.
    fn input_schema(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> ToolArgs {
        ToolArgs::new(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_get_string_missing_or_null() {
        let empty = args(json!({}));
        assert!(matches!(
            empty.get_string("category"),
            Err(ToolError::MissingParameter(_))
        ));

        let null = args(json!({ "category": null }));
        assert!(matches!(
            null.get_string("category"),
            Err(ToolError::MissingParameter(_))
        ));
    }

    #[test]
    fn test_get_string_wrong_type() {
        let bad = args(json!({ "category": 42 }));
        assert!(matches!(
            bad.get_string("category"),
            Err(ToolError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_get_bool_or_defaults_unless_literal_false() {
        assert!(args(json!({})).get_bool_or("optimize", true));
        assert!(args(json!({ "optimize": null })).get_bool_or("optimize", true));
        assert!(args(json!({ "optimize": "false" })).get_bool_or("optimize", true));
        assert!(args(json!({ "optimize": true })).get_bool_or("optimize", true));
        assert!(!args(json!({ "optimize": false })).get_bool_or("optimize", true));
    }

    #[test]
    fn test_get_number_opt_forwards_value() {
        let present = args(json!({ "limit": 10 }));
        assert_eq!(
            present.get_number_opt("limit").unwrap().unwrap().to_string(),
            "10"
        );
        assert!(args(json!({})).get_number_opt("limit").unwrap().is_none());
    }

    #[test]
    fn test_result_envelope_wire_names() {
        let ok = CallToolResult::success("hello");
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "hello");
        assert!(value.get("isError").is_none());

        let err = CallToolResult::error("boom");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["isError"], true);
        assert_eq!(value["content"][0]["text"], "Error: boom");
    }
}
