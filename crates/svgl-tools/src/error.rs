//! Error types for tool operations.

use thiserror::Error;

/// Errors that can occur while dispatching or executing a tool.
///
/// Every variant is normalized into the same `{isError: true}` result
/// envelope at the registry boundary; the structured kind survives only
/// in logs.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The SVGL API answered with a non-success status.
    #[error("API request failed: {status} {status_text}")]
    UpstreamStatus { status: u16, status_text: String },

    /// HTTP request failed (DNS, connection, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_names_the_code() {
        let error = ToolError::UpstreamStatus {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "API request failed: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_missing_parameter_names_the_parameter() {
        let error = ToolError::MissingParameter("category".to_string());
        assert_eq!(error.to_string(), "Missing required parameter: category");
    }
}
