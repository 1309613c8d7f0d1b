//! Tool registry: lookup, dispatch, and error normalization.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::ToolError;
use crate::tool::{CallToolResult, Tool, ToolArgs, ToolDefinition, ToolOutput};

/// Registry of tools, dispatched by exact name.
///
/// The registry is built once at startup and is immutable afterwards;
/// insertion order is preserved, so `definitions()` returns the same
/// sequence on every call. It holds no per-call state, so concurrent
/// calls through a shared `Arc<ToolRegistry>` need no locking.
pub struct ToolRegistry {
    tools: IndexMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Register a tool.
    ///
    /// If a tool with the same name already exists, it will be replaced.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        info!("Registering tool: {}", name);
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get a list of registered tool names, in registration order.
    pub fn list_tools(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// The advertised tool definitions, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Execute a tool by name, returning the typed error on failure.
    pub async fn execute(
        &self,
        name: &str,
        params: HashMap<String, Value>,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        debug!("Executing tool '{}' with {} params", name, params.len());

        tool.execute(ToolArgs::new(params)).await
    }

    /// Dispatch a tool call and normalize any failure into the result
    /// envelope.
    ///
    /// This is the failure-containment boundary: validation errors, unknown
    /// tool names, upstream HTTP failures, and transport errors all come
    /// back as `{content: [..], isError: true}`. Nothing propagates past
    /// here, and the process survives to serve the next call.
    pub async fn call(&self, name: &str, arguments: HashMap<String, Value>) -> CallToolResult {
        match self.execute(name, arguments).await {
            Ok(output) => CallToolResult::success(output.content),
            Err(error) => {
                warn!("Tool '{}' failed: {}", name, error);
                CallToolResult::error(error.to_string())
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes back the input"
        }

        fn input_schema(&self) -> Value {
            json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string" }
                },
                "required": ["message"]
            })
        }

        async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
            let message = args.get_string("message")?;
            Ok(ToolOutput::text(message))
        }
    }

    #[tokio::test]
    async fn test_registry_basic() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        assert!(registry.has_tool("echo"));
        assert!(!registry.has_tool("nonexistent"));
        assert_eq!(registry.list_tools(), vec!["echo"]);
    }

    #[tokio::test]
    async fn test_definitions_carry_schema() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let definitions = registry.definitions();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name, "echo");
        assert_eq!(definitions[0].input_schema["required"][0], "message");
        // Unchanged on every call.
        assert_eq!(definitions, registry.definitions());
    }

    #[tokio::test]
    async fn test_registry_execute() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let mut params = HashMap::new();
        params.insert("message".to_string(), Value::String("hello".to_string()));

        let result = registry.execute("echo", params).await.unwrap();
        assert_eq!(result.content, "hello");
    }

    #[tokio::test]
    async fn test_registry_not_found() {
        let registry = ToolRegistry::new();
        let result = registry.execute("nonexistent", HashMap::new()).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_call_normalizes_unknown_tool() {
        let registry = ToolRegistry::new();
        let result = registry.call("nonexistent", HashMap::new()).await;
        assert!(result.is_error());
        assert_eq!(result.content[0].text, "Error: Tool not found: nonexistent");
    }

    #[tokio::test]
    async fn test_call_normalizes_validation_failure() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let result = registry.call("echo", HashMap::new()).await;
        assert!(result.is_error());
        assert_eq!(
            result.content[0].text,
            "Error: Missing required parameter: message"
        );
    }
}
