//! MCP request handling: routes JSON-RPC messages to the tool registry.

use std::sync::Arc;

use serde_json::{json, Value};
use svgl_tools::ToolRegistry;
use tracing::{debug, warn};

use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerCapabilities,
    ServerInfo, ToolListResult, ToolsCapability, INTERNAL_ERROR, INVALID_PARAMS,
    MCP_PROTOCOL_VERSION, METHOD_NOT_FOUND, PARSE_ERROR,
};

pub const SERVER_NAME: &str = "svgl-mcp-server";

/// The MCP server: one registry, no per-call state.
///
/// Tool-level failures never surface as JSON-RPC errors; they come back as
/// results with `isError: true`. JSON-RPC errors are reserved for protocol
/// faults (unparsable frame, unknown method, malformed params).
pub struct SvglMcpServer {
    registry: Arc<ToolRegistry>,
}

impl SvglMcpServer {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Handle one line from the transport. Returns the serialized response,
    /// or `None` when the message warrants no reply (a notification).
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(error) => {
                warn!("Unparsable frame: {}", error);
                let response =
                    JsonRpcResponse::error(Value::Null, PARSE_ERROR, format!("Parse error: {}", error));
                return serde_json::to_string(&response).ok();
            }
        };

        let response = self.handle_request(request).await?;
        match serde_json::to_string(&response) {
            Ok(serialized) => Some(serialized),
            Err(error) => {
                warn!("Failed to serialize response: {}", error);
                None
            }
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        // Notifications carry no id and get no reply.
        let id = match request.id {
            Some(id) => id,
            None => {
                debug!("Notification: {}", request.method);
                return None;
            }
        };

        let response = match request.method.as_str() {
            "initialize" => self.initialize(id),
            "ping" => JsonRpcResponse::result(id, json!({})),
            "tools/list" => self.list_tools(id),
            "tools/call" => self.call_tool(id, request.params).await,
            other => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        };

        Some(response)
    }

    fn initialize(&self, id: Value) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: MCP_PROTOCOL_VERSION.to_string(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: ServerCapabilities {
                tools: ToolsCapability::default(),
            },
        };
        Self::to_result(id, &result)
    }

    fn list_tools(&self, id: Value) -> JsonRpcResponse {
        let result = ToolListResult {
            tools: self.registry.definitions(),
        };
        Self::to_result(id, &result)
    }

    async fn call_tool(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams =
            match serde_json::from_value(params.unwrap_or_else(|| json!({}))) {
                Ok(params) => params,
                Err(error) => {
                    return JsonRpcResponse::error(
                        id,
                        INVALID_PARAMS,
                        format!("Invalid params: {}", error),
                    );
                }
            };

        let result = self.registry.call(&params.name, params.arguments).await;
        Self::to_result(id, &result)
    }

    fn to_result(id: Value, result: &impl serde::Serialize) -> JsonRpcResponse {
        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::result(id, value),
            Err(error) => JsonRpcResponse::error(
                id,
                INTERNAL_ERROR,
                format!("Internal error: {}", error),
            ),
        }
    }
}
