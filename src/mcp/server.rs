//! MCP server exposing the tool registry.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ErrorData as McpError, Implementation,
    JsonObject, ListToolsResult, PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ServerHandler, ServiceExt};

use crate::error::TtsError;
use crate::tools::{speech_tools, SpeechService, Tool, ToolArguments, ToolOutput, ToolRegistry};

const INSTRUCTIONS: &str = "Text-to-speech backed by Fish Audio. Use text_to_speech for a quick \
mp3, advanced_text_to_speech to pick format, bitrate, chunk length, normalization and latency, \
get_model_info to see the configured voice model, and get_available_models to list models. \
Synthesis tools reply with the path of the written audio file or a failure message.";

/// MCP server handler backed by a [`ToolRegistry`].
#[derive(Debug, Clone)]
pub struct SpeechServer {
    registry: ToolRegistry,
}

impl SpeechServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Server exposing the four speech tools.
    pub fn from_service(service: SpeechService) -> Self {
        Self::new(ToolRegistry::new(speech_tools(service)))
    }

    /// Tool descriptors advertised on `tools/list`.
    pub fn tool_descriptors(&self) -> Vec<rmcp::model::Tool> {
        self.registry
            .tools()
            .iter()
            .map(|tool| to_mcp_tool(tool.as_ref()))
            .collect()
    }

    /// Handle one `tools/call`.
    ///
    /// Only an unknown tool name is a protocol error; every tool outcome,
    /// failures included, is a regular result.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let args = ToolArguments::new(
            arguments
                .map(serde_json::Value::Object)
                .unwrap_or(serde_json::Value::Null),
        );
        tracing::debug!(tool = name, "tool call");
        match self.registry.call(name, args).await {
            Some(output) => Ok(to_call_result(output)),
            None => Err(McpError::invalid_params(format!("unknown tool: {name}"), None)),
        }
    }

    /// Serve over stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> Result<(), TtsError> {
        let running = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TtsError::Server(format!("MCP initialization failed: {e}")))?;
        tracing::info!("mcp server ready on stdio");
        let reason = running
            .waiting()
            .await
            .map_err(|e| TtsError::Server(format!("MCP service task failed: {e}")))?;
        tracing::info!(?reason, "mcp server stopped");
        Ok(())
    }
}

impl ServerHandler for SpeechServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tool_descriptors()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments).await
    }
}

fn to_mcp_tool(tool: &dyn Tool) -> rmcp::model::Tool {
    rmcp::model::Tool::new(
        tool.name().to_string(),
        tool.description().to_string(),
        Arc::new(tool.parameters().as_object()),
    )
}

fn to_call_result(output: ToolOutput) -> CallToolResult {
    match output {
        ToolOutput::Text(text) => CallToolResult::success(vec![Content::text(text)]),
        ToolOutput::Json(value) if value.is_object() => CallToolResult::structured(value),
        ToolOutput::Json(value) => CallToolResult::success(vec![Content::text(value.to_string())]),
    }
}
