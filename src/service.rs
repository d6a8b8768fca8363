use std::sync::Arc;

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, JsonObject, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::{RequestContext, RoleServer},
    ErrorData as McpError,
};
use schemars::{schema_for, JsonSchema};

use crate::backend::WeatherBackend;
use crate::dispatcher::{dispatch, Invocation, ToolName};
use crate::models::{GetAlertsRequest, GetForecastRequest};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    backend: Arc<dyn WeatherBackend>,
}

impl Weather {
    pub fn with_backend(backend: Arc<dyn WeatherBackend>) -> Self {
        Self { backend }
    }

    /// Describes the tools this server exposes
    pub fn tools() -> Result<Vec<Tool>, McpError> {
        ToolName::ALL
            .iter()
            .map(|tool| -> Result<Tool, McpError> {
                let (description, input_schema) = match tool {
                    ToolName::GetAlerts => (
                        "Get active weather alerts for a US state. Provide a two-letter state code (e.g., 'WA' for Washington, 'NY' for New York).",
                        to_schema::<GetAlertsRequest>()?,
                    ),
                    ToolName::GetForecast => (
                        "Get the weather forecast for a US location. Provide latitude and longitude (e.g., latitude: 47.7601, longitude: -122.2054).",
                        to_schema::<GetForecastRequest>()?,
                    ),
                };
                Ok(Tool {
                    name: tool.as_str().into(),
                    title: None,
                    description: Some(description.into()),
                    input_schema,
                    output_schema: None,
                    annotations: None,
                    icons: None,
                })
            })
            .collect()
    }
}

/// Converts a schemars schema into the JSON object MCP expects
fn to_schema<T: JsonSchema>() -> Result<Arc<JsonObject>, McpError> {
    let schema = schema_for!(T);
    let json_value = serde_json::to_value(schema).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize schema: {}", e), None)
    })?;
    let object = json_value
        .as_object()
        .ok_or_else(|| McpError::internal_error("Schema is not a JSON object", None))?
        .clone();
    Ok(Arc::new(object))
}

impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-rpc".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the National Weather Service API. \
                Provides weather alerts and forecasts for US locations."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: Self::tools()?,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let name = request.name.clone();

        let result = match Invocation::parse(request) {
            Ok(invocation) => dispatch(self.backend.as_ref(), &invocation).await,
            Err(err) => Err(err),
        };

        result.map_err(|err| {
            tracing::warn!("Tool call {} failed: {}", name, err);
            McpError::from(err)
        })
    }
}
