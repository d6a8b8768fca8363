//! Routes a named tool invocation to the weather backend.

use std::str::FromStr;

use rmcp::model::{CallToolRequestParam, CallToolResult, Content, ErrorCode};
use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::arguments::{ArgumentError, ToolArguments};
use crate::backend::WeatherBackend;
use crate::constants::{GET_ALERTS, GET_FORECAST};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetAlerts,
    GetForecast,
}

impl ToolName {
    pub const ALL: [ToolName; 2] = [ToolName::GetAlerts, ToolName::GetForecast];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetAlerts => GET_ALERTS,
            ToolName::GetForecast => GET_FORECAST,
        }
    }
}

impl FromStr for ToolName {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GET_ALERTS => Ok(ToolName::GetAlerts),
            GET_FORECAST => Ok(ToolName::GetForecast),
            other => Err(DispatchError::ToolNotFound(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Invalid arguments: {0}")]
    Arguments(#[from] ArgumentError),

    #[error("Weather backend failed: {0:#}")]
    Backend(#[from] anyhow::Error),
}

impl From<DispatchError> for McpError {
    fn from(err: DispatchError) -> Self {
        let code = match &err {
            DispatchError::ToolNotFound(_) => ErrorCode::METHOD_NOT_FOUND,
            DispatchError::Arguments(_) => ErrorCode::INVALID_PARAMS,
            DispatchError::Backend(_) => ErrorCode::INTERNAL_ERROR,
        };
        McpError::new(code, err.to_string(), None)
    }
}

/// A resolved tool call: known tool, narrowed arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub tool: ToolName,
    pub arguments: ToolArguments,
}

impl Invocation {
    /// Resolves the tool name before looking at the arguments, so an unknown
    /// tool is always reported as not found.
    pub fn parse(request: CallToolRequestParam) -> Result<Self, DispatchError> {
        let tool = request.name.parse::<ToolName>()?;
        let arguments = ToolArguments::from_json(request.arguments.unwrap_or_default());
        Ok(Self { tool, arguments })
    }
}

/// Runs one invocation against the backend and wraps its text as the result.
pub async fn dispatch(
    backend: &dyn WeatherBackend,
    invocation: &Invocation,
) -> Result<CallToolResult, DispatchError> {
    let args = &invocation.arguments;

    let text = match invocation.tool {
        ToolName::GetAlerts => {
            let state = args.string("state")?;
            tracing::info!("Getting alerts for state: {}", state);
            backend.get_alerts(state).await?
        }
        ToolName::GetForecast => {
            let latitude = args.number("latitude")?;
            let longitude = args.number("longitude")?;
            tracing::info!(
                "Getting forecast for coordinates: {}, {}",
                latitude,
                longitude
            );
            backend.get_forecast(latitude, longitude).await?
        }
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
