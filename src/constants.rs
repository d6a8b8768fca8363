/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-tool/1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Address the demonstration server listens on
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5001";

/// Path the MCP service is mounted under
pub const MCP_ENDPOINT: &str = "/mcp";

/// Number of forecast periods included in a forecast
pub const FORECAST_PERIODS: usize = 5;

/// Text returned when a state has no active alerts
pub const NO_ALERTS: &str = "No active alerts for this state.";

/// Tool names exposed over MCP
pub const GET_ALERTS: &str = "GetAlerts";
pub const GET_FORECAST: &str = "GetForecast";
