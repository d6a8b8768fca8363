use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AlertResponse {
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Deserialize)]
pub struct AlertProperties {
    pub event: String,
    #[serde(rename = "areaDesc")]
    pub area_desc: String,
    pub severity: String,
    pub description: Option<String>,
    pub instruction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

/// The points lookup only matters for where it says the forecast lives.
#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    pub forecast: String,
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: i32,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "shortForecast")]
    pub short_forecast: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================
//
// These only describe the tool input schemas advertised by `tools/list`.
// Incoming arguments are read through `ToolArguments`.

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state or territory code, e.g. "WA"
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_without_instruction_deserializes() {
        let json = serde_json::json!({
            "features": [{
                "properties": {
                    "event": "Wind Advisory",
                    "areaDesc": "Kittitas Valley",
                    "severity": "Moderate",
                    "description": "Strong winds",
                    "instruction": null
                }
            }]
        });

        let alerts: AlertResponse = serde_json::from_value(json).unwrap();
        let props = &alerts.features[0].properties;
        assert_eq!(props.area_desc, "Kittitas Valley");
        assert!(props.instruction.is_none());
    }

    #[test]
    fn points_response_ignores_unused_fields() {
        let json = serde_json::json!({
            "properties": {
                "gridId": "SEW",
                "gridX": 133,
                "gridY": 74,
                "forecast": "https://api.weather.gov/gridpoints/SEW/133,74/forecast"
            }
        });

        let points: PointsResponse = serde_json::from_value(json).unwrap();
        assert_eq!(
            points.properties.forecast,
            "https://api.weather.gov/gridpoints/SEW/133,74/forecast"
        );
    }
}
