use crate::constants::{FORECAST_PERIODS, NO_ALERTS};
use crate::models::{AlertResponse, ForecastResponse};

/// Formats weather alerts into a human-readable string
pub fn format_alerts(alerts: AlertResponse) -> String {
    if alerts.features.is_empty() {
        return NO_ALERTS.to_string();
    }

    alerts
        .features
        .iter()
        .map(|feature| {
            let props = &feature.properties;
            format!(
                "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstruction: {}",
                props.event,
                props.area_desc,
                props.severity,
                props.description.as_deref().unwrap_or_default(),
                props.instruction.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n--\n")
}

/// Formats the next few forecast periods into a human-readable string
pub fn format_forecast(forecast: ForecastResponse) -> String {
    forecast
        .properties
        .periods
        .iter()
        .take(FORECAST_PERIODS)
        .map(|period| {
            format!(
                "{}\nTemperature: {}\u{00b0}{}\nWind: {} {}\nForecast: {}",
                period.name,
                period.temperature,
                period.temperature_unit,
                period.wind_speed,
                period.wind_direction,
                period.short_forecast
            )
        })
        .collect::<Vec<_>>()
        .join("\n---\n")
}
