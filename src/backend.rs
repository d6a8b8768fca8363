use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::constants::USER_AGENT;
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{AlertResponse, ForecastResponse, PointsResponse};

/// Weather lookups the tools are built on. Each returns display text.
#[async_trait]
pub trait WeatherBackend: Send + Sync {
    async fn get_alerts(&self, state: &str) -> Result<String>;

    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<String>;
}

/// Client for the National Weather Service API
#[derive(Clone)]
pub struct NwsClient {
    client: Arc<Client>,
    base_url: String,
}

impl NwsClient {
    /// Creates a client with its own HTTP handle against `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(Arc::new(client), base_url))
    }

    /// Creates a client sharing an existing HTTP handle
    pub fn with_client(client: Arc<Client>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Request to {} failed with status: {}", url, response.status());
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}

#[async_trait]
impl WeatherBackend for NwsClient {
    async fn get_alerts(&self, state: &str) -> Result<String> {
        let url = format!("{}/alerts/active/area/{}", self.base_url, state);
        let alerts = self.make_request::<AlertResponse>(&url).await?;

        Ok(format_alerts(alerts))
    }

    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<String> {
        // The points endpoint tells us which gridpoint forecast covers the location.
        let points_url = format!("{}/points/{},{}", self.base_url, latitude, longitude);
        let points = self.make_request::<PointsResponse>(&points_url).await?;

        let forecast = self
            .make_request::<ForecastResponse>(&points.properties.forecast)
            .await?;

        Ok(format_forecast(forecast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};

    /// Serves canned NWS responses on an ephemeral local port.
    async fn spawn_fixture() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let forecast_url = format!("{base}/gridpoints/SEW/133,74/forecast");

        let router = Router::new()
            .route(
                "/alerts/active/area/{state}",
                get(|Path(state): Path<String>| async move {
                    let features = if state == "WA" {
                        json!([{
                            "properties": {
                                "event": "Flood Watch",
                                "areaDesc": "King County",
                                "severity": "Moderate",
                                "description": "Rivers rising",
                                "instruction": "Avoid low areas."
                            }
                        }])
                    } else {
                        json!([])
                    };
                    Json(json!({ "features": features }))
                }),
            )
            .route(
                "/points/{coords}",
                get(move |Path(coords): Path<String>| {
                    let forecast_url = forecast_url.clone();
                    async move {
                        if coords != "47.7601,-122.2054" {
                            return Err(StatusCode::NOT_FOUND);
                        }
                        Ok(Json(json!({ "properties": { "forecast": forecast_url } })))
                    }
                }),
            )
            .route(
                "/gridpoints/SEW/133,74/forecast",
                get(|| async {
                    let periods: Vec<Value> = ["Tonight", "Monday", "Monday Night"]
                        .iter()
                        .map(|name| {
                            json!({
                                "name": name,
                                "temperature": 48,
                                "temperatureUnit": "F",
                                "windSpeed": "3 mph",
                                "windDirection": "N",
                                "shortForecast": "Mostly Cloudy"
                            })
                        })
                        .collect();
                    Json(json!({ "properties": { "periods": periods } }))
                }),
            );

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        base
    }

    #[tokio::test]
    async fn alerts_are_fetched_and_formatted() {
        let client = NwsClient::with_base_url(spawn_fixture().await).unwrap();

        let text = client.get_alerts("WA").await.unwrap();
        assert_eq!(
            text,
            "Event: Flood Watch\nArea: King County\nSeverity: Moderate\n\
             Description: Rivers rising\nInstruction: Avoid low areas."
        );

        let text = client.get_alerts("AZ").await.unwrap();
        assert_eq!(text, "No active alerts for this state.");
    }

    #[tokio::test]
    async fn forecast_follows_points_indirection() {
        let client = NwsClient::with_base_url(spawn_fixture().await).unwrap();

        let text = client.get_forecast(47.7601, -122.2054).await.unwrap();
        let blocks: Vec<&str> = text.split("\n---\n").collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[0],
            "Tonight\nTemperature: 48\u{00b0}F\nWind: 3 mph N\nForecast: Mostly Cloudy"
        );
    }

    #[tokio::test]
    async fn http_failure_propagates() {
        let client = NwsClient::with_base_url(spawn_fixture().await).unwrap();

        let err = client.get_forecast(0.0, 0.0).await.unwrap_err();
        assert!(err.to_string().contains("404"), "unexpected error: {err}");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = NwsClient::with_base_url("http://localhost:1234/").unwrap();
        assert_eq!(client.base_url, "http://localhost:1234");
    }
}
