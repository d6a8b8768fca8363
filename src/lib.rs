//! Weather alerts and forecasts exposed as MCP tools.
//!
//! `GetAlerts` and `GetForecast` are resolved by [`dispatcher`], read their
//! arguments through [`arguments::ToolArguments`] and call the National
//! Weather Service through [`backend::NwsClient`].

pub mod arguments;
pub mod backend;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod formatters;
pub mod models;
pub mod service;

pub use backend::{NwsClient, WeatherBackend};
pub use service::Weather;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber used by both binaries
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "weather_rpc=info,weather_server=info,weather_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
