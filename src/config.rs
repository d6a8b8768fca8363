use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::constants::{DEFAULT_BIND_ADDR, MCP_ENDPOINT, NWS_API_BASE};

/// Serves the weather tools over MCP
#[derive(Debug, Parser)]
#[command(name = "weather-server", version)]
pub struct ServerArgs {
    /// Address to listen on for streamable HTTP clients
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Base URL of the weather API
    #[arg(long, default_value = NWS_API_BASE)]
    pub api_base: String,

    /// Serve on stdin/stdout instead of HTTP
    #[arg(long)]
    pub stdio: bool,
}

/// Calls a weather tool on a running server
#[derive(Debug, Parser)]
#[command(name = "weather-client", version)]
pub struct ClientArgs {
    /// MCP endpoint of the server
    #[arg(long, default_value_t = default_server_url())]
    pub server: String,

    #[command(subcommand)]
    pub command: ClientCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// List the tools the server exposes
    Tools,

    /// Active alerts for a US state
    Alerts {
        /// Two-letter state code
        #[arg(long)]
        state: String,
    },

    /// Forecast for a location
    Forecast {
        #[arg(long, default_value_t = 47.7601, allow_negative_numbers = true)]
        latitude: f64,

        #[arg(long, default_value_t = -122.2054, allow_negative_numbers = true)]
        longitude: f64,
    },
}

fn default_server_url() -> String {
    format!("http://{}{}", DEFAULT_BIND_ADDR, MCP_ENDPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults_to_demo_address() {
        let args = ServerArgs::parse_from(["weather-server"]);
        assert_eq!(args.bind.to_string(), "127.0.0.1:5001");
        assert_eq!(args.api_base, "https://api.weather.gov");
        assert!(!args.stdio);
    }

    #[test]
    fn client_forecast_accepts_negative_coordinates() {
        let args = ClientArgs::parse_from([
            "weather-client",
            "forecast",
            "--latitude",
            "-33.86",
            "--longitude",
            "151.2",
        ]);
        assert_eq!(args.server, "http://127.0.0.1:5001/mcp");
        match args.command {
            ClientCommand::Forecast { latitude, longitude } => {
                assert_eq!(latitude, -33.86);
                assert_eq!(longitude, 151.2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn client_forecast_defaults() {
        let args = ClientArgs::parse_from(["weather-client", "forecast"]);
        assert!(matches!(
            args.command,
            ClientCommand::Forecast { latitude, longitude }
                if latitude == 47.7601 && longitude == -122.2054
        ));
    }
}
