use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rmcp::{
    transport::streamable_http_server::{session::local::LocalSessionManager, StreamableHttpService},
    ServiceExt,
};

use weather_rpc::{config::ServerArgs, constants::MCP_ENDPOINT, init_tracing, NwsClient, Weather};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = ServerArgs::parse();

    tracing::info!("Starting MCP weather server");

    let backend = NwsClient::with_base_url(&args.api_base)?;
    let weather = Weather::with_backend(Arc::new(backend));

    if args.stdio {
        let server = weather.serve(rmcp::transport::stdio()).await?;
        server.waiting().await?;
    } else {
        serve_http(weather, &args).await?;
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn serve_http(weather: Weather, args: &ServerArgs) -> Result<()> {
    let service = StreamableHttpService::new(
        move || Ok(weather.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new()
        .route(
            "/",
            axum::routing::get(|| async {
                "Weather MCP server is running. Use an MCP client to connect."
            }),
        )
        .nest_service(MCP_ENDPOINT, service);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("Listening on http://{}{}", args.bind, MCP_ENDPOINT);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Received shutdown signal");
        })
        .await?;

    Ok(())
}
