use anyhow::Result;
use clap::Parser;
use rmcp::{
    model::{CallToolRequestParam, CallToolResult},
    transport::StreamableHttpClientTransport,
    ServiceExt,
};
use serde_json::json;

use weather_rpc::{
    config::{ClientArgs, ClientCommand},
    constants::{GET_ALERTS, GET_FORECAST},
    init_tracing,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = ClientArgs::parse();

    tracing::info!("Connecting to {}", args.server);
    let transport = StreamableHttpClientTransport::from_uri(args.server.as_str());
    let client = ().serve(transport).await?;

    let request = match args.command {
        ClientCommand::Tools => {
            for tool in client.list_all_tools().await? {
                println!(
                    "{}: {}",
                    tool.name,
                    tool.description.as_deref().unwrap_or_default()
                );
            }
            None
        }
        ClientCommand::Alerts { state } => Some(CallToolRequestParam {
            name: GET_ALERTS.into(),
            arguments: json!({ "state": state }).as_object().cloned(),
        }),
        ClientCommand::Forecast {
            latitude,
            longitude,
        } => Some(CallToolRequestParam {
            name: GET_FORECAST.into(),
            arguments: json!({ "latitude": latitude, "longitude": longitude })
                .as_object()
                .cloned(),
        }),
    };

    if let Some(request) = request {
        let result = client.call_tool(request).await?;
        print_result(&result);
    }

    client.cancel().await?;
    Ok(())
}

fn print_result(result: &CallToolResult) {
    for content in &result.content {
        if let Some(text) = content.as_text() {
            println!("{}", text.text);
        }
    }
}
