//! VecinoXpress verification node entry point.

use anyhow::{Context, Result};
use tracing::info;

use vx_02_api_gateway::GatewayConfig;
use vx_node::NodeRuntime;
use vx_telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::from_env())
        .context("Failed to initialize telemetry")?;

    let config = GatewayConfig::from_env().context("Invalid gateway configuration")?;

    let mut runtime = NodeRuntime::new(config)?;
    let addr = runtime.start().await?;

    info!(%addr, "Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    runtime.shutdown().await
}
