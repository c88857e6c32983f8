//! # VecinoXpress Node Runtime
//!
//! Wires the document verification subsystem (vx-01) to its adapters and
//! serves it through the REST gateway (vx-02).
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logging + metrics) from `VX_*` variables
//! 2. Load and validate the gateway configuration
//! 3. Build the verification service over the in-memory store and SVG QR encoder
//! 4. Bind the HTTP listener
//! 5. Run until Ctrl+C, then shut the gateway down gracefully

#![warn(clippy::all)]
#![deny(unsafe_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use vx_01_document_verification::{
    DocumentVerificationApi, DocumentVerificationService, InMemoryRecordStore, ServiceConfig,
    SvgQrEncoder,
};
use vx_02_api_gateway::{ApiGatewayService, GatewayConfig};

/// Verification service settings derived from the gateway configuration.
pub fn service_config(gateway: &GatewayConfig) -> ServiceConfig {
    ServiceConfig {
        public_base_url: gateway.public_base_url.clone(),
        ..ServiceConfig::default()
    }
}

/// Build the verification subsystem with its default adapters.
pub fn build_verification_api(gateway: &GatewayConfig) -> Arc<dyn DocumentVerificationApi> {
    Arc::new(DocumentVerificationService::new(
        InMemoryRecordStore::new(),
        SvgQrEncoder::new(gateway.qr.size),
        service_config(gateway),
    ))
}

/// The node runtime: one verification service behind one gateway.
pub struct NodeRuntime {
    api: Arc<dyn DocumentVerificationApi>,
    gateway: ApiGatewayService,
}

impl NodeRuntime {
    /// Create a new node runtime with configuration.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let api = build_verification_api(&config);
        let gateway = ApiGatewayService::new(config, Arc::clone(&api))
            .context("Failed to create API gateway")?;
        Ok(Self { api, gateway })
    }

    /// Start serving. Returns the bound HTTP address.
    pub async fn start(&mut self) -> Result<SocketAddr> {
        info!("===========================================");
        info!("  VecinoXpress Verification Node v{}", env!("CARGO_PKG_VERSION"));
        info!("  Mode: {}", self.gateway.config().mode.as_str());
        info!("===========================================");

        let addr = self
            .gateway
            .start()
            .await
            .context("Failed to start API gateway")?;
        info!("Public base URL: {}", self.gateway.config().public_base_url);
        Ok(addr)
    }

    /// Shutdown the node gracefully.
    pub async fn shutdown(&mut self) -> Result<()> {
        info!("Initiating graceful shutdown...");
        self.gateway.shutdown();
        self.gateway
            .wait()
            .await
            .context("API gateway terminated with an error")?;
        info!("Shutdown complete");
        Ok(())
    }

    /// Verification API shared with the gateway.
    pub fn api(&self) -> Arc<dyn DocumentVerificationApi> {
        Arc::clone(&self.api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_follows_gateway() {
        let gateway = GatewayConfig {
            public_base_url: "https://demo.vecinoxpress.cl".to_string(),
            ..GatewayConfig::default()
        };
        let config = service_config(&gateway);
        assert_eq!(config.public_base_url, "https://demo.vecinoxpress.cl");
        assert_eq!(config.max_issue_attempts, ServiceConfig::default().max_issue_attempts);
    }

    #[tokio::test]
    async fn test_runtime_start_and_shutdown() {
        let mut config = GatewayConfig::default();
        config.http.host = "127.0.0.1".parse().unwrap();
        config.http.port = 0;

        let mut runtime = NodeRuntime::new(config).unwrap();
        let addr = runtime.start().await.unwrap();
        assert_ne!(addr.port(), 0);
        runtime.shutdown().await.unwrap();
    }
}
