//! Gateway service: owns the HTTP server lifecycle.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::router::build_router;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};
use vx_01_document_verification::DocumentVerificationApi;

/// REST gateway in front of the document verification subsystem
pub struct ApiGatewayService {
    config: GatewayConfig,
    api: Arc<dyn DocumentVerificationApi>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server: Option<JoinHandle<Result<(), GatewayError>>>,
}

impl ApiGatewayService {
    /// Create a new gateway. Fails if the configuration does not validate.
    pub fn new(
        config: GatewayConfig,
        api: Arc<dyn DocumentVerificationApi>,
    ) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self {
            config,
            api,
            shutdown_tx: None,
            server: None,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Router with the full middleware stack, without binding a socket.
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.api), &self.config)
    }

    /// Bind the listener and serve in a background task.
    ///
    /// Returns the bound address, which differs from the configured one
    /// when port 0 is requested.
    pub async fn start(&mut self) -> Result<SocketAddr, GatewayError> {
        if self.server.is_some() {
            return Err(GatewayError::AlreadyStarted);
        }

        let addr = self.config.http_addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{addr}: {e}")))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| GatewayError::Bind(e.to_string()))?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        self.shutdown_tx = Some(shutdown_tx);

        let router = self.router();
        self.server = Some(tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .map_err(|e| GatewayError::Serve(e.to_string()))
        }));

        info!(
            addr = %local_addr,
            mode = self.config.mode.as_str(),
            "API Gateway started"
        );
        Ok(local_addr)
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Wait for the server task to finish.
    pub async fn wait(&mut self) -> Result<(), GatewayError> {
        let Some(handle) = self.server.take() else {
            return Ok(());
        };
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(GatewayError::Serve(e.to_string())),
        };
        if let Err(e) = &result {
            error!(error = %e, "HTTP server error");
        } else {
            info!("API Gateway stopped");
        }
        result
    }

    pub fn is_running(&self) -> bool {
        self.server.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ApiGatewayService {
    fn drop(&mut self) {
        self.shutdown();
    }
}
