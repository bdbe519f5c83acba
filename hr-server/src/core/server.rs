//! Listener and graceful shutdown

use std::net::SocketAddr;

use thiserror::Error;

use crate::core::ServerState;
use crate::routes::build_app;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[from] std::io::Error),
}

pub struct Server {
    state: ServerState,
}

impl Server {
    pub fn new(state: ServerState) -> Self {
        Self { state }
    }

    /// Serves on `0.0.0.0:HTTP_PORT` until Ctrl-C
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.state.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!(%addr, env = %self.state.config.environment, "HR server listening");

        let app = build_app(&self.state).with_state(self.state);
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("shutdown requested");
                }
            })
            .await?;
        Ok(())
    }
}
