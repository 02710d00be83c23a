//! Server bootstrap: binds the chat listener and the optional HTTP status API.

use std::{future::Future, net::SocketAddr};

use tokio::net::TcpListener;

use crate::{
    ui::{Listener, ServerError, handler::router},
    usecase::CommandDispatcher,
};

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Status API port. Disabled when `None`.
    pub http_port: Option<u16>,
    pub max_line_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            http_port: None,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

pub struct Server {
    listener: Listener,
    http_listener: Option<TcpListener>,
    dispatcher: CommandDispatcher,
}

impl Server {
    /// Bind every configured socket. Nothing is served until [`Server::serve`].
    pub async fn bind(
        config: &ServerConfig,
        dispatcher: CommandDispatcher,
    ) -> Result<Self, ServerError> {
        let chat_addr = format!("{}:{}", config.host, config.port);
        let listener =
            Listener::bind(&chat_addr, dispatcher.clone(), config.max_line_length).await?;

        let http_listener = match config.http_port {
            Some(port) => {
                let http_addr = format!("{}:{}", config.host, port);
                let bound = TcpListener::bind(&http_addr)
                    .await
                    .map_err(|source| ServerError::Bind {
                        addr: http_addr,
                        source,
                    })?;
                Some(bound)
            }
            None => None,
        };

        Ok(Self {
            listener,
            http_listener,
            dispatcher,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr()
    }

    pub fn http_addr(&self) -> Result<Option<SocketAddr>, ServerError> {
        match &self.http_listener {
            Some(listener) => Ok(Some(listener.local_addr()?)),
            None => Ok(None),
        }
    }

    /// Serve until `shutdown` resolves or the HTTP server fails.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send,
    {
        tracing::info!("Chat server listening on {}", self.local_addr()?);
        if let Some(addr) = self.http_addr()? {
            tracing::info!("Status API listening on http://{}/api/health", addr);
        }
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        let Self {
            listener,
            http_listener,
            dispatcher,
        } = self;

        let http = async move {
            match http_listener {
                Some(bound) => axum::serve(bound, router(dispatcher))
                    .await
                    .map_err(ServerError::Http),
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            _ = listener.run() => {}
            result = http => result?,
            _ = shutdown => {}
        }

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}
