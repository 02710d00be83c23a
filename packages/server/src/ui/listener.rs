//! TCP listener accepting chat connections.

use std::{net::SocketAddr, time::Duration};

use tokio::net::TcpListener;

use crate::{
    ui::{ServerError, handler::handle_connection},
    usecase::CommandDispatcher,
};

/// Pause after a failed accept (e.g. fd exhaustion) before accepting again.
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

pub struct Listener {
    listener: TcpListener,
    dispatcher: CommandDispatcher,
    max_line_length: usize,
}

impl Listener {
    pub async fn bind(
        addr: &str,
        dispatcher: CommandDispatcher,
        max_line_length: usize,
    ) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        Ok(Self {
            listener,
            dispatcher,
            max_line_length,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever, spawning one handler task per connection.
    ///
    /// Accept failures are logged and the loop keeps going.
    pub async fn run(self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        tracing::debug!("[{}] Failed to set TCP_NODELAY: {}", peer, e);
                    }
                    tokio::spawn(handle_connection(
                        stream,
                        peer,
                        self.dispatcher.clone(),
                        self.max_line_length,
                    ));
                }
                Err(e) => {
                    tracing::warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                }
            }
        }
    }
}
