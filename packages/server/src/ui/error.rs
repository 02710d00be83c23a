//! Server startup and runtime errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Http(#[source] std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
