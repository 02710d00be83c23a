//! Error types for the chat client.

use thiserror::Error;
use tokio_util::codec::LinesCodecError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached
    #[error("Error connecting to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Connection error after connecting
    #[error("Connection error: {0}")]
    Connection(#[from] LinesCodecError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
