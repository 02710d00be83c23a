//! UI layer: TCP line transport, HTTP status API and server bootstrap.

mod codec;
mod error;
pub mod handler;
mod listener;
mod server;
mod signal;

pub use error::ServerError;
pub use listener::Listener;
pub use server::{Server, ServerConfig};
pub use signal::shutdown_signal;
