//! Connection and HTTP request handlers.

pub mod connection;
pub mod http;

pub use connection::handle_connection;
pub use http::router;
