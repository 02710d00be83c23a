//! pipechat terminal client.
//!
//! Forwards keyboard lines to the broker verbatim and renders the broker's
//! replies and routed chat messages.

pub mod error;
pub mod formatter;
pub mod session;
mod ui;

pub use error::ClientError;
pub use session::{SessionEnd, run_client, run_session};
