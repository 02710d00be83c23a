//! pipechat chat broker.
//!
//! Clients connect over TCP, register a unique display name with `USER|name`,
//! and exchange direct (`CHAT_REQ`) or broadcast (`BCAST_REQ`) messages routed
//! through a shared directory of registered connections.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

#[cfg(test)]
mod testing;
