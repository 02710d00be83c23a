//! Infrastructure layer: concrete implementations of the domain's interfaces.

pub mod dto;
pub mod message_pusher;
