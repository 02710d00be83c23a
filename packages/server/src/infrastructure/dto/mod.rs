//! Data Transfer Objects (DTOs) for the chat broker.
//!
//! - `http`: HTTP status API response DTOs

pub mod http;
