//! 値オブジェクト

mod connection_id;
mod display_name;
mod timestamp;

pub use connection_id::ConnectionId;
pub use display_name::DisplayName;
pub use timestamp::Timestamp;
