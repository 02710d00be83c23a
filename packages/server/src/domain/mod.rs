//! Domain layer for the chat broker.
//!
//! Business rules that do not depend on the transport: who is registered
//! under which name, and how a connection's outbound lines are pushed.

pub mod entity;
pub mod error;
pub mod message_pusher;
pub mod value_object;

pub use entity::{ConnectionHandle, ConnectionState, Directory};
pub use error::{DirectoryError, MessagePushError, ValueObjectError};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use value_object::{ConnectionId, DisplayName, Timestamp};
