//! エンティティ

mod connection;
mod directory;
mod state;

pub use connection::ConnectionHandle;
pub use directory::Directory;
pub use state::ConnectionState;
