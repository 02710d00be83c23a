//! Code shared by the pipechat server and client.
//!
//! - `protocol`: the `|`-delimited line protocol spoken over TCP
//! - `logger`: tracing subscriber setup for the binaries
//! - `time`: timestamp helpers

pub mod logger;
pub mod protocol;
pub mod time;
