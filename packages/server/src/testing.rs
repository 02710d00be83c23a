//! Helpers shared by the unit tests.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionHandle, ConnectionId, DisplayName},
    infrastructure::message_pusher::ChannelMessagePusher,
};

/// Create a handle backed by a real channel; the receiver stands in for the socket.
pub fn connect() -> (ConnectionHandle, mpsc::UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let id = ConnectionId::generate();
    let handle = ConnectionHandle::new(
        id,
        "127.0.0.1:40000".parse().expect("valid socket address"),
        Arc::new(ChannelMessagePusher::new(id, tx)),
    );
    (handle, rx)
}

/// Every line queued so far, without waiting.
pub fn received(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<String> {
    let mut lines = Vec::new();
    while let Ok(line) = rx.try_recv() {
        lines.push(line);
    }
    lines
}

pub fn name(value: &str) -> DisplayName {
    DisplayName::try_from(value).expect("valid display name")
}
