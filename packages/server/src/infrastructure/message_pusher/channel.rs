//! mpsc チャンネルを使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を保持
//! - 行をキューに積む（ソケットへの書き込みは UI 層の pusher loop が行う）
//!
//! ## 設計ノート
//!
//! ソケットの write half は pusher loop だけが所有する。
//! 複数の接続ハンドラが同じ宛先に同時に送っても、行はキューで直列化されるため混ざらない。

use async_trait::async_trait;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel};

/// mpsc チャンネルを使った MessagePusher 実装
pub struct ChannelMessagePusher {
    connection_id: ConnectionId,
    sender: PusherChannel,
}

impl ChannelMessagePusher {
    pub fn new(connection_id: ConnectionId, sender: PusherChannel) -> Self {
        Self {
            connection_id,
            sender,
        }
    }
}

#[async_trait]
impl MessagePusher for ChannelMessagePusher {
    async fn push(&self, line: &str) -> Result<(), MessagePushError> {
        self.sender
            .send(line.to_string())
            .map_err(|_| MessagePushError::ChannelClosed(self.connection_id.to_string()))
    }
}
