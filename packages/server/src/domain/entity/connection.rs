//! ConnectionHandle エンティティ

use std::{fmt, net::SocketAddr, sync::Arc};

use pipechat_shared::protocol::Response;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, Timestamp};

/// 受け付けた 1 接続への参照
///
/// `ConnectionId` で同一性を判定する。clone しても同じ接続を指す。
#[derive(Clone)]
pub struct ConnectionHandle {
    id: ConnectionId,
    peer: SocketAddr,
    connected_at: Timestamp,
    pusher: Arc<dyn MessagePusher>,
}

impl ConnectionHandle {
    pub fn new(id: ConnectionId, peer: SocketAddr, pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            id,
            peer,
            connected_at: Timestamp::now(),
            pusher,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub fn connected_at(&self) -> Timestamp {
        self.connected_at
    }

    /// サーバーからの 1 行をこの接続の送信キューに積む
    pub async fn send(&self, response: &Response) -> Result<(), MessagePushError> {
        let line = response.to_string();
        tracing::debug!("[{}] <- {}", self.peer, line);
        self.pusher.push(&line).await
    }
}

impl PartialEq for ConnectionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ConnectionHandle {}

impl fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionHandle")
            .field("id", &self.id)
            .field("peer", &self.peer)
            .field("connected_at", &self.connected_at)
            .finish_non_exhaustive()
    }
}
