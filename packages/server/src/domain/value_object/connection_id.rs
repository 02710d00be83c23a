//! ConnectionId 値オブジェクト

use std::fmt;

use uuid::Uuid;

/// 接続を一意に識別する ID
///
/// Directory のキーとして使う不透明な識別子。受け付けた接続ごとに UUID v4 を払い出す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// 新しい ConnectionId を生成
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
