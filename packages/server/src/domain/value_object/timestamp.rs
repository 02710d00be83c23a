//! Timestamp 値オブジェクト

use pipechat_shared::time::{millis_to_rfc3339, now_millis};

/// Unix タイムスタンプ（UTC、ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    /// 現在時刻の Timestamp
    pub fn now() -> Self {
        Self(now_millis())
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// RFC 3339 形式の文字列
    pub fn to_rfc3339(&self) -> String {
        millis_to_rfc3339(self.0)
    }
}
