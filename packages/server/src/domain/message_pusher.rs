//! MessagePusher trait 定義
//!
//! 1 つの接続へ行を送り出すためのインターフェース。
//! 具体的な実装（mpsc チャンネル経由で writer タスクへ渡す）は Infrastructure 層が提供する。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::MessagePushError;

/// 接続ごとの outbound キュー
///
/// 受信側は接続の writer タスク（pusher loop）がただ 1 つだけ保持する。
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// 1 接続分の送信口
///
/// `push` はキューへの投入だけを行い、ソケットへの書き込みを待たない。
/// Directory のロックを保持したまま呼ばれるため、ブロックしてはならない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 行（改行なし）を送信キューに積む
    async fn push(&self, line: &str) -> Result<(), MessagePushError>;
}
