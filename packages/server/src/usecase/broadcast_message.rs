//! UseCase: BCAST_REQ|msg（全員へのブロードキャスト）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - 送信者以外の全登録者に `CHAT_RSP|<送信者>|<msg>` がちょうど 1 回届くこと
//! - 送信者自身には届かないこと
//!
//! ### どのような状況を想定しているか
//! - 正常系：複数の登録者へのブロードキャスト
//! - エッジケース：送信者しかいない（配送対象なし）、一部のキューが閉じている
//! - 異常系：未登録の送信者

use std::sync::Arc;

use pipechat_shared::protocol::{Response, keyword};
use tokio::sync::Mutex;

use crate::domain::{ConnectionHandle, Directory};

use super::{error::ProtocolError, respond_with};

pub const OK_DETAIL: &str = "Broadcast Messages Sent with CHAT_RSP";

/// ブロードキャストのユースケース
pub struct BroadcastMessageUseCase {
    directory: Arc<Mutex<Directory>>,
}

impl BroadcastMessageUseCase {
    pub fn new(directory: Arc<Mutex<Directory>>) -> Self {
        Self { directory }
    }

    /// 送信者以外の全登録者へ配送し、送信者に応答する
    ///
    /// 一部の配送失敗は許容する（ログに残して次へ進む）。配送できた件数を返す。
    pub async fn execute(
        &self,
        caller: &ConnectionHandle,
        message: &str,
    ) -> Result<usize, ProtocolError> {
        let directory = self.directory.lock().await;
        let outcome = Self::fan_out(&directory, caller, message).await;
        respond_with(caller, &outcome, OK_DETAIL).await;
        outcome
    }

    async fn fan_out(
        directory: &Directory,
        caller: &ConnectionHandle,
        message: &str,
    ) -> Result<usize, ProtocolError> {
        let from = directory
            .name_of(&caller.id())
            .ok_or(ProtocolError::NotRegistered(keyword::BCAST_REQ))?;

        let frame = Response::chat(from.as_str(), message);
        let mut delivered = 0usize;
        for (name, target) in directory.all_entries() {
            if target == caller {
                continue;
            }
            match target.send(&frame).await {
                Ok(()) => delivered += 1,
                Err(e) => tracing::warn!("Failed to broadcast to '{}': {}", name, e),
            }
        }
        tracing::info!("Broadcast from '{}' delivered to {} client(s)", from, delivered);

        Ok(delivered)
    }
}
