//! UseCase: CHAT_REQ|name|msg（1 対 1 のメッセージ送信）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - 宛先に `CHAT_RSP|<送信者>|<msg>` がちょうど 1 回届くこと
//! - 未登録の送信者、存在しない宛先、自分宛ての拒否
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済みの 2 者間の送信
//! - 異常系：未登録、宛先不明、自分宛て、宛先のキューが閉じている

use std::sync::Arc;

use pipechat_shared::protocol::{Response, keyword};
use tokio::sync::Mutex;

use crate::domain::{ConnectionHandle, Directory};

use super::{error::ProtocolError, respond_with};

pub const OK_DETAIL: &str = "Message sent with CHAT_RSP";

/// 1 対 1 のメッセージ送信のユースケース
pub struct SendChatUseCase {
    directory: Arc<Mutex<Directory>>,
}

impl SendChatUseCase {
    pub fn new(directory: Arc<Mutex<Directory>>) -> Self {
        Self { directory }
    }

    /// 宛先へ配送し、送信者に応答する
    pub async fn execute(
        &self,
        caller: &ConnectionHandle,
        to: &str,
        message: &str,
    ) -> Result<(), ProtocolError> {
        let directory = self.directory.lock().await;
        let outcome = Self::deliver(&directory, caller, to, message).await;
        respond_with(caller, &outcome, OK_DETAIL).await;
        outcome
    }

    async fn deliver(
        directory: &Directory,
        caller: &ConnectionHandle,
        to: &str,
        message: &str,
    ) -> Result<(), ProtocolError> {
        let from = directory
            .name_of(&caller.id())
            .ok_or(ProtocolError::NotRegistered(keyword::CHAT_REQ))?;
        let target = directory.lookup(to).ok_or(ProtocolError::UnknownTarget)?;
        if target == caller {
            return Err(ProtocolError::SelfTarget);
        }

        target
            .send(&Response::chat(from.as_str(), message))
            .await
            .map_err(|e| {
                tracing::warn!("Failed to deliver message from '{}' to '{}': {}", from, to, e);
                ProtocolError::DeliveryFailed
            })
    }
}
