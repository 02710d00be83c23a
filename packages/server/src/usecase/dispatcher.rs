//! UseCase: 受信した 1 行の解釈と実行
//!
//! ## 排他制御
//!
//! 1 コマンドの処理（Directory の参照・変更、宛先への配送、送信者への応答）は
//! 各ユースケースの `execute` の中で、Directory のロックを保持したまま行う。
//! したがって、2 つのコマンドの Directory 上の効果は必ずどちらかが先に完了する。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - コマンドごとの応答行と、送信者・宛先のキューに積まれる行
//! - 不正なコマンドで Directory が変化しないこと
//! - 同時登録で更新が失われないこと

use std::sync::Arc;

use pipechat_shared::protocol::{Request, Response};
use tokio::sync::Mutex;

use crate::domain::{ConnectionHandle, Directory, DisplayName};

use super::{
    BroadcastMessageUseCase, DisconnectUserUseCase, ListUsersUseCase, RegisterUserUseCase,
    SendChatUseCase, error::ProtocolError, respond,
};

/// 全接続ハンドラで共有するコマンド実行器
///
/// 共有状態は `Arc<Mutex<Directory>>` だけで、clone しても同じ Directory を指す。
#[derive(Clone)]
pub struct CommandDispatcher {
    directory: Arc<Mutex<Directory>>,
    register_user: Arc<RegisterUserUseCase>,
    send_chat: Arc<SendChatUseCase>,
    broadcast_message: Arc<BroadcastMessageUseCase>,
    list_users: Arc<ListUsersUseCase>,
    disconnect_user: Arc<DisconnectUserUseCase>,
}

impl CommandDispatcher {
    pub fn new(directory: Arc<Mutex<Directory>>) -> Self {
        Self {
            register_user: Arc::new(RegisterUserUseCase::new(directory.clone())),
            send_chat: Arc::new(SendChatUseCase::new(directory.clone())),
            broadcast_message: Arc::new(BroadcastMessageUseCase::new(directory.clone())),
            list_users: Arc::new(ListUsersUseCase::new(directory.clone())),
            disconnect_user: Arc::new(DisconnectUserUseCase::new(directory.clone())),
            directory,
        }
    }

    /// 受信した 1 行を実行し、送信者に応答を返す
    ///
    /// 前後の空白は無視する。USER が成功した場合は登録された名前を返す。
    pub async fn dispatch(&self, caller: &ConnectionHandle, line: &str) -> Option<DisplayName> {
        let line = line.trim();
        tracing::debug!("[{}] -> {}", caller.peer(), line);

        let request = match Request::parse(line) {
            Ok(request) => request,
            Err(e) => {
                self.reject(caller, e.into()).await;
                return None;
            }
        };

        match request {
            Request::User { name } => self.register_user.execute(caller, name).await.ok(),
            Request::ChatReq { to, message } => {
                let _ = self.send_chat.execute(caller, to, message).await;
                None
            }
            Request::BcastReq { message } => {
                let _ = self.broadcast_message.execute(caller, message).await;
                None
            }
            Request::List => {
                self.list_users.execute(caller).await;
                None
            }
        }
    }

    /// Directory に触れずにエラーを返す（解析エラー、長すぎる行など）
    pub async fn reject(&self, caller: &ConnectionHandle, error: ProtocolError) {
        respond(caller, &Response::error(error)).await;
    }

    /// 切断された接続の登録を解除する（未登録なら何もしない）
    pub async fn disconnect(&self, caller: &ConnectionHandle) -> Option<DisplayName> {
        self.disconnect_user.execute(&caller.id()).await
    }

    /// 名前の昇順に並べた登録のスナップショット
    pub async fn registrations(&self) -> Vec<(DisplayName, ConnectionHandle)> {
        self.list_users.snapshot().await
    }

    /// 登録数と、双方向マップが整合しているか
    pub async fn health(&self) -> (usize, bool) {
        let directory = self.directory.lock().await;
        (directory.len(), directory.is_consistent())
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(Arc::default())
    }
}
