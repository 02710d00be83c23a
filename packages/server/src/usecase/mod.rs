//! UseCase 層
//!
//! 1 コマンド = 1 ユースケース。各ユースケースは共有の `Arc<Mutex<Directory>>` を保持し、
//! `execute` の間ロックを保持したまま Directory の操作、宛先への配送、送信者への応答まで行う。

mod broadcast_message;
mod disconnect_user;
mod dispatcher;
mod error;
mod list_users;
mod register_user;
mod send_chat;

pub use broadcast_message::BroadcastMessageUseCase;
pub use disconnect_user::DisconnectUserUseCase;
pub use dispatcher::CommandDispatcher;
pub use error::ProtocolError;
pub use list_users::ListUsersUseCase;
pub use register_user::RegisterUserUseCase;
pub use send_chat::SendChatUseCase;

use pipechat_shared::protocol::Response;

use crate::domain::ConnectionHandle;

/// 送信者に応答を積む。送信者の writer が先に終わっていれば捨てる。
async fn respond(caller: &ConnectionHandle, response: &Response) {
    if let Err(e) = caller.send(response).await {
        // 読み込み側もまもなく終了する
        tracing::debug!("[{}] response dropped: {}", caller.peer(), e);
    }
}

/// 結果を応答行に変換して送信者に積む
async fn respond_with<T>(
    caller: &ConnectionHandle,
    outcome: &Result<T, ProtocolError>,
    ok_detail: &str,
) {
    let response = match outcome {
        Ok(_) => Response::ok(ok_detail),
        Err(e) => Response::error(e),
    };
    respond(caller, &response).await;
}
