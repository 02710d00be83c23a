//! UseCase: LIST（登録済みの名前一覧）

use std::sync::Arc;

use pipechat_shared::protocol::{NAME_SEPARATOR, Response};
use tokio::sync::Mutex;

use crate::domain::{ConnectionHandle, Directory, DisplayName};

use super::respond;

/// 名前一覧のユースケース
pub struct ListUsersUseCase {
    directory: Arc<Mutex<Directory>>,
}

impl ListUsersUseCase {
    pub fn new(directory: Arc<Mutex<Directory>>) -> Self {
        Self { directory }
    }

    /// 名前の昇順でカンマ区切りにした一覧を送信者に返す
    pub async fn execute(&self, caller: &ConnectionHandle) -> Response {
        let directory = self.directory.lock().await;
        let names: Vec<&str> = directory
            .all_entries()
            .into_iter()
            .map(|(name, _)| name.as_str())
            .collect();
        let separator = NAME_SEPARATOR.to_string();
        let response = Response::ok(names.join(separator.as_str()));
        respond(caller, &response).await;
        response
    }

    /// 名前の昇順に並べた登録のスナップショット（HTTP API 用）
    pub async fn snapshot(&self) -> Vec<(DisplayName, ConnectionHandle)> {
        let directory = self.directory.lock().await;
        directory
            .all_entries()
            .into_iter()
            .map(|(name, conn)| (name.clone(), conn.clone()))
            .collect()
    }
}
