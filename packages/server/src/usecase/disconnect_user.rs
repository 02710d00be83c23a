//! UseCase: 切断時の登録解除

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{ConnectionId, Directory, DisplayName};

/// 切断時の登録解除のユースケース
pub struct DisconnectUserUseCase {
    directory: Arc<Mutex<Directory>>,
}

impl DisconnectUserUseCase {
    pub fn new(directory: Arc<Mutex<Directory>>) -> Self {
        Self { directory }
    }

    /// 接続の登録を解除し、解放された名前を返す（未登録なら何もしない）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<DisplayName> {
        let mut directory = self.directory.lock().await;
        let freed = directory.unregister(connection_id);
        if let Some(name) = &freed {
            tracing::info!("'{}' unregistered, {} client(s) remain", name, directory.len());
        }
        freed
    }
}
