//! UseCase: USER|name（表示名の登録）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - 重複名・重複登録の拒否、名前の検証、成功時の Directory への反映
//! - 判定の順序（使用中の名前 → 登録済みの接続 → 名前の検証）
//!
//! ### どのような状況を想定しているか
//! - 正常系：未登録の接続が空いている名前を登録
//! - 異常系：使用中の名前、登録済みの接続、不正な名前

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{ConnectionHandle, Directory, DisplayName};

use super::{error::ProtocolError, respond_with};

pub const OK_DETAIL: &str = "Name set in USER";

/// 表示名登録のユースケース
pub struct RegisterUserUseCase {
    directory: Arc<Mutex<Directory>>,
}

impl RegisterUserUseCase {
    pub fn new(directory: Arc<Mutex<Directory>>) -> Self {
        Self { directory }
    }

    /// 登録を実行して送信者に応答し、登録された名前を返す
    pub async fn execute(
        &self,
        caller: &ConnectionHandle,
        name: &str,
    ) -> Result<DisplayName, ProtocolError> {
        let mut directory = self.directory.lock().await;
        let outcome = Self::register(&mut directory, caller, name);
        respond_with(caller, &outcome, OK_DETAIL).await;
        outcome
    }

    fn register(
        directory: &mut Directory,
        caller: &ConnectionHandle,
        name: &str,
    ) -> Result<DisplayName, ProtocolError> {
        if directory.lookup(name).is_some() {
            return Err(ProtocolError::NameTaken);
        }
        if directory.name_of(&caller.id()).is_some() {
            return Err(ProtocolError::AlreadyRegistered);
        }

        let name = DisplayName::try_from(name).map_err(|e| {
            tracing::debug!("[{}] rejected name '{}': {}", caller.peer(), name, e);
            ProtocolError::InvalidName
        })?;

        directory.register(name.clone(), caller.clone())?;
        tracing::info!("[{}] registered as '{}'", caller.peer(), name);

        Ok(name)
    }
}
