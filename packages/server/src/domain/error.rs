//! ドメイン層のエラー定義

use thiserror::Error;

/// 値オブジェクトの生成に失敗した場合のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("display name must not be empty")]
    DisplayNameEmpty,

    #[error("display name must be at most {max} characters (got {actual})")]
    DisplayNameTooLong { max: usize, actual: usize },

    #[error("display name must not contain '{0}'")]
    DisplayNameInvalidChar(char),
}

/// Directory 操作のエラー
///
/// いずれのエラーでも Directory の状態は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// 名前が既に別の接続に登録されている
    #[error("name '{0}' is already taken")]
    NameTaken(String),

    /// 接続が既に別の名前で登録されている
    #[error("connection is already registered as '{0}'")]
    AlreadyRegistered(String),
}

/// メッセージ送信（push）のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// 送信先の outbound キューが閉じている（接続終了処理中）
    #[error("outbound queue of connection {0} is closed")]
    ChannelClosed(String),
}
