//! UseCase 層のエラー定義
//!
//! `Display` の出力がそのまま `ERROR|<reason>` の reason になる。

use pipechat_shared::protocol::ParseError;
use thiserror::Error;

use crate::domain::DirectoryError;

/// クライアントに `ERROR` として返すプロトコルエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// 未知のコマンド、引数の過不足
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid name in USER")]
    InvalidName,

    #[error("Name already exists in USER")]
    NameTaken,

    #[error("Name already set for USER")]
    AlreadyRegistered,

    /// 未登録の接続からの CHAT_REQ / BCAST_REQ
    #[error("Cannot send {0} without registering user name")]
    NotRegistered(&'static str),

    #[error("Invalid user in CHAT_REQ")]
    UnknownTarget,

    #[error("Cannot send CHAT_REQ to self")]
    SelfTarget,

    #[error("Unable to deliver CHAT_REQ")]
    DeliveryFailed,

    #[error("Line too long")]
    LineTooLong,
}

impl From<DirectoryError> for ProtocolError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NameTaken(_) => ProtocolError::NameTaken,
            DirectoryError::AlreadyRegistered(_) => ProtocolError::AlreadyRegistered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipechat_shared::protocol::keyword;

    #[test]
    fn test_reason_strings() {
        // テスト項目: 各エラーの reason 文字列が区別できる
        // then (期待する結果):
        assert_eq!(ProtocolError::InvalidName.to_string(), "Invalid name in USER");
        assert_eq!(
            ProtocolError::NameTaken.to_string(),
            "Name already exists in USER"
        );
        assert_eq!(
            ProtocolError::AlreadyRegistered.to_string(),
            "Name already set for USER"
        );
        assert_eq!(
            ProtocolError::NotRegistered(keyword::BCAST_REQ).to_string(),
            "Cannot send BCAST_REQ without registering user name"
        );
        assert_eq!(
            ProtocolError::UnknownTarget.to_string(),
            "Invalid user in CHAT_REQ"
        );
        assert_eq!(
            ProtocolError::SelfTarget.to_string(),
            "Cannot send CHAT_REQ to self"
        );
        assert_eq!(
            ProtocolError::from(ParseError::UnknownCommand("FOO".to_string())).to_string(),
            "Invalid Command"
        );
    }

    #[test]
    fn test_from_directory_error() {
        // テスト項目: DirectoryError が対応する ProtocolError に変換される
        // then (期待する結果):
        assert_eq!(
            ProtocolError::from(DirectoryError::NameTaken("a".to_string())),
            ProtocolError::NameTaken
        );
        assert_eq!(
            ProtocolError::from(DirectoryError::AlreadyRegistered("a".to_string())),
            ProtocolError::AlreadyRegistered
        );
    }
}
