//! DisplayName 値オブジェクト

use std::{borrow::Borrow, fmt};

use pipechat_shared::protocol::{FIELD_DELIMITER, NAME_SEPARATOR};

use crate::domain::error::ValueObjectError;

/// 登録済みクライアントの表示名
///
/// ## 制約
///
/// - 空文字列は不可
/// - 最大 [`DisplayName::MAX_LEN`] 文字
/// - `|`（フィールド区切り）と `,`（LIST の区切り）は含められない
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayName(String);

impl DisplayName {
    pub const MAX_LEN: usize = 32;

    /// 新しい DisplayName を作成
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::DisplayNameEmpty);
        }

        let len = value.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValueObjectError::DisplayNameTooLong {
                max: Self::MAX_LEN,
                actual: len,
            });
        }

        if let Some(c) = value
            .chars()
            .find(|c| *c == FIELD_DELIMITER || *c == NAME_SEPARATOR)
        {
            return Err(ValueObjectError::DisplayNameInvalidChar(c));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DisplayName {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl Borrow<str> for DisplayName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_valid() {
        // テスト項目: 通常の名前で DisplayName が作成できる
        // when (操作):
        let name = DisplayName::new("alice".to_string());

        // then (期待する結果):
        assert_eq!(name.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_display_name_empty() {
        // テスト項目: 空文字列は拒否される
        // when (操作):
        let result = DisplayName::new(String::new());

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::DisplayNameEmpty));
    }

    #[test]
    fn test_display_name_too_long() {
        // テスト項目: 最大長を超える名前は拒否される（文字数で数える）
        // given (前提条件):
        let ok = "あ".repeat(DisplayName::MAX_LEN);
        let too_long = "a".repeat(DisplayName::MAX_LEN + 1);

        // then (期待する結果):
        assert!(DisplayName::new(ok).is_ok());
        assert_eq!(
            DisplayName::new(too_long),
            Err(ValueObjectError::DisplayNameTooLong {
                max: DisplayName::MAX_LEN,
                actual: DisplayName::MAX_LEN + 1,
            })
        );
    }

    #[test]
    fn test_display_name_rejects_separators() {
        // テスト項目: 区切り文字を含む名前は拒否される
        // then (期待する結果):
        assert_eq!(
            DisplayName::try_from("a,b"),
            Err(ValueObjectError::DisplayNameInvalidChar(','))
        );
        assert_eq!(
            DisplayName::try_from("a|b"),
            Err(ValueObjectError::DisplayNameInvalidChar('|'))
        );
    }

    #[test]
    fn test_display_name_ordering_is_lexicographic() {
        // テスト項目: 辞書順で比較される
        // given (前提条件):
        let mut names: Vec<DisplayName> = ["carol", "Bob", "alice"]
            .into_iter()
            .map(|n| DisplayName::try_from(n).unwrap())
            .collect();

        // when (操作):
        names.sort();

        // then (期待する結果):
        let sorted: Vec<&str> = names.iter().map(DisplayName::as_str).collect();
        assert_eq!(sorted, vec!["Bob", "alice", "carol"]);
    }
}
