//! ConnectionState: 接続ハンドラの状態遷移
//!
//! ```text
//! Unregistered --USER 成功--> Registered(name)
//!      |                            |
//!      +------ 読み込み失敗 / close --+--> Terminated
//! ```

use crate::domain::DisplayName;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Unregistered,
    Registered(DisplayName),
    Terminated,
}

impl ConnectionState {
    /// USER 成功による遷移。Unregistered 以外からは遷移しない。
    ///
    /// 遷移した場合は `true` を返す。
    pub fn register(&mut self, name: DisplayName) -> bool {
        match self {
            ConnectionState::Unregistered => {
                *self = ConnectionState::Registered(name);
                true
            }
            _ => false,
        }
    }

    /// どの状態からでも Terminated に遷移し、直前に登録されていた名前を返す
    pub fn terminate(&mut self) -> Option<DisplayName> {
        match std::mem::replace(self, ConnectionState::Terminated) {
            ConnectionState::Registered(name) => Some(name),
            _ => None,
        }
    }
}
