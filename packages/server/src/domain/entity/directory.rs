//! Directory エンティティ
//!
//! 表示名 ⇔ 接続 の双方向マップ。
//!
//! ## 不変条件
//!
//! - 2 つのマップは常に互いの逆写像である（要素数が等しく、片方にある組は必ずもう片方にもある）
//! - 1 接続につき名前は高々 1 つ、1 名前につき接続は高々 1 つ
//!
//! 排他制御はこの型の外側（`Arc<Mutex<Directory>>`）で行う。

use std::collections::HashMap;

use crate::domain::{ConnectionHandle, ConnectionId, DirectoryError, DisplayName};

#[derive(Debug, Default)]
pub struct Directory {
    names_to_connections: HashMap<DisplayName, ConnectionHandle>,
    connections_to_names: HashMap<ConnectionId, DisplayName>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 名前と接続を登録する
    ///
    /// 失敗時は状態を変更しない。名前の重複チェックが接続の重複チェックより先に行われる。
    pub fn register(
        &mut self,
        name: DisplayName,
        conn: ConnectionHandle,
    ) -> Result<(), DirectoryError> {
        if self.names_to_connections.contains_key(&name) {
            return Err(DirectoryError::NameTaken(name.into_string()));
        }
        if let Some(existing) = self.connections_to_names.get(&conn.id()) {
            return Err(DirectoryError::AlreadyRegistered(
                existing.as_str().to_string(),
            ));
        }

        self.connections_to_names.insert(conn.id(), name.clone());
        self.names_to_connections.insert(name, conn);
        Ok(())
    }

    /// 接続の登録を解除し、解放された名前を返す（未登録なら何もしない）
    pub fn unregister(&mut self, conn: &ConnectionId) -> Option<DisplayName> {
        let name = self.connections_to_names.remove(conn)?;
        self.names_to_connections.remove(&name);
        Some(name)
    }

    /// 名前に登録されている接続
    pub fn lookup(&self, name: &str) -> Option<&ConnectionHandle> {
        self.names_to_connections.get(name)
    }

    /// 接続に登録されている名前
    pub fn name_of(&self, conn: &ConnectionId) -> Option<&DisplayName> {
        self.connections_to_names.get(conn)
    }

    /// 全登録を名前の昇順で返す
    pub fn all_entries(&self) -> Vec<(&DisplayName, &ConnectionHandle)> {
        let mut entries: Vec<_> = self.names_to_connections.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    pub fn len(&self) -> usize {
        self.connections_to_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections_to_names.is_empty()
    }

    /// 2 つのマップが互いの逆写像になっているか
    pub fn is_consistent(&self) -> bool {
        self.names_to_connections.len() == self.connections_to_names.len()
            && self.names_to_connections.iter().all(|(name, conn)| {
                self.connections_to_names.get(&conn.id()) == Some(name)
            })
    }
}
