//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::{ConnectionHandle, DisplayName};

/// `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub registered: usize,
}

/// One entry of `GET /api/users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub name: String,
    pub connection_id: String,
    pub peer: String,
    pub connected_at: String,
}

impl From<(DisplayName, ConnectionHandle)> for UserDto {
    fn from((name, conn): (DisplayName, ConnectionHandle)) -> Self {
        Self {
            name: name.into_string(),
            connection_id: conn.id().to_string(),
            peer: conn.peer().to_string(),
            connected_at: conn.connected_at().to_rfc3339(),
        }
    }
}
