//! Document ID
//!
//! 订单 ID 统一为 32 位小写十六进制字符串 (UUID v4 simple 格式)，
//! 作为 SurrealDB RecordId 的 key: `orders:<hex>`

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

const ID_LEN: usize = 32;

/// 无效的文档 ID (调用方输入错误)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid document id {0:?}: expected 32 hexadecimal characters")]
pub struct DocumentIdError(String);

/// Store-native document identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DocumentId {
    type Err = DocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DocumentIdError(s.to_string()));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
