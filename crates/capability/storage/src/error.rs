//! 存储层错误类型
//!
//! 定义统一的存储错误类型：
//! - 冲突错误（站点编码重复）
//! - 快照序列化/反序列化错误
//! - 内部错误（锁中毒等）

/// 存储错误分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    Conflict,
    Internal,
}

#[derive(Debug)]
pub struct StorageError {
    kind: StorageErrorKind,
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: StorageErrorKind::Internal,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: StorageErrorKind::Conflict,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> StorageErrorKind {
        self.kind
    }

    pub fn is_conflict(&self) -> bool {
        self.kind == StorageErrorKind::Conflict
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
