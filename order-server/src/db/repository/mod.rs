//! Repository Module
//!
//! 在集合句柄之上提供按实体划分的 CRUD 操作，
//! 并在存储边界把所有失败归类为 [`RepoError`]。

pub mod order;

// Re-exports
pub use order::OrderRepository;

use thiserror::Error;

/// Repository error types
///
/// | 类型 | HTTP |
/// |------|------|
/// | NotFound | 404 |
/// | InvalidArgument | 400 |
/// | Unavailable | 503 |
/// | Database | 500 |
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
