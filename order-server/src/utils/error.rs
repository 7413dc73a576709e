//! 统一错误处理
//!
//! 所有错误响应都是只有一个字段的 JSON 对象：
//!
//! ```json
//! { "error": "order 0123... not found" }
//! ```
//!
//! # 状态码
//!
//! | 类型 | HTTP |
//! |------|------|
//! | NotFound | 404 |
//! | Validation / Invalid | 400 |
//! | Unavailable | 503 |
//! | Database / Internal | 500 |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorBody;
use tracing::error;
use validator::ValidationErrors;

use crate::db::DocumentIdError;
use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("{0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("{0}")]
    /// 无效请求：请求体解码失败、id 格式错误 (400)
    Invalid(String),

    #[error("{0}")]
    /// 存储不可达或超时 (503)
    Unavailable(String),

    #[error("{0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("{0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
            }
            AppError::Unavailable(msg) => {
                error!(target: "database", error = %msg, "Document store unavailable");
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
            }
            _ => {}
        }

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::InvalidArgument(msg) => AppError::Invalid(msg),
            RepoError::Unavailable(msg) => AppError::Unavailable(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<DocumentIdError> for AppError {
    fn from(err: DocumentIdError) -> Self {
        AppError::Invalid(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Invalid(rejection.body_text())
    }
}
