use thiserror::Error;

use crate::core::config::ConfigError;
use crate::db::repository::RepoError;

/// 服务器启动/运行错误
///
/// 请求级错误使用 [`AppError`](crate::utils::AppError)，这里只承载进程级失败
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("数据库错误: {0}")]
    Database(#[from] RepoError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
