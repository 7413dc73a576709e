use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// 配置错误 (启动期致命错误)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | (必填) | 文档存储连接串 (ws://, http://, mem://) |
/// | DATABASE_NS | restaurant | 命名空间 |
/// | DATABASE_NAME | cluster0 | 数据库名 |
/// | DATABASE_USER | - | root 用户名 (可选) |
/// | DATABASE_PASS | - | root 密码 (可选) |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | CONNECT_TIMEOUT_SECS | 10 | 连接超时(秒) |
/// | REQUEST_TIMEOUT_SECS | 100 | 单次存储操作超时(秒) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=ws://localhost:8000 HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 文档存储连接串
    pub database_url: String,
    /// 命名空间
    pub database_ns: String,
    /// 数据库名 (固定，所有集合都在此库下)
    pub database_name: String,
    /// root 凭证 (两者都设置时才登录)
    pub database_user: Option<String>,
    pub database_pass: Option<String>,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 建立连接的超时时间 (秒)
    pub connect_timeout_secs: u64,
    /// 每个请求内单次存储操作的超时时间 (秒)
    pub request_timeout_secs: u64,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 使用默认值创建配置，只指定连接串
    ///
    /// 常用于测试场景 (`Config::new("mem://")`)
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            database_ns: "restaurant".into(),
            database_name: "cluster0".into(),
            database_user: None,
            database_pass: None,
            http_port: 8080,
            connect_timeout_secs: 10,
            request_timeout_secs: 100,
            environment: "development".into(),
        }
    }

    /// 从环境变量加载配置
    ///
    /// DATABASE_URL 必填；数值型变量存在但无法解析时返回错误
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// 从任意键值来源加载配置 (`from_env` 使用进程环境)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let defaults = Self::new(database_url);

        Ok(Self {
            database_ns: lookup("DATABASE_NS").unwrap_or(defaults.database_ns.clone()),
            database_name: lookup("DATABASE_NAME").unwrap_or(defaults.database_name.clone()),
            database_user: lookup("DATABASE_USER").filter(|s| !s.is_empty()),
            database_pass: lookup("DATABASE_PASS").filter(|s| !s.is_empty()),
            http_port: parse_or("HTTP_PORT", lookup("HTTP_PORT"), defaults.http_port)?,
            connect_timeout_secs: parse_or(
                "CONNECT_TIMEOUT_SECS",
                lookup("CONNECT_TIMEOUT_SECS"),
                defaults.connect_timeout_secs,
            )?,
            request_timeout_secs: parse_or(
                "REQUEST_TIMEOUT_SECS",
                lookup("REQUEST_TIMEOUT_SECS"),
                defaults.request_timeout_secs,
            )?,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment.clone()),
            ..defaults
        })
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// 解析可选的环境变量值，未设置时使用默认值
fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
