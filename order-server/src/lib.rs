//! Order Server - 餐厅订单 CRUD 服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SurrealDB 文档存储，启动时建立单一连接
//! - **HTTP API** (`api`): 订单 RESTful 接口 + 健康检查
//! - **核心** (`core`): 配置、状态、服务器生命周期
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 连接、集合、模型、仓储
//! ├── middleware/    # 请求日志
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState, build_app};
pub use db::{Collection, Database, DocumentId};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境
///
/// 加载 `.env` (开发环境可选)，然后初始化日志
pub fn setup_environment() -> anyhow::Result<()> {
    // .env 不存在时忽略
    let _ = dotenvy::dotenv();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json = std::env::var("LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);
    let log_dir = std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty());

    init_logger_with_file(&level, json, log_dir.as_deref())
}

pub fn print_banner() {
    println!(
        r#"
   ____          __
  / __ \________/ /__  __________
 / / / / ___/ __  / _ \/ ___/ ___/
/ /_/ / /  / /_/ /  __/ /  (__  )
\____/_/   \__,_/\___/_/  /____/
    "#
    );
}
