use crate::core::Config;
use crate::db::Database;
use crate::db::repository::RepoResult;

/// 服务器状态 - 持有共享的数据库连接
///
/// 启动时构造一次，通过 axum `State` 传给每个处理器。
/// `Database` 内部是共享句柄，clone 成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Database | 文档存储连接 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 文档存储连接
    pub db: Database,
}

impl ServerState {
    pub fn new(config: Config, db: Database) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 建立唯一的数据库连接 (带连接超时)，失败即返回错误
    pub async fn initialize(config: &Config) -> RepoResult<Self> {
        let db = Database::connect(config).await?;
        Ok(Self::new(config.clone(), db))
    }
}
