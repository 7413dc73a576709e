//! Database Module
//!
//! 启动时建立唯一的 SurrealDB 连接 ([`Database`])，
//! 再通过 [`Database::collection`] 派生命名集合句柄 ([`Collection`])。
//!
//! 连接串决定传输方式 (engine::any)：
//! - `ws://host:8000` / `http://host:8000` 远程服务
//! - `mem://` 进程内内存库 (测试)

pub mod collection;
pub mod id;
pub mod models;
pub mod repository;

pub use collection::{Collection, Filter};
pub use id::{DocumentId, DocumentIdError};

use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::Config;
use repository::{RepoError, RepoResult};

/// Database service, owns the shared store connection
#[derive(Clone, Debug)]
pub struct Database {
    client: Surreal<Any>,
    op_timeout: Duration,
}

impl Database {
    /// Connect to the document store
    ///
    /// 整个连接流程 (connect + signin + use_ns/use_db) 受 `connect_timeout` 约束
    pub async fn connect(config: &Config) -> RepoResult<Self> {
        let timeout = config.connect_timeout();
        let client = tokio::time::timeout(timeout, Self::open(config))
            .await
            .map_err(|_| {
                RepoError::Unavailable(format!(
                    "connection to {} timed out after {}s",
                    config.database_url,
                    timeout.as_secs()
                ))
            })??;

        tracing::info!(
            url = %config.database_url,
            namespace = %config.database_ns,
            database = %config.database_name,
            "connected to document store"
        );

        Ok(Self {
            client,
            op_timeout: config.request_timeout(),
        })
    }

    async fn open(config: &Config) -> surrealdb::Result<Surreal<Any>> {
        let client = any::connect(config.database_url.as_str()).await?;

        if let (Some(username), Some(password)) = (&config.database_user, &config.database_pass) {
            client
                .signin(Root {
                    username: username.as_str(),
                    password: password.as_str(),
                })
                .await?;
        }

        client
            .use_ns(config.database_ns.as_str())
            .use_db(config.database_name.as_str())
            .await?;

        Ok(client)
    }

    /// Handle to a named collection in the configured database
    ///
    /// 纯查找，无 I/O
    pub fn collection(&self, name: &str) -> Collection {
        Collection::new(self.client.clone(), name, self.op_timeout)
    }

    /// Store health check, bounded by the operation timeout
    pub async fn ping(&self) -> RepoResult<()> {
        match tokio::time::timeout(self.op_timeout, self.client.health()).await {
            Ok(result) => result.map_err(RepoError::from),
            Err(_) => Err(RepoError::Unavailable(format!(
                "health check timed out after {}s",
                self.op_timeout.as_secs()
            ))),
        }
    }

    /// Run raw SurrealQL against the store (schema setup in tests)
    #[cfg(test)]
    pub(crate) async fn execute(&self, sql: &str) -> RepoResult<()> {
        self.client.query(sql).await?.check()?;
        Ok(())
    }
}
