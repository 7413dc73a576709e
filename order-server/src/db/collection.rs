//! Collection handle
//!
//! 每个操作都是一次存储调用，并包在独立的超时里。
//! 修改类操作 (update/replace/delete) 返回操作前的文档，
//! 调用方据此计算 modified/deleted 数量，无需第二次往返。

use std::future::IntoFuture;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};

use super::DocumentId;
use super::repository::{RepoError, RepoResult};

/// Query filter
///
/// 只支持全量或单字段精确匹配
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    Eq { field: &'static str, value: String },
}

impl Filter {
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Self::Eq {
            field,
            value: value.into(),
        }
    }
}

/// Handle to one collection (SurrealDB table)
#[derive(Clone, Debug)]
pub struct Collection {
    client: Surreal<Any>,
    name: String,
    timeout: Duration,
}

impl Collection {
    pub(crate) fn new(client: Surreal<Any>, name: &str, timeout: Duration) -> Self {
        Self {
            client,
            name: name.to_string(),
            timeout,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn record_id(&self, id: &DocumentId) -> RecordId {
        RecordId::from_table_key(self.name.as_str(), id.to_string())
    }

    /// 字段名会拼进查询语句，只接受 `[A-Za-z_][A-Za-z0-9_]*`
    fn check_field(&self, field: &str) -> RepoResult<()> {
        let mut chars = field.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(RepoError::InvalidArgument(format!(
                "invalid field name {:?} for {}",
                field, self.name
            )))
        }
    }

    /// Run one store operation under the collection timeout
    async fn run<T>(&self, op: impl IntoFuture<Output = surrealdb::Result<T>>) -> RepoResult<T> {
        match tokio::time::timeout(self.timeout, op).await {
            Ok(result) => result.map_err(RepoError::from),
            Err(_) => Err(RepoError::Unavailable(format!(
                "operation on {} timed out after {}s",
                self.name,
                self.timeout.as_secs()
            ))),
        }
    }

    /// Insert a new document under `id`
    pub async fn insert_one<D, R>(&self, id: &DocumentId, document: D) -> RepoResult<R>
    where
        D: Serialize + Send + Sync + 'static,
        R: DeserializeOwned + Send + Sync + 'static,
    {
        let created: Option<R> = self
            .run(self.client.create(self.record_id(id)).content(document))
            .await?;
        created.ok_or_else(|| {
            RepoError::Database(format!("insert into {} returned no document", self.name))
        })
    }

    /// Materialize every document matching `filter`
    pub async fn find<R>(&self, filter: Filter) -> RepoResult<Vec<R>>
    where
        R: DeserializeOwned + Send + Sync + 'static,
    {
        let query = match &filter {
            Filter::All => self
                .client
                .query("SELECT * FROM type::table($tb)")
                .bind(("tb", self.name.clone())),
            Filter::Eq { field, value } => {
                self.check_field(field)?;
                self.client
                    .query(format!("SELECT * FROM type::table($tb) WHERE {field} = $value"))
                    .bind(("tb", self.name.clone()))
                    .bind(("value", value.clone()))
            }
        };

        let mut response = self.run(query).await?;
        let documents: Vec<R> = response.take(0)?;
        Ok(documents)
    }

    /// Fetch a single document by id
    pub async fn find_one<R>(&self, id: &DocumentId) -> RepoResult<Option<R>>
    where
        R: DeserializeOwned + Send + Sync + 'static,
    {
        self.run(self.client.select(self.record_id(id))).await
    }

    /// Set one field on the document, returning the pre-update document
    pub async fn update_one<V, R>(
        &self,
        id: &DocumentId,
        field: &'static str,
        value: V,
    ) -> RepoResult<Option<R>>
    where
        V: Serialize + Send + Sync + 'static,
        R: DeserializeOwned + Send + Sync + 'static,
    {
        self.check_field(field)?;
        let query = self
            .client
            .query(format!("UPDATE $rid SET {field} = $value RETURN BEFORE"))
            .bind(("rid", self.record_id(id)))
            .bind(("value", value));

        let mut response = self.run(query).await?;
        let before: Option<R> = response.take(0)?;
        Ok(before)
    }

    /// Replace the whole document body (id preserved), returning the pre-update document
    pub async fn replace_one<D, R>(&self, id: &DocumentId, document: D) -> RepoResult<Option<R>>
    where
        D: Serialize + Send + Sync + 'static,
        R: DeserializeOwned + Send + Sync + 'static,
    {
        let query = self
            .client
            .query("UPDATE $rid CONTENT $content RETURN BEFORE")
            .bind(("rid", self.record_id(id)))
            .bind(("content", document));

        let mut response = self.run(query).await?;
        let before: Option<R> = response.take(0)?;
        Ok(before)
    }

    /// Delete the document, returning it if it existed
    pub async fn delete_one<R>(&self, id: &DocumentId) -> RepoResult<Option<R>>
    where
        R: DeserializeOwned + Send + Sync + 'static,
    {
        self.run(self.client.delete(self.record_id(id))).await
    }
}
