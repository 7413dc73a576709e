//! Order Repository

use super::{RepoError, RepoResult};
use crate::db::models::{OrderDocument, OrderRecord};
use crate::db::{Collection, Database, DocumentId, Filter};
use shared::models::Order;

const COLLECTION: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    collection: Collection,
}

impl OrderRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Find all orders
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let records: Vec<OrderRecord> = self.collection.find(Filter::All).await?;
        tracing::debug!(count = records.len(), "listed all orders");
        Ok(records.into_iter().map(Order::from).collect())
    }

    /// Find all orders served by `waiter` (exact match)
    pub async fn find_by_waiter(&self, waiter: &str) -> RepoResult<Vec<Order>> {
        let records: Vec<OrderRecord> = self
            .collection
            .find(Filter::eq("server", waiter))
            .await?;
        tracing::debug!(count = records.len(), waiter, "listed orders by waiter");
        Ok(records.into_iter().map(Order::from).collect())
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Order> {
        let record: Option<OrderRecord> = self.collection.find_one(id).await?;
        record
            .map(Order::from)
            .ok_or_else(|| RepoError::NotFound(format!("order {} not found", id)))
    }

    /// Create a new order under a freshly generated id
    pub async fn create(&self, data: OrderDocument) -> RepoResult<Order> {
        let id = DocumentId::generate();
        let created: OrderRecord = self.collection.insert_one(&id, data).await?;
        tracing::debug!(collection = self.collection.name(), id = %id, "order inserted");
        Ok(created.into())
    }

    /// Set the waiter of an order
    ///
    /// Returns the modified count: 0 if the order does not exist or already
    /// has this waiter, 1 otherwise.
    pub async fn update_waiter(&self, id: &DocumentId, server: String) -> RepoResult<u64> {
        let before: Option<OrderRecord> = self
            .collection
            .update_one(id, "server", server.clone())
            .await?;
        Ok(modified_count(before.is_some_and(|b| b.server != server)))
    }

    /// Replace dish/price/server/table, keeping the id
    ///
    /// Returns the modified count: 0 if the order does not exist or is
    /// identical, 1 otherwise.
    pub async fn replace(&self, id: &DocumentId, data: OrderDocument) -> RepoResult<u64> {
        let before: Option<OrderRecord> = self
            .collection
            .replace_one(id, data.clone())
            .await?;
        Ok(modified_count(before.is_some_and(|b| b.document() != data)))
    }

    /// Hard delete an order, returning the deleted count
    pub async fn delete(&self, id: &DocumentId) -> RepoResult<u64> {
        let deleted: Option<OrderRecord> = self.collection.delete_one(id).await?;
        Ok(modified_count(deleted.is_some()))
    }
}

fn modified_count(changed: bool) -> u64 {
    u64::from(changed)
}
