//! Order Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order entity as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned id (32 hex chars)
    pub id: String,
    pub dish: String,
    pub price: f64,
    /// Waiter assigned to the order
    pub server: String,
    pub table: String,
}

/// Create / replace order payload
///
/// Every field is optional at the JSON layer so that a missing field surfaces
/// as a validation error (400) rather than a decode error. A client-supplied
/// `id` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderPayload {
    #[validate(required)]
    pub dish: Option<String>,
    #[validate(required)]
    pub price: Option<f64>,
    #[validate(required)]
    pub server: Option<String>,
    #[validate(required)]
    pub table: Option<String>,
}

impl OrderPayload {
    pub fn new(
        dish: impl Into<String>,
        price: f64,
        server: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            dish: Some(dish.into()),
            price: Some(price),
            server: Some(server.into()),
            table: Some(table.into()),
        }
    }
}

/// Update waiter payload (`PATCH /order/{id}/waiter`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct WaiterUpdate {
    #[validate(required)]
    pub server: Option<String>,
}

/// Insert acknowledgment returned by `POST /order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOneResult {
    #[serde(rename = "InsertedID")]
    pub inserted_id: String,
}
