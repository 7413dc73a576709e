//! Shared types for the orders service
//!
//! Wire-level types used by the HTTP API: order payloads, order documents as
//! returned to clients, and the error body shape.

pub mod models;
pub mod response;

// Re-exports
pub use models::{InsertOneResult, Order, OrderPayload, WaiterUpdate};
pub use response::ErrorBody;
pub use serde::{Deserialize, Serialize};
