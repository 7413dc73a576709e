//! Database Models

pub mod order;

// Re-exports
pub use order::{OrderDocument, OrderRecord};
