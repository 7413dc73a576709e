//! Data models
//!
//! Shared between order-server and API clients.
//! IDs are 32-char lowercase hex strings assigned by the server on insert.

pub mod order;

// Re-exports
pub use order::*;
