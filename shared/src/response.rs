//! API Response types
//!
//! Success bodies are the bare payload (document, array, or count).
//! Every error body has the same shape:
//!
//! ```json
//! { "error": "order 0123... not found" }
//! ```

use serde::{Deserialize, Serialize};

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
