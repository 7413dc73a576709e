//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 存活 + 文档存储可达性 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "database": { "status": "ok", "latency_ms": 1 }
//! }
//! ```
//!
//! 存储不可达时 `status` 为 `degraded`，HTTP 503。

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use std::time::Instant;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// healthy | degraded
    status: &'static str,
    version: &'static str,
    database: CheckResult,
}

/// 单项检查结果
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// ok | error
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok_with_latency(latency_ms: u64) -> Self {
        Self {
            status: "ok",
            latency_ms: Some(latency_ms),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            message: Some(message.into()),
        }
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let start = Instant::now();
    let database = match state.db.ping().await {
        Ok(()) => CheckResult::ok_with_latency(start.elapsed().as_millis() as u64),
        Err(e) => {
            tracing::warn!(error = %e, "health check: document store unreachable");
            CheckResult::error(e.to_string())
        }
    };

    let (status_code, status) = if database.is_ok() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}
