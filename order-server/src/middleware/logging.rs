//! 请求日志中间件
//!
//! 记录所有进入的 HTTP 请求，包含请求 ID、路由和状态码

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, warn};

/// 请求日志中间件
///
/// 开始时记录方法和路由模板 (`/order/{id}` 而非具体 id)，
/// 结束时按状态码选择日志级别并带上延迟 (毫秒)。
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    // SetRequestIdLayer 在外层，正常情况下总能拿到
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Request started"
    );

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "Request completed with server error"
        );
    } else if response.status().is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "Request completed with client error"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "Request completed"
        );
    }

    response
}
