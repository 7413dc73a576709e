//! Server Implementation
//!
//! HTTP 服务器启动和管理

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::{Result, ServerState};
use crate::middleware;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a fully configured application with all middleware and state
///
/// Used by the HTTP server and by in-process tests (`tower::ServiceExt::oneshot`)
pub fn build_app(state: ServerState) -> Router {
    crate::api::build_router()
        .with_state(state)
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response (must sit inside SetRequestIdLayer)
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Request ID - Generate unique ID for each request (outermost)
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
}

/// HTTP Server
pub struct Server {
    state: ServerState,
}

impl Server {
    /// Create server with an already connected state
    pub fn with_state(state: ServerState) -> Self {
        Self { state }
    }

    pub async fn run(&self) -> Result<()> {
        let config = &self.state.config;
        let app = build_app(self.state.clone());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(environment = %config.environment, "Order Server listening on {}", addr);

        if config.is_production() && config.database_url.starts_with("mem://") {
            tracing::warn!("in-memory document store in production, data is lost on restart");
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Ctrl-C 或 SIGTERM 时触发优雅关闭
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down...");
}
