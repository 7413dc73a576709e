//! API 路由模块
//!
//! - [`orders`] - 订单 CRUD 接口
//! - [`health`] - 健康检查

pub mod health;
pub mod orders;

use axum::Router;

use crate::core::ServerState;

/// 合并所有路由 (state 由 [`crate::core::build_app`] 注入)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(orders::router())
        .merge(health::router())
}
