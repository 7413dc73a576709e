//! Order API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /order | POST | 创建订单 |
//! | /orders | GET | 所有订单 |
//! | /orders/waiter/{waiter} | GET | 按服务员筛选 |
//! | /order/{id} | GET / PUT / DELETE | 查询 / 替换 / 删除 |
//! | /order/{id}/waiter | PATCH / PUT | 更换服务员 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/order", post(handler::create))
        .route("/orders", get(handler::list))
        .route("/orders/waiter/{waiter}", get(handler::list_by_waiter))
        .route(
            "/order/{id}",
            get(handler::get_by_id)
                .put(handler::replace)
                .delete(handler::delete),
        )
        .route(
            "/order/{id}/waiter",
            axum::routing::patch(handler::update_waiter).put(handler::update_waiter),
        )
}
