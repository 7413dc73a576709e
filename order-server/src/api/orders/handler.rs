//! Order API Handlers
//!
//! 路径中的 id 总是先解析 (格式错误直接 400)，再解码请求体。

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::models::{InsertOneResult, Order, OrderPayload, WaiterUpdate};
use validator::Validate;

use crate::core::ServerState;
use crate::db::DocumentId;
use crate::db::models::OrderDocument;
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult};

/// POST /order - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderPayload>, JsonRejection>,
) -> AppResult<Json<InsertOneResult>> {
    let Json(payload) = payload?;
    let document = OrderDocument::try_from(payload)?;

    let repo = OrderRepository::new(&state.db);
    let order = repo.create(document).await.map_err(|e| {
        tracing::error!(error = %e, "failed to insert order");
        AppError::internal("order item was not created")
    })?;

    Ok(Json(InsertOneResult {
        inserted_id: order.id,
    }))
}

/// GET /orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(&state.db);
    let orders = repo.find_all().await?;
    Ok(Json(orders))
}

/// GET /orders/waiter/{waiter} - 按服务员筛选订单
pub async fn list_by_waiter(
    State(state): State<ServerState>,
    Path(waiter): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(&state.db);
    let orders = repo.find_by_waiter(&waiter).await?;
    Ok(Json(orders))
}

/// GET /order/{id} - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let id: DocumentId = id.parse()?;
    let repo = OrderRepository::new(&state.db);
    let order = repo.find_by_id(&id).await?;
    Ok(Json(order))
}

/// PATCH|PUT /order/{id}/waiter - 更换服务员
///
/// 返回修改数量 (0 或 1)
pub async fn update_waiter(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<WaiterUpdate>, JsonRejection>,
) -> AppResult<Json<u64>> {
    let id: DocumentId = id.parse()?;
    let Json(payload) = payload?;
    payload.validate()?;
    let server = payload
        .server
        .ok_or_else(|| AppError::validation("server: field is required"))?;

    let repo = OrderRepository::new(&state.db);
    let modified = repo.update_waiter(&id, server).await?;
    Ok(Json(modified))
}

/// PUT /order/{id} - 整体替换订单 (id 不变)
///
/// 返回修改数量 (0 或 1)
pub async fn replace(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<OrderPayload>, JsonRejection>,
) -> AppResult<Json<u64>> {
    let id: DocumentId = id.parse()?;
    let Json(payload) = payload?;
    let document = OrderDocument::try_from(payload)?;

    let repo = OrderRepository::new(&state.db);
    let modified = repo.replace(&id, document).await?;
    Ok(Json(modified))
}

/// DELETE /order/{id} - 删除订单
///
/// 返回删除数量 (0 或 1)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<u64>> {
    let id: DocumentId = id.parse()?;
    let repo = OrderRepository::new(&state.db);
    let deleted = repo.delete(&id).await?;
    Ok(Json(deleted))
}
