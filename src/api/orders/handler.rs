use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderUpdate};
use crate::utils::{AppError, AppResult, parse_body};

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    #[serde(rename = "restaurantId")]
    restaurant_id: Option<String>,
}

/// GET /api/orders?restaurantId={id}
pub async fn list_orders(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = match query.restaurant_id.as_deref() {
        Some(restaurant_id) => state.store.orders_by_restaurant(restaurant_id).await?,
        None => state.store.list_orders().await?,
    };
    Ok(Json(orders))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state
        .store
        .get_order(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;
    Ok(Json(order))
}

/// POST /api/orders
///
/// 状态默认 `pending`, 预计时长默认 30-45 分钟
pub async fn create_order(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let payload: OrderCreate = parse_body(body)?;
    let order = state.store.create_order(payload).await?;
    info!(
        target: "orders",
        customer = %order.customer_name,
        total = order.total,
        "Order created"
    );
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /api/orders/{id}
///
/// 每次更新都会刷新 `updatedAt`
pub async fn update_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Order>> {
    let payload: OrderUpdate = parse_body(body)?;
    let order = state
        .store
        .update_order(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;
    Ok(Json(order))
}
