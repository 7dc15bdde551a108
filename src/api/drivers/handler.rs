use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{DriverCreate, DriverPublic, DriverUpdate};
use crate::utils::{AppError, AppResult, parse_body};

#[derive(Debug, Deserialize)]
pub struct DriverListQuery {
    available: Option<String>,
}

/// GET /api/drivers?available=true
///
/// `available=true` 时只返回在线且启用的配送员, 其他取值忽略
pub async fn list_drivers(
    State(state): State<ServerState>,
    Query(query): Query<DriverListQuery>,
) -> AppResult<Json<Vec<DriverPublic>>> {
    let drivers = if matches!(query.available.as_deref(), Some("true")) {
        state.store.available_drivers().await?
    } else {
        state.store.list_drivers().await?
    };
    Ok(Json(drivers.into_iter().map(DriverPublic::from).collect()))
}

/// GET /api/drivers/{id}
pub async fn get_driver(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DriverPublic>> {
    let driver = state
        .store
        .get_driver(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Driver not found"))?;
    Ok(Json(driver.into()))
}

/// POST /api/drivers
///
/// 密码在存储层加盐哈希后落盘
pub async fn create_driver(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<DriverPublic>)> {
    let payload: DriverCreate = parse_body(body)?;
    let driver = state.store.create_driver(payload).await?;
    info!(target: "drivers", name = %driver.name, phone = %driver.phone, "Driver created");
    Ok((StatusCode::CREATED, Json(driver.into())))
}

/// PUT /api/drivers/{id}
pub async fn update_driver(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<DriverPublic>> {
    let payload: DriverUpdate = parse_body(body)?;
    let driver = state
        .store
        .update_driver(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("Driver not found"))?;
    Ok(Json(driver.into()))
}

/// DELETE /api/drivers/{id}
pub async fn delete_driver(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.store.delete_driver(&id).await? {
        return Err(AppError::not_found("Driver not found"));
    }
    info!(target: "drivers", id = %id, "Driver deleted");
    Ok(StatusCode::NO_CONTENT)
}
