use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::utils::{AppError, AppResult, parse_body};

/// POST /api/menu-items
pub async fn create_menu_item(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let payload: MenuItemCreate = parse_body(body)?;
    let item = state.store.create_menu_item(payload).await?;
    info!(target: "menu_items", name = %item.name, "Menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/menu-items/{id}
pub async fn update_menu_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<MenuItem>> {
    let payload: MenuItemUpdate = parse_body(body)?;
    let item = state
        .store
        .update_menu_item(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("Menu item not found"))?;
    Ok(Json(item))
}

/// DELETE /api/menu-items/{id}
pub async fn delete_menu_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.store.delete_menu_item(&id).await? {
        return Err(AppError::not_found("Menu item not found"));
    }
    info!(target: "menu_items", id = %id, "Menu item deleted");
    Ok(StatusCode::NO_CONTENT)
}
