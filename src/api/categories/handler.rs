use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::utils::{AppError, AppResult, parse_body};

/// GET /api/categories
///
/// 获取所有分类
pub async fn list_categories(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories))
}

/// POST /api/categories
///
/// 创建分类, 返回 201 及完整记录
pub async fn create_category(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let payload: CategoryCreate = parse_body(body)?;
    let category = state.store.create_category(payload).await?;
    info!(target: "categories", name = %category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id}
///
/// 部分更新, 记录不存在时返回 404
pub async fn update_category(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Category>> {
    let payload: CategoryUpdate = parse_body(body)?;
    let category = state
        .store
        .update_category(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;
    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// 删除成功返回 204, 记录不存在时返回 404
pub async fn delete_category(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.store.delete_category(&id).await? {
        return Err(AppError::not_found("Category not found"));
    }
    info!(target: "categories", id = %id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}
