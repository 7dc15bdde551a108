use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{MenuItem, Restaurant, RestaurantCreate, RestaurantUpdate};
use crate::utils::{AppError, AppResult, parse_body};

#[derive(Debug, Deserialize)]
pub struct RestaurantListQuery {
    #[serde(rename = "categoryId")]
    category_id: Option<String>,
}

/// GET /api/restaurants?categoryId={id}
///
/// 不带 `categoryId` 时返回全部餐厅
pub async fn list_restaurants(
    State(state): State<ServerState>,
    Query(query): Query<RestaurantListQuery>,
) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = match query.category_id.as_deref() {
        Some(category_id) => state.store.restaurants_by_category(category_id).await?,
        None => state.store.list_restaurants().await?,
    };
    Ok(Json(restaurants))
}

/// GET /api/restaurants/{id}
pub async fn get_restaurant(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = state
        .store
        .get_restaurant(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant not found"))?;
    Ok(Json(restaurant))
}

/// GET /api/restaurants/{id}/menu
///
/// 餐厅不存在时返回空列表而非 404, 与菜品过滤语义一致
pub async fn list_restaurant_menu(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.store.menu_items_by_restaurant(&id).await?;
    Ok(Json(items))
}

/// POST /api/restaurants
pub async fn create_restaurant(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Restaurant>)> {
    let payload: RestaurantCreate = parse_body(body)?;
    let restaurant = state.store.create_restaurant(payload).await?;
    info!(target: "restaurants", name = %restaurant.name, "Restaurant created");
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// PUT /api/restaurants/{id}
pub async fn update_restaurant(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Restaurant>> {
    let payload: RestaurantUpdate = parse_body(body)?;
    let restaurant = state
        .store
        .update_restaurant(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant not found"))?;
    Ok(Json(restaurant))
}

/// DELETE /api/restaurants/{id}
///
/// 不级联: 关联的菜品与订单保留原有的 `restaurantId`
pub async fn delete_restaurant(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.store.delete_restaurant(&id).await? {
        return Err(AppError::not_found("Restaurant not found"));
    }
    info!(target: "restaurants", id = %id, "Restaurant deleted");
    Ok(StatusCode::NO_CONTENT)
}
