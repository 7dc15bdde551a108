use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{SpecialOffer, SpecialOfferCreate, SpecialOfferUpdate};
use crate::utils::{AppError, AppResult, parse_body};

#[derive(Debug, Deserialize)]
pub struct OfferListQuery {
    active: Option<String>,
}

/// GET /api/special-offers?active=true
///
/// `active=true` 时只返回启用中的活动, 不检查 `validUntil`
pub async fn list_offers(
    State(state): State<ServerState>,
    Query(query): Query<OfferListQuery>,
) -> AppResult<Json<Vec<SpecialOffer>>> {
    let offers = if matches!(query.active.as_deref(), Some("true")) {
        state.store.active_special_offers().await?
    } else {
        state.store.list_special_offers().await?
    };
    Ok(Json(offers))
}

/// POST /api/special-offers
pub async fn create_offer(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<SpecialOffer>)> {
    let payload: SpecialOfferCreate = parse_body(body)?;
    let offer = state.store.create_special_offer(payload).await?;
    info!(target: "special_offers", title = %offer.title, "Special offer created");
    Ok((StatusCode::CREATED, Json(offer)))
}

/// PUT /api/special-offers/{id}
pub async fn update_offer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<SpecialOffer>> {
    let payload: SpecialOfferUpdate = parse_body(body)?;
    let offer = state
        .store
        .update_special_offer(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("Special offer not found"))?;
    Ok(Json(offer))
}

/// DELETE /api/special-offers/{id}
pub async fn delete_offer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.store.delete_special_offer(&id).await? {
        return Err(AppError::not_found("Special offer not found"));
    }
    info!(target: "special_offers", id = %id, "Special offer deleted");
    Ok(StatusCode::NO_CONTENT)
}
