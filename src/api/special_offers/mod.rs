//! 促销活动接口

pub mod handler;

use axum::routing::{get, put};
use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/special-offers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_offers).post(handler::create_offer))
        .route(
            "/{id}",
            put(handler::update_offer).delete(handler::delete_offer),
        )
}
