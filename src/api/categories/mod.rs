//! 分类管理接口

pub mod handler;

use axum::routing::{get, put};
use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/categories", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_categories).post(handler::create_category))
        .route(
            "/{id}",
            put(handler::update_category).delete(handler::delete_category),
        )
}
