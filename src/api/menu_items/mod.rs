//! 菜品管理接口
//!
//! 按餐厅列出菜单见 [`crate::api::restaurants`]

pub mod handler;

use axum::routing::{post, put};
use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu-items", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create_menu_item))
        .route(
            "/{id}",
            put(handler::update_menu_item).delete(handler::delete_menu_item),
        )
}
