//! 餐厅管理接口
//!
//! 菜单列表挂在餐厅路径下: `GET /api/restaurants/{id}/menu`

pub mod handler;

use axum::routing::get;
use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/restaurants", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list_restaurants).post(handler::create_restaurant),
        )
        .route(
            "/{id}",
            get(handler::get_restaurant)
                .put(handler::update_restaurant)
                .delete(handler::delete_restaurant),
        )
        .route("/{id}/menu", get(handler::list_restaurant_menu))
}
