//! 配送员管理接口
//!
//! 所有响应均使用 [`crate::db::models::DriverPublic`], 不对外暴露密码哈希

pub mod handler;

use axum::routing::get;
use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/drivers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_drivers).post(handler::create_driver))
        .route(
            "/{id}",
            get(handler::get_driver)
                .put(handler::update_driver)
                .delete(handler::delete_driver),
        )
}
