//! 订单接口
//!
//! 订单只增不删, 状态流转通过 PUT 更新

pub mod handler;

use axum::routing::get;
use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_orders).post(handler::create_order))
        .route("/{id}", get(handler::get_order).put(handler::update_order))
}
