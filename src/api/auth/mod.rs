//! 认证接口
//!
//! 管理员与配送员共用同一组端点, 通过 `userType` 区分身份

pub mod handler;

use axum::routing::{get, post};
use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/logout", post(handler::logout))
        .route("/verify", get(handler::verify))
}
