use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::{Value, json};
use validator::Validate;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, parse_body};

#[derive(Debug, Deserialize, Validate)]
struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    email: String,
    #[validate(length(min = 1, message = "password is required"))]
    password: String,
}

#[derive(Debug, Deserialize, Validate)]
struct LogoutRequest {
    token: Option<String>,
}

/// POST /api/admin/login
///
/// 先按管理员凭据匹配, 失败后按配送员手机号匹配
/// 两种失败返回同一错误, 不泄露账号是否存在
pub async fn login(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    let payload: LoginRequest = parse_body(body)?;
    let outcome = state
        .sessions
        .login(state.store.as_ref(), &payload.email, &payload.password)
        .await?;

    let mut response = json!({
        "success": true,
        "token": outcome.token,
        "userType": outcome.user_type,
    });
    if let Some(driver_id) = outcome.driver_id {
        response["driverId"] = json!(driver_id);
    }
    Ok(Json(response))
}

/// POST /api/admin/logout
///
/// 幂等: token 缺失或已失效同样返回成功
pub async fn logout(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    let payload: LogoutRequest = parse_body(body)?;
    if let Some(token) = payload.token.as_deref() {
        state.sessions.logout(state.store.as_ref(), token).await?;
    }
    Ok(Json(json!({ "success": true })))
}

/// GET /api/admin/verify
///
/// 从 `Authorization: Bearer <token>` 读取会话令牌
pub async fn verify(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> AppResult<Json<Value>> {
    let token = bearer_token(&headers)?;
    let session = state.sessions.verify(state.store.as_ref(), token).await?;

    Ok(Json(json!({
        "valid": true,
        "userType": session.user_type,
        "adminId": session.admin_id,
    })))
}

fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(AppError::Unauthorized)
}
