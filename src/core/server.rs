//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::time::Duration;

use axum::extract::Request;
use axum::response::Response;
use axum::{Router, middleware};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Per-request deadline; a slower request gets a 408
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// In-flight request cap across the whole process
const MAX_IN_FLIGHT_REQUESTS: usize = 1024;

/// HTTP 请求日志中间件
async fn log_request(request: Request, next: middleware::Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    tracing::info!(target: "http_access", "{} {} {} in {}ms", method, uri, status, elapsed_ms);

    response
}

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Public probes
        .merge(crate::api::health::router())
        // Auth API
        .merge(crate::api::auth::router())
        // Data model APIs
        .merge(crate::api::categories::router())
        .merge(crate::api::restaurants::router())
        .merge(crate::api::menu_items::router())
        .merge(crate::api::orders::router())
        .merge(crate::api::drivers::router())
        .merge(crate::api::special_offers::router())
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the HTTP server and the integration tests
pub fn build_app(state: ServerState) -> Router {
    // 生产环境不开放跨域; 开发/测试环境允许任意来源
    let cors = if state.config.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    };

    build_router()
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(GlobalConcurrencyLimitLayer::new(MAX_IN_FLIGHT_REQUESTS))
        // 请求日志中间件 - 最外层
        .layer(middleware::from_fn(log_request))
}

/// HTTP Server
pub struct Server {
    state: ServerState,
}

impl Server {
    pub fn with_state(state: ServerState) -> Self {
        Self { state }
    }

    /// Bind and serve until ctrl-c
    pub async fn run(self) -> AppResult<()> {
        let port = self.state.config.http_port;
        let app = build_app(self.state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::Internal(format!("binding {addr}: {e}")))?;

        tracing::info!("Sufra storefront server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await
            .map_err(|e| AppError::Internal(format!("server error: {e}")))?;

        Ok(())
    }
}
