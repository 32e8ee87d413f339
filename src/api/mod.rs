//! Web API 路由定义

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub mod chat;
pub mod metrics;
pub mod models;

/// 构建 API 路由
pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // OpenAI 兼容端点
        .route("/v1/chat/completions", post(chat::handle_chat_completions))
        .route("/v1/models", get(models::handle_list_models))
        // 运维端点
        .route("/is_sleeping", get(models::handle_is_sleeping))
        .route("/metrics", get(metrics::handle_metrics))
        // Health
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
}

/// 请求日志中间件
pub async fn request_logger(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed();
    tracing::info!(
        "{} {} - status: {}, latency: {}ms",
        method,
        uri,
        response.status(),
        duration.as_millis()
    );
    response
}
