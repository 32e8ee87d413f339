// 模型列表与休眠状态端点

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::core::models::{ModelCard, ModelList};
use crate::state::AppState;

/// GET /v1/models
///
/// 固定单条目列表：配置的模型名，owned_by 固定为 "vllm"。
pub async fn handle_list_models(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ModelList {
        object: "list".to_string(),
        data: vec![ModelCard {
            id: state.model_name.clone(),
            object: "model".to_string(),
            created: chrono::Utc::now().timestamp(),
            owned_by: "vllm".to_string(),
            root: None,
            parent: None,
        }],
    })
}

/// GET /is_sleeping，始终报告未休眠
pub async fn handle_is_sleeping() -> impl IntoResponse {
    Json(json!({ "is_sleeping": false }))
}
