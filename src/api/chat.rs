// 补全端点处理器

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::core::error::ValidationError;
use crate::core::generate::generate_fake_content;
use crate::core::models::{
    AssistantMessage, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, Role,
    Usage,
};
use crate::state::AppState;

/// POST /v1/chat/completions
///
/// 原始 body 先走显式校验，校验失败直接 422 返回，不触碰运行计数。
pub async fn handle_chat_completions(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ValidationError> {
    let request = ChatCompletionRequest::parse(body)?;

    let request_id = format!("chatcmpl-{}", Uuid::new_v4());
    tracing::info!("Received request with id: {}", request_id);

    // 解析生效的模型名与 max_tokens
    let model_name = if request.model.is_empty() {
        state.model_name.clone()
    } else {
        request.model.clone()
    };
    let max_tokens = request.max_tokens.unwrap_or(state.max_tokens);

    let response = build_response(&state, request_id, model_name, &request.messages, max_tokens);
    Ok(Json(response))
}

/// 组装补全响应
///
/// 整个生成窗口持有运行计数守卫，生成路径上任何退出（含 panic 展开）
/// 都会恢复计数。完成时记录请求 id 与耗时。
pub fn build_response(
    state: &AppState,
    request_id: String,
    model_name: String,
    messages: &[ChatMessage],
    max_tokens: u32,
) -> ChatCompletionResponse {
    let start = Instant::now();
    let _guard = state.running_guard();

    let content = generate_fake_content(messages);

    let prompt_tokens = 64;
    let completion_tokens = max_tokens.min(30);

    let response = ChatCompletionResponse {
        id: request_id,
        object: "chat.completion".to_string(),
        created: chrono::Utc::now().timestamp(),
        model: model_name,
        choices: vec![Choice {
            index: 0,
            finish_reason: "stop".to_string(),
            logprobs: None,
            stop_reason: None,
            message: AssistantMessage {
                role: Role::Assistant,
                content,
                refusal: None,
                annotations: None,
                audio: None,
                function_call: None,
                tool_calls: Vec::new(),
                reasoning_content: None,
            },
        }],
        usage: Usage {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
            completion_tokens_details: None,
            prompt_tokens_details: None,
        },
        service_tier: None,
        system_fingerprint: None,
        prompt_logprobs: None,
        kv_transfer_params: None,
    };

    tracing::info!(
        "Finished request with id: {}, elapsed time: {:.3}s",
        response.id,
        start.elapsed().as_secs_f64()
    );

    response
}
