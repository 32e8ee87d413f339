// Prometheus 风格指标端点

use axum::extract::State;
use std::sync::Arc;

use crate::state::AppState;

/// GET /metrics（text 格式）
pub async fn handle_metrics(State(state): State<Arc<AppState>>) -> String {
    render_metrics(&state.model_name, state.num_requests_running())
}

/// 渲染三个 gauge：运行中请求数为实时值，swapped/waiting 恒为 0.0
pub(crate) fn render_metrics(model_name: &str, num_requests_running: u64) -> String {
    format!(
        "# HELP vllm:num_requests_running Number of requests currently running on GPU.\n\
         # TYPE vllm:num_requests_running gauge\n\
         vllm:num_requests_running{{model_name=\"{model}\"}} {running}\n\
         # HELP vllm:num_requests_swapped Number of requests swapped to CPU.\n\
         # TYPE vllm:num_requests_swapped gauge\n\
         vllm:num_requests_swapped{{model_name=\"{model}\"}} 0.0\n\
         # HELP vllm:num_requests_waiting Number of requests waiting to be processed.\n\
         # TYPE vllm:num_requests_waiting gauge\n\
         vllm:num_requests_waiting{{model_name=\"{model}\"}} 0.0\n",
        model = model_name,
        running = num_requests_running,
    )
}
