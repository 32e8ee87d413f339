//! OpenAI 兼容数据模型
//! 请求/响应的线上形状，字段布局与真实服务保持一致

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ValidationError;

/// 消息角色（闭集）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// 会话消息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// 补全请求
///
/// 未识别字段直接忽略；字段级默认值在反序列化时落位，
/// 因此只有显式传 null 的 max_tokens 才会回退到进程配置的默认值。
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: Option<u32>,
    #[serde(default = "default_temperature")]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub user: Option<String>,
    /// 接受但未实现（不做流式输出）
    #[serde(default)]
    pub stream: bool,
}

fn default_max_tokens() -> Option<u32> {
    Some(256)
}

fn default_temperature() -> Option<f32> {
    Some(1.0)
}

impl ChatCompletionRequest {
    /// 从原始 JSON 解码并校验
    ///
    /// messages 非空、角色合法由解码保证，temperature 范围在解码后单独检查。
    /// 校验失败不产生任何副作用。
    pub fn parse(body: Value) -> Result<Self, ValidationError> {
        let request: ChatCompletionRequest =
            serde_json::from_value(body).map_err(|e| ValidationError::Malformed {
                detail: e.to_string(),
            })?;

        if request.messages.is_empty() {
            return Err(ValidationError::EmptyMessages);
        }
        if let Some(temperature) = request.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ValidationError::TemperatureOutOfRange { value: temperature });
            }
        }

        Ok(request)
    }
}

/// 补全响应
///
/// 所有兼容性空字段显式序列化为 null，与真实服务的响应逐字段对齐。
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
    pub service_tier: Option<Value>,
    pub system_fingerprint: Option<Value>,
    pub prompt_logprobs: Option<Value>,
    pub kv_transfer_params: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub index: u32,
    pub finish_reason: String,
    pub logprobs: Option<Value>,
    pub stop_reason: Option<Value>,
    pub message: AssistantMessage,
}

/// 响应侧助手消息（带兼容性空字段）
#[derive(Debug, Clone, Serialize)]
pub struct AssistantMessage {
    pub role: Role,
    pub content: String,
    pub refusal: Option<Value>,
    pub annotations: Option<Value>,
    pub audio: Option<Value>,
    pub function_call: Option<Value>,
    pub tool_calls: Vec<Value>,
    pub reasoning_content: Option<Value>,
}

/// token 用量统计
#[derive(Debug, Clone, Serialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub completion_tokens_details: Option<Value>,
    pub prompt_tokens_details: Option<Value>,
}

/// 模型列表条目
#[derive(Debug, Clone, Serialize)]
pub struct ModelCard {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub owned_by: String,
    pub root: Option<Value>,
    pub parent: Option<Value>,
}

/// 模型列表响应
#[derive(Debug, Clone, Serialize)]
pub struct ModelList {
    pub object: String,
    pub data: Vec<ModelCard>,
}
