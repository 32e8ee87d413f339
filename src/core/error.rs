// 请求校验错误

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// 请求体校验失败
///
/// 在端点边界整体回收：转成 422 响应返回给调用方，不触碰任何共享状态。
#[derive(Debug, Error)]
pub enum ValidationError {
    /// messages 为空序列
    #[error("messages must contain at least one message")]
    EmptyMessages,
    /// temperature 超出 [0.0, 2.0]
    #[error("temperature must be within [0.0, 2.0], got {value}")]
    TemperatureOutOfRange { value: f32 },
    /// 请求体无法解码（缺字段、类型不符、非法角色等）
    #[error("invalid request body: {detail}")]
    Malformed { detail: String },
}

/// 422 响应体中的单条错误明细
#[derive(Debug, Serialize)]
pub struct ValidationDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    detail: Vec<ValidationDetail>,
}

impl ValidationError {
    fn detail(&self) -> ValidationDetail {
        match self {
            ValidationError::EmptyMessages => ValidationDetail {
                loc: vec!["body".to_string(), "messages".to_string()],
                msg: self.to_string(),
                error_type: "value_error.list.min_items".to_string(),
            },
            ValidationError::TemperatureOutOfRange { .. } => ValidationDetail {
                loc: vec!["body".to_string(), "temperature".to_string()],
                msg: self.to_string(),
                error_type: "value_error.number.not_in_range".to_string(),
            },
            ValidationError::Malformed { .. } => ValidationDetail {
                loc: vec!["body".to_string()],
                msg: self.to_string(),
                error_type: "value_error".to_string(),
            },
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = ValidationBody {
            detail: vec![self.detail()],
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_names_offending_field() {
        let detail = ValidationError::EmptyMessages.detail();
        assert_eq!(detail.loc, vec!["body", "messages"]);

        let detail = ValidationError::TemperatureOutOfRange { value: 3.0 }.detail();
        assert_eq!(detail.loc, vec!["body", "temperature"]);
        assert!(detail.msg.contains("3"));
    }

    #[test]
    fn test_into_response_is_422() {
        let response = ValidationError::EmptyMessages.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
