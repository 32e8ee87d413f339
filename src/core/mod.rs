//! 核心模块
//! 数据模型、校验与内容生成，不依赖任何 HTTP 框架

pub mod error;
pub mod generate;
pub mod models;

// 重导出常用类型
pub use error::ValidationError;
pub use models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role};
