// 规则式内容生成

use super::models::{ChatMessage, Role};

/// 根据消息历史生成固定回复
///
/// 只检查最后一条 user 消息（小写后做子串匹配），匹配优先级固定，
/// 回复字符串逐字保留，既有测试夹具对其做精确断言。
pub fn generate_fake_content(messages: &[ChatMessage]) -> String {
    let last_user = messages.iter().rev().find(|m| m.role == Role::User);

    let Some(message) = last_user else {
        return "Hello! I'm a helpful assistant.".to_string();
    };

    let text = message.content.to_lowercase();

    if text.contains("name") && text.contains("bangladesh") {
        "Nice to meet you, Ifta. Your name is Ifta. The capital of Bangladesh is Dhaka.".to_string()
    } else if text.contains("name") {
        "Nice to meet you, Ifta. Your name is Ifta.".to_string()
    } else if text.contains("bangladesh") {
        "As for the capital of Bangladesh, it's Dhaka.".to_string()
    } else if text.contains("hello") {
        "Hello! How can I help you today?".to_string()
    } else {
        "I understand your question. Let me provide a helpful response.".to_string()
    }
}
