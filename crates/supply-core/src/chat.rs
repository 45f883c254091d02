//! 聊天訊息模型

use serde::{Deserialize, Serialize};

/// 聊天紀錄中的一則訊息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 發送者名稱
    pub sender: String,

    /// 訊息內容
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
        }
    }
}
