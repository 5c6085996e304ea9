//! 会话内对话记录。

/// 首条问候语。
pub const GREETING: &str =
    "Xin chào! Tôi là trợ lý ảo PMB. Tôi có thể giúp gì cho bạn về dữ liệu hạ tầng?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// 对话记录，仅在进程内保存，不持久化。
#[derive(Debug, Clone)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    /// 以问候语开头的新会话。
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Model,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: text.into(),
        });
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::Model,
            text: text.into(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new()
    }
}
