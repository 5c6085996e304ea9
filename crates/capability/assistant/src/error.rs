/// 对话助手错误。
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("prompt required")]
    EmptyPrompt,
    #[error("assistant transport failed: {0}")]
    Transport(String),
    #[error("assistant api error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("assistant returned no text")]
    EmptyReply,
    #[error("context serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        AssistantError::Transport(err.to_string())
    }
}
