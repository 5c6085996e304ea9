//! # PMB Assistant 模块
//!
//! 站点数据问答：把站点登记表整体序列化为上下文，连同用户问题交给 LLM。
//!
//! - [`client`]：`ChatClient` 接口与 Gemini 实现
//! - [`context`]：上下文构造
//! - [`history`]：会话内对话记录
//!
//! 助手对登记表只读；外部服务失败只影响本次对话，不影响站点数据。

pub mod client;
pub mod context;
pub mod error;
pub mod history;

pub use client::{ChatClient, GeminiClient};
pub use context::build_context;
pub use error::AssistantError;
pub use history::{ChatHistory, ChatMessage, ChatRole, GREETING};

use domain::Site;
use std::sync::Arc;
use tracing::info;

/// 对话助手。
#[derive(Clone)]
pub struct Assistant {
    client: Arc<dyn ChatClient>,
}

impl Assistant {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    /// 基于当前站点数据回答一个问题。
    pub async fn reply(&self, sites: &[Site], prompt: &str) -> Result<String, AssistantError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }
        let context = build_context(sites)?;
        info!(sites = sites.len(), context_len = context.len(), "assistant request");
        self.client.generate(&context, prompt).await
    }
}
