//! LLM 客户端。

use crate::error::AssistantError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// 文本生成接口；测试中可替换为桩实现。
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn generate(&self, context: &str, prompt: &str) -> Result<String, AssistantError>;
}

/// Gemini `generateContent` 客户端。
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AssistantError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// 取第一个候选的全部文本片段。
fn first_candidate_text(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    if text.trim().is_empty() { None } else { Some(text) }
}

#[async_trait]
impl ChatClient for GeminiClient {
    async fn generate(&self, context: &str, prompt: &str) -> Result<String, AssistantError> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: context }, Part { text: prompt }],
            }],
        };
        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), model = %self.model, "gemini request rejected");
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let parsed: GenerateResponse = response.json().await?;
        first_candidate_text(parsed).ok_or(AssistantError::EmptyReply)
    }
}
