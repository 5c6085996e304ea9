//! AI 助手 handlers
//!
//! - GET /chat/history - 会话记录（首条为问候语）
//! - POST /chat - 基于当前站点数据提问
//!
//! 对话记录的锁不会跨越 LLM 调用；调用失败不影响站点数据。

use crate::AppState;
use crate::utils::{
    assistant_disabled_error, assistant_error, chat_history_to_dto, internal_error,
    normalize_required, ok, storage_error,
};
use api_contract::{ChatMessageDto, ChatReplyDto, ChatRequest};
use axum::{Json, extract::State, response::Response};
use pmb_assistant::ChatRole;
use pmb_telemetry::{record_chat_failure, record_chat_request};
use tracing::warn;

/// 读取会话记录
pub async fn chat_history(State(state): State<AppState>) -> Response {
    match state.chat_history.lock() {
        Ok(history) => ok(chat_history_to_dto(history.messages())),
        Err(_) => internal_error("chat history lock failed"),
    }
}

/// 提问
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    let prompt = match normalize_required(req.prompt, "prompt") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let assistant = match &state.assistant {
        Some(assistant) => assistant.clone(),
        None => return assistant_disabled_error(),
    };
    record_chat_request();

    let sites = match state.site_store.list_sites().await {
        Ok(sites) => sites,
        Err(err) => return storage_error(err),
    };
    if let Err(response) = record_turn(&state, ChatRole::User, &prompt) {
        return response;
    }

    let reply = match assistant.reply(&sites, &prompt).await {
        Ok(reply) => reply,
        Err(err) => {
            record_chat_failure();
            warn!(error = %err, "assistant request failed");
            return assistant_error(err);
        }
    };

    match record_turn(&state, ChatRole::Model, &reply) {
        Ok(history) => ok(ChatReplyDto { reply, history }),
        Err(response) => response,
    }
}

/// 追加一条对话并返回最新记录（同步函数，锁不会进入 future）
fn record_turn(state: &AppState, role: ChatRole, text: &str) -> Result<Vec<ChatMessageDto>, Response> {
    let mut history = state
        .chat_history
        .lock()
        .map_err(|_| internal_error("chat history lock failed"))?;
    match role {
        ChatRole::User => history.push_user(text),
        ChatRole::Model => history.push_model(text),
    }
    Ok(chat_history_to_dto(history.messages()))
}
