//! 健康检查与指标快照。
//!
//! - GET /health
//! - GET /metrics

use crate::utils::{metrics_to_dto, ok};
use axum::{Json, response::IntoResponse, response::Response};
use pmb_telemetry::metrics;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

pub async fn get_metrics() -> Response {
    ok(metrics_to_dto(metrics().snapshot()))
}
