//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查与指标：/health, /metrics
//! - 站点管理：/sites, /sites/summary, /sites/{id}
//! - 设计数据：/sites/{id}/design/*
//! - 跨表同步：/sites/{id}/sync/*
//! - 物资台账：/sites/{id}/inventory
//! - AI 助手：/chat, /chat/history

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post, put},
};

/// 创建 API 路由
///
/// 返回包含所有 API 端点的 Router，支持 / 和 /api/ 两种前缀
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .route("/sites", get(list_sites))
        .route("/sites/summary", get(site_summary))
        .route(
            "/sites/:site_id",
            get(get_site).put(upsert_site).delete(delete_site),
        )
        .route("/sites/:site_id/design", get(get_design))
        .route("/sites/:site_id/design/calc-items", put(replace_calc_items))
        .route("/sites/:site_id/design/cost-items", put(replace_cost_items))
        .route("/sites/:site_id/design/battery", put(update_battery_params))
        .route("/sites/:site_id/sync/power-to-cost", post(sync_power_to_cost))
        .route(
            "/sites/:site_id/sync/cost-to-inventory",
            post(sync_cost_to_inventory),
        )
        .route(
            "/sites/:site_id/inventory",
            get(list_inventory).post(append_inventory_item),
        )
        .route("/chat", post(chat))
        .route("/chat/history", get(chat_history))
}
