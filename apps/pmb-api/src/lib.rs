//! PMB 站点管理 HTTP API。
//!
//! 应用状态与路由装配；`main.rs` 只负责读取配置和监听端口，
//! 集成测试直接使用 [`build_router`]。

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod utils;

use axum::{Router, middleware as axum_middleware};
use pmb_assistant::{Assistant, ChatHistory};
use pmb_calc::StringRounding;
use pmb_storage::SiteStore;
use pmb_sync::{InventoryIdGenerator, InventorySyncMode};
use std::sync::{Arc, Mutex};
use tower_http::trace::TraceLayer;

/// 应用共享状态。
#[derive(Clone)]
pub struct AppState {
    pub site_store: Arc<dyn SiteStore>,
    /// 未配置 API Key 时为 None，对话接口返回 503。
    pub assistant: Option<Arc<Assistant>>,
    pub chat_history: Arc<Mutex<ChatHistory>>,
    pub battery_rounding: StringRounding,
    pub inventory_sync_mode: InventorySyncMode,
    pub inventory_ids: Arc<InventoryIdGenerator>,
}

impl AppState {
    pub fn new(site_store: Arc<dyn SiteStore>, assistant: Option<Arc<Assistant>>) -> Self {
        Self {
            site_store,
            assistant,
            chat_history: Arc::new(Mutex::new(ChatHistory::new())),
            battery_rounding: StringRounding::default(),
            inventory_sync_mode: InventorySyncMode::default(),
            inventory_ids: Arc::new(InventoryIdGenerator::new()),
        }
    }

    pub fn with_battery_rounding(mut self, rounding: StringRounding) -> Self {
        self.battery_rounding = rounding;
        self
    }

    pub fn with_inventory_sync_mode(mut self, mode: InventorySyncMode) -> Self {
        self.inventory_sync_mode = mode;
        self
    }
}

/// 组装完整路由：同一组接口同时挂在 `/` 与 `/api` 下。
pub fn build_router(state: AppState) -> Router {
    let api = routes::create_api_router();
    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // 注入 request_id/trace_id
        .layer(axum_middleware::from_fn(middleware::request_context))
}
