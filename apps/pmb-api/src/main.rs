//! PMB 站点管理 API 服务入口。

use pmb_api::{AppState, build_router};
use pmb_assistant::{Assistant, GeminiClient};
use pmb_config::AppConfig;
use pmb_storage::{InMemorySiteStore, SiteStore};
use pmb_sync::InventorySyncMode;
use pmb_telemetry::init_tracing;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let site_store: Arc<dyn SiteStore> = if config.seed_demo {
        Arc::new(InMemorySiteStore::with_demo_sites())
    } else {
        Arc::new(InMemorySiteStore::new())
    };

    let assistant = match &config.chat {
        Some(chat) => {
            let client = GeminiClient::new(
                chat.endpoint.clone(),
                chat.model.clone(),
                chat.api_key.clone(),
                Duration::from_secs(chat.timeout_seconds),
            )?;
            info!(model = %chat.model, "assistant enabled");
            Some(Arc::new(Assistant::new(Arc::new(client))))
        }
        None => {
            warn!("PMB_GEMINI_API_KEY not set, assistant disabled");
            None
        }
    };

    let state = AppState::new(site_store, assistant)
        .with_battery_rounding(config.battery_rounding)
        .with_inventory_sync_mode(InventorySyncMode::from_dedupe(config.inventory_sync_dedupe));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!(addr = %config.http_addr, "pmb api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
