//! 追踪与请求 ID 生成。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 基础指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub sites_upserted: u64,
    pub recompute_requests: u64,
    pub power_cost_created: u64,
    pub inventory_created: u64,
    pub sync_rows_skipped: u64,
    pub chat_requests: u64,
    pub chat_failures: u64,
}

/// 基础指标。
pub struct TelemetryMetrics {
    sites_upserted: AtomicU64,
    recompute_requests: AtomicU64,
    power_cost_created: AtomicU64,
    inventory_created: AtomicU64,
    sync_rows_skipped: AtomicU64,
    chat_requests: AtomicU64,
    chat_failures: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            sites_upserted: AtomicU64::new(0),
            recompute_requests: AtomicU64::new(0),
            power_cost_created: AtomicU64::new(0),
            inventory_created: AtomicU64::new(0),
            sync_rows_skipped: AtomicU64::new(0),
            chat_requests: AtomicU64::new(0),
            chat_failures: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            sites_upserted: self.sites_upserted.load(Ordering::Relaxed),
            recompute_requests: self.recompute_requests.load(Ordering::Relaxed),
            power_cost_created: self.power_cost_created.load(Ordering::Relaxed),
            inventory_created: self.inventory_created.load(Ordering::Relaxed),
            sync_rows_skipped: self.sync_rows_skipped.load(Ordering::Relaxed),
            chat_requests: self.chat_requests.load(Ordering::Relaxed),
            chat_failures: self.chat_failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录站点新增或整体替换次数。
pub fn record_site_upserted() {
    metrics().sites_upserted.fetch_add(1, Ordering::Relaxed);
}

/// 记录派生字段重算次数。
pub fn record_recompute() {
    metrics().recompute_requests.fetch_add(1, Ordering::Relaxed);
}

/// 记录功率表同步到预算表新建的条目数。
pub fn record_power_cost_synced(created: u64) {
    metrics()
        .power_cost_created
        .fetch_add(created, Ordering::Relaxed);
}

/// 记录预算表同步到物资台账新建的条目数。
pub fn record_inventory_synced(created: u64) {
    metrics()
        .inventory_created
        .fetch_add(created, Ordering::Relaxed);
}

/// 记录同步时跳过的非法行数。
pub fn record_sync_skipped(skipped: u64) {
    metrics()
        .sync_rows_skipped
        .fetch_add(skipped, Ordering::Relaxed);
}

/// 记录对话请求次数。
pub fn record_chat_request() {
    metrics().chat_requests.fetch_add(1, Ordering::Relaxed);
}

/// 记录对话失败次数（LLM 不可用或返回异常）。
pub fn record_chat_failure() {
    metrics().chat_failures.fetch_add(1, Ordering::Relaxed);
}
