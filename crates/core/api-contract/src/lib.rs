//! 稳定的 DTO 与 API 响应契约。

use domain::{
    BatteryParams, Coordinates, CostLineItem, Equipment, PowerLoadItem, Rack, RectifierParams,
    RoomParams, SiteStatus,
};
use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 站点列表查询参数。
#[derive(Debug, Default, Deserialize)]
pub struct SiteListQuery {
    pub search: Option<String>,
    /// 区域：North / Central / South，或越南语标签。
    pub region: Option<String>,
}

/// 站点列表条目（不含设计数据与台账）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteListItemDto {
    pub id: String,
    pub code: String,
    pub name: String,
    pub region: String,
    pub status: SiteStatus,
    pub province: String,
    pub build_year: String,
    pub category: String,
    pub power: f64,
    pub racks: u32,
    pub manager: Option<String>,
    pub coordinates: Coordinates,
    pub inventory_count: usize,
}

/// 区域站点数。
#[derive(Debug, Serialize)]
pub struct RegionCountDto {
    pub region: String,
    pub count: usize,
}

/// 站点总览。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummaryDto {
    pub total: usize,
    pub active: usize,
    pub planned: usize,
    pub offline: usize,
    pub maintenance: usize,
    pub total_power_kw: f64,
    pub active_percent: u32,
    pub by_region: Vec<RegionCountDto>,
}

/// 带电流的功率负载行。
#[derive(Debug, Serialize)]
pub struct PowerLoadRowDto {
    #[serde(flatten)]
    pub item: PowerLoadItem,
    /// 电流（A），两位小数。
    pub current: f64,
}

/// 带行金额的预算行。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRowDto {
    #[serde(flatten)]
    pub item: CostLineItem,
    pub total_amount: f64,
}

/// 蓄电池选型结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatterySizingDto {
    pub required_ah: f64,
    pub string_count: f64,
    pub recommended_strings: u32,
}

/// 设计数据及其派生字段。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignViewDto {
    pub site_id: String,
    pub racks: Vec<Rack>,
    pub equipments: Vec<Equipment>,
    pub calc_items: Vec<PowerLoadRowDto>,
    pub total_load_w: f64,
    pub cost_estimate_items: Vec<CostRowDto>,
    pub grand_total: f64,
    pub room_params: RoomParams,
    pub battery_params: BatteryParams,
    pub rect_params: RectifierParams,
    pub battery: BatterySizingDto,
}

/// 功率负载表整体替换请求体。
#[derive(Debug, Deserialize)]
pub struct ReplaceCalcItemsRequest {
    pub items: Vec<PowerLoadItem>,
}

/// 预算表整体替换请求体。
#[derive(Debug, Deserialize)]
pub struct ReplaceCostItemsRequest {
    pub items: Vec<CostLineItem>,
}

/// 同步结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReportDto {
    pub created: usize,
    pub skipped: usize,
    /// 同步后目标表的行数。
    pub target_rows: usize,
}

/// 对话请求体。
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

/// 对话消息。
#[derive(Debug, Serialize)]
pub struct ChatMessageDto {
    /// `user` 或 `model`。
    pub role: String,
    pub text: String,
}

/// 对话回复。
#[derive(Debug, Serialize)]
pub struct ChatReplyDto {
    pub reply: String,
    pub history: Vec<ChatMessageDto>,
}

/// 指标快照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub sites_upserted: u64,
    pub recompute_requests: u64,
    pub power_cost_created: u64,
    pub inventory_created: u64,
    pub sync_rows_skipped: u64,
    pub chat_requests: u64,
    pub chat_failures: u64,
}
