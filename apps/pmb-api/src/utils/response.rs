//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：bad_request_error, not_found_error, conflict_error, storage_error,
//!   internal_error, assistant_error, assistant_disabled_error
//! - DTO 转换：site_to_list_item, summary_to_dto, design_view_to_dto, sizing_to_dto,
//!   chat_history_to_dto, metrics_to_dto
//!
//! 所有错误返回统一的 ApiResponse 格式，HTTP 状态码与错误码对应。

use api_contract::{
    ApiResponse, BatterySizingDto, ChatMessageDto, CostRowDto, DesignViewDto,
    MetricsSnapshotDto, PowerLoadRowDto, RegionCountDto, SiteListItemDto, SiteSummaryDto,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{DesignData, DomainError, Site};
use pmb_assistant::{AssistantError, ChatMessage};
use pmb_calc::{BatterySizing, DesignView};
use pmb_storage::{SiteSummary, StorageError};
use pmb_telemetry::MetricsSnapshot;

/// 成功响应
pub fn ok<T: serde::Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 领域校验失败响应
pub fn validation_error(err: DomainError) -> Response {
    bad_request_error(err.to_string())
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 资源冲突响应（站点编码重复）
pub fn conflict_error(message: impl Into<String>) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ApiResponse::<()>::error("RESOURCE.CONFLICT", message.into())),
    )
        .into_response()
}

/// 内部错误响应
pub fn internal_error(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message.into())),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    if err.is_conflict() {
        return conflict_error(err.to_string());
    }
    internal_error(err.to_string())
}

/// AI 助手调用失败响应
pub fn assistant_error(err: AssistantError) -> Response {
    match err {
        AssistantError::EmptyPrompt => bad_request_error(err.to_string()),
        err => (
            StatusCode::BAD_GATEWAY,
            Json(ApiResponse::<()>::error(
                "ASSISTANT.UNAVAILABLE",
                err.to_string(),
            )),
        )
            .into_response(),
    }
}

/// 未配置 API Key 时的对话响应
pub fn assistant_disabled_error() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiResponse::<()>::error(
            "ASSISTANT.UNAVAILABLE",
            "assistant api key not configured",
        )),
    )
        .into_response()
}

/// Site 转列表条目
pub fn site_to_list_item(site: Site) -> SiteListItemDto {
    SiteListItemDto {
        inventory_count: site.inventory.len(),
        id: site.id,
        code: site.code,
        name: site.name,
        region: site.region.as_str().to_string(),
        status: site.status,
        province: site.province,
        build_year: site.build_year,
        category: site.category,
        power: site.power,
        racks: site.racks,
        manager: site.manager,
        coordinates: site.coordinates,
    }
}

/// SiteSummary 转 SiteSummaryDto
pub fn summary_to_dto(summary: SiteSummary) -> SiteSummaryDto {
    SiteSummaryDto {
        total: summary.total,
        active: summary.active,
        planned: summary.planned,
        offline: summary.offline,
        maintenance: summary.maintenance,
        total_power_kw: summary.total_power_kw,
        active_percent: summary.active_percent,
        by_region: summary
            .by_region
            .into_iter()
            .map(|(region, count)| RegionCountDto {
                region: region.as_str().to_string(),
                count,
            })
            .collect(),
    }
}

/// BatterySizing 转 BatterySizingDto（两位小数）
pub fn sizing_to_dto(sizing: BatterySizing) -> BatterySizingDto {
    BatterySizingDto {
        required_ah: pmb_calc::round2(sizing.required_ah),
        string_count: pmb_calc::round2(sizing.string_count),
        recommended_strings: sizing.recommended_strings,
    }
}

/// 设计数据与派生视图合并为 DesignViewDto
pub fn design_view_to_dto(site_id: String, design: DesignData, view: DesignView) -> DesignViewDto {
    DesignViewDto {
        site_id,
        racks: design.racks,
        equipments: design.equipments,
        calc_items: view
            .power_rows
            .into_iter()
            .map(|row| PowerLoadRowDto {
                item: row.item,
                current: row.current,
            })
            .collect(),
        total_load_w: view.total_load_w,
        cost_estimate_items: view
            .cost_rows
            .into_iter()
            .map(|row| CostRowDto {
                item: row.item,
                total_amount: row.total_amount,
            })
            .collect(),
        grand_total: view.grand_total,
        room_params: design.room_params,
        battery_params: design.battery_params,
        rect_params: design.rect_params,
        battery: sizing_to_dto(view.battery),
    }
}

/// 对话记录转 DTO
pub fn chat_history_to_dto(messages: &[ChatMessage]) -> Vec<ChatMessageDto> {
    messages
        .iter()
        .map(|message| ChatMessageDto {
            role: message.role.as_str().to_string(),
            text: message.text.clone(),
        })
        .collect()
}

/// MetricsSnapshot 转 DTO
pub fn metrics_to_dto(snapshot: MetricsSnapshot) -> MetricsSnapshotDto {
    MetricsSnapshotDto {
        sites_upserted: snapshot.sites_upserted,
        recompute_requests: snapshot.recompute_requests,
        power_cost_created: snapshot.power_cost_created,
        inventory_created: snapshot.inventory_created,
        sync_rows_skipped: snapshot.sync_rows_skipped,
        chat_requests: snapshot.chat_requests,
        chat_failures: snapshot.chat_failures,
    }
}
