//! 设计数据 handlers
//!
//! - GET /sites/{id}/design - 重新计算并返回派生视图
//! - PUT /sites/{id}/design/calc-items - 整体替换功率负载表
//! - PUT /sites/{id}/design/cost-items - 整体替换预算表
//! - PUT /sites/{id}/design/battery - 保存蓄电池参数并返回选型结果
//!
//! 写入在存储写锁内完成 读取 → 修改 → 替换；派生字段每次显式重算。

use super::SitePath;
use crate::AppState;
use crate::utils::{
    design_view_to_dto, not_found_error, ok, sizing_to_dto, storage_error, validation_error,
};
use api_contract::{ReplaceCalcItemsRequest, ReplaceCostItemsRequest};
use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use domain::{
    BatteryParams, Site, validate_battery_params, validate_cost_items, validate_power_items,
};
use pmb_calc::{recompute, size_battery};
use pmb_storage::SiteMutation;
use pmb_telemetry::{record_recompute, record_site_upserted};

/// 读取站点，未找到时返回 404 响应
pub(crate) async fn load_site(state: &AppState, site_id: &str) -> Result<Site, Response> {
    match state.site_store.find_site(site_id).await {
        Ok(Some(site)) => Ok(site),
        Ok(None) => Err(not_found_error()),
        Err(err) => Err(storage_error(err)),
    }
}

/// 原子地修改站点并返回修改后的记录，未找到时返回 404 响应
pub(crate) async fn mutate_site(
    state: &AppState,
    site_id: &str,
    apply: SiteMutation<'_>,
) -> Result<Site, Response> {
    match state.site_store.update_site(site_id, apply).await {
        Ok(Some(site)) => {
            record_site_upserted();
            Ok(site)
        }
        Ok(None) => Err(not_found_error()),
        Err(err) => Err(storage_error(err)),
    }
}

fn design_response(state: &AppState, site: Site) -> Response {
    record_recompute();
    let view = recompute(&site.design_data, state.battery_rounding);
    ok(design_view_to_dto(site.id, site.design_data, view))
}

/// 获取设计数据派生视图
pub async fn get_design(State(state): State<AppState>, Path(path): Path<SitePath>) -> Response {
    match load_site(&state, &path.site_id).await {
        Ok(site) => design_response(&state, site),
        Err(response) => response,
    }
}

/// 整体替换功率负载表
pub async fn replace_calc_items(
    State(state): State<AppState>,
    Path(path): Path<SitePath>,
    Json(req): Json<ReplaceCalcItemsRequest>,
) -> Response {
    if let Err(err) = validate_power_items(&req.items) {
        return validation_error(err);
    }
    let items = req.items;
    let apply: SiteMutation<'_> =
        Box::new(move |site: &mut Site| site.design_data.calc_items = items);
    match mutate_site(&state, &path.site_id, apply).await {
        Ok(site) => design_response(&state, site),
        Err(response) => response,
    }
}

/// 整体替换预算表
pub async fn replace_cost_items(
    State(state): State<AppState>,
    Path(path): Path<SitePath>,
    Json(req): Json<ReplaceCostItemsRequest>,
) -> Response {
    if let Err(err) = validate_cost_items(&req.items) {
        return validation_error(err);
    }
    let items = req.items;
    let apply: SiteMutation<'_> =
        Box::new(move |site: &mut Site| site.design_data.cost_estimate_items = items);
    match mutate_site(&state, &path.site_id, apply).await {
        Ok(site) => design_response(&state, site),
        Err(response) => response,
    }
}

/// 保存蓄电池参数
pub async fn update_battery_params(
    State(state): State<AppState>,
    Path(path): Path<SitePath>,
    Json(params): Json<BatteryParams>,
) -> Response {
    if let Err(err) = validate_battery_params(&params) {
        return validation_error(err);
    }
    let apply: SiteMutation<'_> =
        Box::new(move |site: &mut Site| site.design_data.battery_params = params);
    if let Err(response) = mutate_site(&state, &path.site_id, apply).await {
        return response;
    }
    record_recompute();
    ok(sizing_to_dto(size_battery(&params, state.battery_rounding)))
}
