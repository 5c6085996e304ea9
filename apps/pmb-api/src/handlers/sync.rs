//! 跨表同步 handlers
//!
//! - POST /sites/{id}/sync/power-to-cost - 功率负载表 → 预算表
//! - POST /sites/{id}/sync/cost-to-inventory - 预算表 → 物资台账
//!
//! 同步只在调用时发生；在存储写锁内完成并写回站点。

use super::SitePath;
use super::design::mutate_site;
use crate::AppState;
use crate::utils::ok;
use api_contract::SyncReportDto;
use axum::{
    extract::{Path, State},
    response::Response,
};
use domain::Site;
use pmb_storage::SiteMutation;
use pmb_sync::SyncReport;
use pmb_telemetry::{record_inventory_synced, record_power_cost_synced, record_sync_skipped};

fn report_to_dto(report: SyncReport, target_rows: usize) -> SyncReportDto {
    SyncReportDto {
        created: report.created,
        skipped: report.skipped,
        target_rows,
    }
}

/// 功率负载表同步到预算表
pub async fn sync_power_to_cost(
    State(state): State<AppState>,
    Path(path): Path<SitePath>,
) -> Response {
    let mut report = SyncReport::default();
    let apply: SiteMutation<'_> = Box::new(|site: &mut Site| {
        report = pmb_sync::sync_power_to_cost(&mut site.design_data);
    });
    let target_rows = match mutate_site(&state, &path.site_id, apply).await {
        Ok(site) => site.design_data.cost_estimate_items.len(),
        Err(response) => return response,
    };
    record_power_cost_synced(report.created as u64);
    record_sync_skipped(report.skipped as u64);
    ok(report_to_dto(report, target_rows))
}

/// 预算表同步到物资台账
pub async fn sync_cost_to_inventory(
    State(state): State<AppState>,
    Path(path): Path<SitePath>,
) -> Response {
    let mode = state.inventory_sync_mode;
    let ids = state.inventory_ids.as_ref();
    let mut report = SyncReport::default();
    let apply: SiteMutation<'_> = Box::new(|site: &mut Site| {
        report =
            pmb_sync::sync_cost_to_inventory(&site.design_data, &mut site.inventory, mode, ids);
    });
    let target_rows = match mutate_site(&state, &path.site_id, apply).await {
        Ok(site) => site.inventory.len(),
        Err(response) => return response,
    };
    record_inventory_synced(report.created as u64);
    record_sync_skipped(report.skipped as u64);
    ok(report_to_dto(report, target_rows))
}
