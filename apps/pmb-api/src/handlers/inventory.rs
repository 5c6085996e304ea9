//! 物资台账 handlers
//!
//! - GET /sites/{id}/inventory - 读取台账
//! - POST /sites/{id}/inventory - 追加一条物资（直接录入）
//!
//! 台账只追加，编码允许重复。

use super::SitePath;
use super::design::{load_site, mutate_site};
use crate::AppState;
use crate::utils::{bad_request_error, ok};
use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use domain::{InventoryItem, Site};
use pmb_storage::SiteMutation;
use tracing::info;
use uuid::Uuid;

/// 读取物资台账
pub async fn list_inventory(State(state): State<AppState>, Path(path): Path<SitePath>) -> Response {
    match load_site(&state, &path.site_id).await {
        Ok(site) => ok(site.inventory),
        Err(response) => response,
    }
}

/// 追加物资；未提供 id 时自动生成
pub async fn append_inventory_item(
    State(state): State<AppState>,
    Path(path): Path<SitePath>,
    Json(mut item): Json<InventoryItem>,
) -> Response {
    if item.item_name.trim().is_empty() && item.item_code.trim().is_empty() {
        return bad_request_error("itemName or itemCode required");
    }
    if item.id.trim().is_empty() {
        item.id = Uuid::new_v4().to_string();
    }
    let appended = item.clone();
    let apply: SiteMutation<'_> = Box::new(move |site: &mut Site| site.inventory.append(appended));
    let items = match mutate_site(&state, &path.site_id, apply).await {
        Ok(site) => site.inventory.len(),
        Err(response) => return response,
    };
    info!(site_id = %path.site_id, item_id = %item.id, items, "inventory item appended");
    ok(item)
}
