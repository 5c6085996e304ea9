//! 站点 CRUD handlers
//!
//! 提供站点资源的增删改查接口：
//! - GET /sites?search=&region= - 列出站点（关键字、区域过滤）
//! - GET /sites/summary - 站点总览
//! - GET /sites/{id} - 获取完整站点（含设计数据与物资台账）
//! - PUT /sites/{id} - 新增或整体替换站点
//! - DELETE /sites/{id} - 删除站点
//!
//! PUT 以路径中的 id 为准；编码冲突返回 409。

use super::SitePath;
use crate::AppState;
use crate::utils::{
    bad_request_error, not_found_error, ok, parse_region, site_to_list_item, storage_error,
    summary_to_dto, validation_error,
};
use api_contract::{SiteListItemDto, SiteListQuery};
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use domain::{Site, validate_site};
use pmb_storage::SiteFilter;
use pmb_telemetry::record_site_upserted;

/// 列出站点
pub async fn list_sites(
    State(state): State<AppState>,
    Query(query): Query<SiteListQuery>,
) -> Response {
    let region = match parse_region(query.region) {
        Ok(region) => region,
        Err(response) => return response,
    };
    let filter = SiteFilter {
        search: query.search,
        region,
    };
    match state.site_store.search_sites(&filter).await {
        Ok(sites) => {
            let data: Vec<SiteListItemDto> = sites.into_iter().map(site_to_list_item).collect();
            ok(data)
        }
        Err(err) => storage_error(err),
    }
}

/// 站点总览
pub async fn site_summary(State(state): State<AppState>) -> Response {
    match state.site_store.site_summary().await {
        Ok(summary) => ok(summary_to_dto(summary)),
        Err(err) => storage_error(err),
    }
}

/// 获取站点详情
pub async fn get_site(State(state): State<AppState>, Path(path): Path<SitePath>) -> Response {
    match state.site_store.find_site(&path.site_id).await {
        Ok(Some(site)) => ok(site),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 新增或整体替换站点
pub async fn upsert_site(
    State(state): State<AppState>,
    Path(path): Path<SitePath>,
    Json(mut site): Json<Site>,
) -> Response {
    if !site.id.trim().is_empty() && site.id != path.site_id {
        return bad_request_error("id does not match path");
    }
    site.id = path.site_id;
    if let Err(err) = validate_site(&site) {
        return validation_error(err);
    }
    match state.site_store.upsert_site(site.clone()).await {
        Ok(_) => {
            record_site_upserted();
            ok(site)
        }
        Err(err) => storage_error(err),
    }
}

/// 删除站点
pub async fn delete_site(State(state): State<AppState>, Path(path): Path<SitePath>) -> Response {
    match state.site_store.delete_site(&path.site_id).await {
        Ok(true) => ok(serde_json::json!({ "deleted": path.site_id })),
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
