//! 站点登记表
//!
//! 调用方持有的内存集合，按插入顺序保存 Site：
//! - get：按 id 查找，未找到返回 None（可恢复）
//! - upsert：按 id 整体替换或追加，不做字段合并
//! - 站点编码在登记表内唯一
//!
//! 单线程同步使用；需要跨请求共享时由 [`crate::InMemorySiteStore`] 加锁包装。

use crate::error::StorageError;
use crate::seed::demo_sites;
use domain::{Region, Site, SiteStatus};
use std::collections::BTreeMap;
use tracing::info;

/// upsert 结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// 站点列表过滤条件。
#[derive(Debug, Clone, Default)]
pub struct SiteFilter {
    /// 关键字：名称、编码、省份，大小写不敏感的子串匹配。
    pub search: Option<String>,
    pub region: Option<Region>,
}

impl SiteFilter {
    pub fn matches(&self, site: &Site) -> bool {
        if let Some(region) = self.region {
            if site.region != region {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(keyword) if !keyword.is_empty() => {
                let keyword = keyword.to_lowercase();
                [&site.name, &site.code, &site.province]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&keyword))
            }
            _ => true,
        }
    }
}

/// 站点总览统计。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteSummary {
    pub total: usize,
    pub active: usize,
    pub planned: usize,
    pub offline: usize,
    pub maintenance: usize,
    /// 额定功率合计（kW）。
    pub total_power_kw: f64,
    /// 运行站点占比（整数百分比），无站点时为 0。
    pub active_percent: u32,
    pub by_region: BTreeMap<Region, usize>,
}

/// 站点登记表。
#[derive(Debug, Clone, Default)]
pub struct SiteRegistry {
    sites: Vec<Site>,
}

impl SiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置演示站点（Móng Cái、Nam Định、Ngọc Hồi）。
    pub fn with_demo_sites() -> Self {
        Self { sites: demo_sites() }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// 按插入顺序列出全部站点。
    pub fn list(&self) -> &[Site] {
        &self.sites
    }

    /// 按 id 查找站点。
    pub fn get(&self, site_id: &str) -> Option<&Site> {
        self.sites.iter().find(|site| site.id == site_id)
    }

    /// 按 id 整体替换或追加。
    ///
    /// 编码已被其他站点占用时返回冲突错误，登记表保持不变。
    pub fn upsert(&mut self, site: Site) -> Result<UpsertOutcome, StorageError> {
        let code_taken = self
            .sites
            .iter()
            .any(|existing| existing.code == site.code && existing.id != site.id);
        if code_taken {
            return Err(StorageError::conflict(format!(
                "site code {} exists",
                site.code
            )));
        }
        let outcome = match self.sites.iter_mut().find(|existing| existing.id == site.id) {
            Some(existing) => {
                *existing = site;
                UpsertOutcome::Replaced
            }
            None => {
                self.sites.push(site);
                UpsertOutcome::Inserted
            }
        };
        Ok(outcome)
    }

    /// 在原站点副本上执行修改后整体替换，返回修改后的站点。
    ///
    /// 站点不存在时返回 `None` 且不插入；修改不能变更 id。
    pub fn update<F>(&mut self, site_id: &str, apply: F) -> Result<Option<Site>, StorageError>
    where
        F: FnOnce(&mut Site),
    {
        let Some(mut site) = self.get(site_id).cloned() else {
            return Ok(None);
        };
        apply(&mut site);
        site.id = site_id.to_string();
        self.upsert(site.clone())?;
        Ok(Some(site))
    }

    /// 删除站点（连同设计数据与物资台账）。
    pub fn remove(&mut self, site_id: &str) -> bool {
        let before = self.sites.len();
        self.sites.retain(|site| site.id != site_id);
        self.sites.len() != before
    }

    /// 按过滤条件筛选站点。
    pub fn search(&self, filter: &SiteFilter) -> Vec<Site> {
        self.sites
            .iter()
            .filter(|site| filter.matches(site))
            .cloned()
            .collect()
    }

    /// 汇总统计。
    pub fn summary(&self) -> SiteSummary {
        let mut summary = SiteSummary {
            total: self.sites.len(),
            ..SiteSummary::default()
        };
        for site in &self.sites {
            match site.status {
                SiteStatus::Active => summary.active += 1,
                SiteStatus::Planned => summary.planned += 1,
                SiteStatus::Offline => summary.offline += 1,
                SiteStatus::Maintenance => summary.maintenance += 1,
            }
            if site.power.is_finite() {
                summary.total_power_kw += site.power;
            }
            *summary.by_region.entry(site.region).or_default() += 1;
        }
        if summary.total > 0 {
            summary.active_percent =
                (summary.active as f64 / summary.total as f64 * 100.0).round() as u32;
        }
        summary
    }

    /// 序列化整个登记表（含设计数据与物资台账）。
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(&self.sites)?)
    }

    /// 从站点数组恢复登记表；编码重复时报错。
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        let sites: Vec<Site> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for site in sites {
            registry.upsert(site)?;
        }
        info!(sites = registry.len(), "site registry restored");
        Ok(registry)
    }
}
