//! 站点内存存储实现
//!
//! 功能：
//! - 可选内置演示站点
//! - 站点查询、整体替换、删除
//! - 筛选与统计

use crate::error::StorageError;
use crate::registry::{SiteFilter, SiteRegistry, SiteSummary, UpsertOutcome};
use crate::traits::{SiteMutation, SiteStore};
use domain::Site;
use std::sync::RwLock;
use tracing::info;

/// 站点内存存储
///
/// 使用 RwLock 包装 SiteRegistry，在 HTTP 请求之间共享。
pub struct InMemorySiteStore {
    registry: RwLock<SiteRegistry>,
}

impl InMemorySiteStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::from_registry(SiteRegistry::new())
    }

    /// 内置演示站点
    pub fn with_demo_sites() -> Self {
        Self::from_registry(SiteRegistry::with_demo_sites())
    }

    pub fn from_registry(registry: SiteRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// 导出整个登记表快照
    pub fn snapshot_json(&self) -> Result<String, StorageError> {
        self.registry
            .read()
            .map_err(|_| StorageError::new("lock failed"))?
            .to_json()
    }
}

impl Default for InMemorySiteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SiteStore for InMemorySiteStore {
    async fn list_sites(&self) -> Result<Vec<Site>, StorageError> {
        let registry = self
            .registry
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(registry.list().to_vec())
    }

    async fn find_site(&self, site_id: &str) -> Result<Option<Site>, StorageError> {
        let registry = self
            .registry
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(registry.get(site_id).cloned())
    }

    async fn upsert_site(&self, site: Site) -> Result<UpsertOutcome, StorageError> {
        let mut registry = self
            .registry
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let site_id = site.id.clone();
        let outcome = registry.upsert(site)?;
        info!(site_id = %site_id, ?outcome, "site upserted");
        Ok(outcome)
    }

    async fn update_site(
        &self,
        site_id: &str,
        apply: SiteMutation<'_>,
    ) -> Result<Option<Site>, StorageError> {
        let mut registry = self
            .registry
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let updated = registry.update(site_id, apply)?;
        if updated.is_some() {
            info!(site_id = %site_id, "site updated");
        }
        Ok(updated)
    }

    async fn delete_site(&self, site_id: &str) -> Result<bool, StorageError> {
        let mut registry = self
            .registry
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(registry.remove(site_id))
    }

    async fn search_sites(&self, filter: &SiteFilter) -> Result<Vec<Site>, StorageError> {
        let registry = self
            .registry
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(registry.search(filter))
    }

    async fn site_summary(&self) -> Result<SiteSummary, StorageError> {
        let registry = self
            .registry
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(registry.summary())
    }
}
