//! 存储接口 Trait 定义
//!
//! 定义站点登记表的异步接口：
//! - SiteStore：站点查询、整体替换、原子修改、删除、筛选、统计
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - 未找到站点返回 None / false，而不是错误
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use crate::registry::{SiteFilter, SiteSummary, UpsertOutcome};
use async_trait::async_trait;
use domain::Site;

/// 在写锁内对站点执行的修改
pub type SiteMutation<'a> = Box<dyn FnOnce(&mut Site) + Send + 'a>;

/// 站点存储接口
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// 按插入顺序列出全部站点
    async fn list_sites(&self) -> Result<Vec<Site>, StorageError>;

    /// 查找指定站点
    async fn find_site(&self, site_id: &str) -> Result<Option<Site>, StorageError>;

    /// 整体替换或新增站点
    async fn upsert_site(&self, site: Site) -> Result<UpsertOutcome, StorageError>;

    /// 原子地读取、修改并写回站点；站点不存在返回 None
    async fn update_site(
        &self,
        site_id: &str,
        apply: SiteMutation<'_>,
    ) -> Result<Option<Site>, StorageError>;

    /// 删除站点
    async fn delete_site(&self, site_id: &str) -> Result<bool, StorageError>;

    /// 按关键字与区域筛选站点
    async fn search_sites(&self, filter: &SiteFilter) -> Result<Vec<Site>, StorageError>;

    /// 站点总览统计
    async fn site_summary(&self) -> Result<SiteSummary, StorageError>;
}
