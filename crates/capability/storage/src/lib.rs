//! # PMB Storage 模块
//!
//! 站点登记表及其存储抽象。
//!
//! ## 架构设计
//!
//! 1. **登记表** (`registry.rs`)：调用方持有的同步集合，所有核心操作显式接收它
//! 2. **接口抽象层** (`traits.rs`)：`SiteStore` 异步接口，供 HTTP 层使用
//! 3. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 4. **演示数据** (`seed.rs`)：三个内置站点
//! 5. **实现层** (`in_memory/`)：`RwLock<SiteRegistry>` 包装的内存存储
//!
//! ## 语义
//!
//! - `get` 未找到返回 `None`，由调用方渲染空状态
//! - `upsert` 按 id 整体替换，旧站点的嵌套集合不会与新数据合并
//! - 站点编码唯一；冲突时返回 `StorageErrorKind::Conflict`
//! - 无持久化：进程退出即丢失，需要时用 `to_json` / `from_json` 自行保存
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use pmb_storage::{SiteRegistry, SiteFilter};
//!
//! let mut registry = SiteRegistry::with_demo_sites();
//! let site = registry.get("1").cloned().expect("demo site");
//! registry.upsert(site)?;
//! let northern = registry.search(&SiteFilter { search: None, region: Some(domain::Region::North) });
//! ```

pub mod error;
pub mod in_memory;
pub mod registry;
pub mod seed;
pub mod traits;

pub use error::*;
pub use registry::*;
pub use seed::demo_sites;
pub use traits::*;

pub use in_memory::InMemorySiteStore;
