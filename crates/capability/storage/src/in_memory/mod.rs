//! 内存存储实现模块
//!
//! 包含以下实现：
//! - SiteStore: InMemorySiteStore

pub mod site;

pub use site::*;
