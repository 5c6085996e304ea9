//! Handlers 模块

pub mod chat;
pub mod design;
pub mod inventory;
pub mod metrics;
pub mod sites;
pub mod sync;

pub use chat::*;
pub use design::*;
pub use inventory::*;
pub use metrics::*;
pub use sites::*;
pub use sync::*;

/// 站点路径参数。
#[derive(serde::Deserialize)]
pub struct SitePath {
    pub site_id: String,
}
