//! PMB 骨干站点领域模型。
//!
//! - [`site`]：站点记录（Site）
//! - [`design`]：设计数据聚合（机柜、功率负载表、预算表、参数）
//! - [`inventory`]：物资条目与台账
//! - [`validation`]：边界校验
//!
//! 所有结构均可 serde 序列化，字段名为 camelCase。

pub mod design;
pub mod inventory;
pub mod lenient;
pub mod site;
pub mod validation;

pub use design::{
    BatteryParams, CostCategory, CostLineItem, DesignData, Equipment, EquipmentClass,
    ItemCondition, PowerLoadItem, Rack, RectifierParams, RoomParams,
};
pub use inventory::{InventoryItem, InventoryLedger, InventoryStatus, InventoryType, TransferState};
pub use site::{Coordinates, Region, Site, SiteStatus};
pub use validation::{
    DomainError, validate_battery_params, validate_cost_items, validate_power_items,
    validate_site,
};
