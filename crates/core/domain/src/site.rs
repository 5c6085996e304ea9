//! 站点记录。
//!
//! 一个 Site 对应一座骨干传输站，独占一份设计数据与一本物资台账。

use crate::design::DesignData;
use crate::inventory::InventoryLedger;
use crate::lenient;
use serde::{Deserialize, Serialize};

/// 站点所属区域。
///
/// 同时接受原系统的越南语标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(alias = "Miền Bắc", alias = "NORTH")]
    North,
    #[serde(alias = "Miền Trung", alias = "CENTRAL")]
    Central,
    #[serde(alias = "Miền Nam", alias = "SOUTH")]
    South,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::Central => "Central",
            Region::South => "South",
        }
    }
}

/// 站点运行状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SiteStatus {
    Active,
    Planned,
    Offline,
    Maintenance,
}

/// 地理坐标。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub lng: f64,
}

/// 站点记录。
///
/// `id` 赋值后不可变；`code` 在登记表内唯一（由 registry 保证）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// 缺省为空串，由边界处补齐或校验。
    #[serde(default)]
    pub id: String,
    pub code: String,
    pub name: String,
    pub region: Region,
    pub status: SiteStatus,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub province: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub build_year: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub building_type: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub category: String,
    /// 额定功率（kW）。
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub power: f64,
    /// 机柜数量。
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub racks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_manager: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub coordinates: Coordinates,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub design_data: DesignData,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub inventory: InventoryLedger,
}

impl Site {
    /// 构造最小站点记录，其余字段取默认值。
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        region: Region,
        status: SiteStatus,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            region,
            status,
            province: String::new(),
            build_year: String::new(),
            building_type: String::new(),
            category: String::new(),
            power: 0.0,
            racks: 0,
            manager: None,
            branch_manager: None,
            coordinates: Coordinates::default(),
            design_data: DesignData::default(),
            inventory: InventoryLedger::default(),
        }
    }
}
