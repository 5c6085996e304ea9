//! 设计数据聚合。
//!
//! 包含机柜布置、功率负载表、预算表以及机房/蓄电池/整流参数。
//! 所有数值缺省为 0，所有集合缺省为空，允许只填写一部分。

use crate::lenient;
use serde::{Deserialize, Serialize};

/// 站点设计数据（归属单个 Site）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignData {
    #[serde(deserialize_with = "lenient::or_default")]
    pub racks: Vec<Rack>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub equipments: Vec<Equipment>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub calc_items: Vec<PowerLoadItem>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub cost_estimate_items: Vec<CostLineItem>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub room_params: RoomParams,
    #[serde(deserialize_with = "lenient::or_default")]
    pub battery_params: BatteryParams,
    #[serde(deserialize_with = "lenient::or_default")]
    pub rect_params: RectifierParams,
}

impl DesignData {
    /// 指定机柜内的设备（按 rackId 弱引用匹配）。
    pub fn equipments_in_rack<'a>(
        &'a self,
        rack_id: &'a str,
    ) -> impl Iterator<Item = &'a Equipment> + 'a {
        self.equipments
            .iter()
            .filter(move |equipment| equipment.rack_id == rack_id)
    }

    /// 预算表中是否已有同名条目（去除首尾空格后精确匹配）。
    pub fn has_cost_item_named(&self, name: &str) -> bool {
        let name = name.trim();
        self.cost_estimate_items
            .iter()
            .any(|item| item.item_name.trim() == name)
    }
}

/// 机柜描述。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rack {
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    /// 总 U 数。
    #[serde(rename = "totalU", deserialize_with = "lenient::u32_or_zero")]
    pub total_u: u32,
}

/// 机柜内设备。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Equipment {
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub id: String,
    /// 所在机柜 id；机柜删除后可能悬空，不做校验。
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub rack_id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub model: String,
    #[serde(rename = "type")]
    pub class: EquipmentClass,
    #[serde(rename = "powerW", deserialize_with = "lenient::f64_or_zero")]
    pub power_w: f64,
    #[serde(rename = "startU", deserialize_with = "lenient::u32_or_zero")]
    pub start_u: u32,
    #[serde(rename = "uHeight", deserialize_with = "lenient::u32_or_zero")]
    pub u_height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// 设备供电类别。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EquipmentClass {
    #[default]
    Dc,
    Ac,
    Passive,
}

/// 功率负载表的一行。
///
/// 电流 `current` 是派生字段，不在此存储；输入中的 current 会被忽略。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerLoadItem {
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub model: String,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub quantity: u32,
    /// 额定功率（W）。
    #[serde(rename = "powerRatedW", deserialize_with = "lenient::f64_or_zero")]
    pub power_rated_w: f64,
    /// 电压（V）。
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub voltage: f64,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub wire_section: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub wire_type: String,
    #[serde(rename = "type")]
    pub class: EquipmentClass,
    #[serde(deserialize_with = "lenient::or_default")]
    pub note: String,
}

impl PowerLoadItem {
    pub fn new(name: impl Into<String>, quantity: u32, power_rated_w: f64, voltage: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            power_rated_w,
            voltage,
            ..Self::default()
        }
    }
}

/// 预算条目分类：主材 / 辅材。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CostCategory {
    Main,
    #[default]
    Aux,
}

/// 物资状况：新品 / 利旧。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCondition {
    #[default]
    #[serde(alias = "Mới")]
    New,
    #[serde(alias = "Sử dụng lại")]
    Reused,
}

/// 预算表的一行。
///
/// 行金额 = quantity × unitPrice，属于派生字段，不在此存储。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostLineItem {
    pub category: CostCategory,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub item_code: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub item_name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub unit: String,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub quantity: u32,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub unit_price: f64,
    pub condition: ItemCondition,
    #[serde(deserialize_with = "lenient::or_default")]
    pub note: String,
}

impl CostLineItem {
    pub fn new(item_name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
            unit_price,
            ..Self::default()
        }
    }
}

/// 机房环境参数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomParams {
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub width: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub length: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub height: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub temp_inside: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub temp_outside: f64,
    #[serde(rename = "equipmentHeatW", deserialize_with = "lenient::f64_or_zero")]
    pub equipment_heat_w: f64,
}

/// 蓄电池选型输入。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatteryParams {
    /// 直流负载（W）。
    #[serde(rename = "dcLoadW", deserialize_with = "lenient::f64_or_zero")]
    pub dc_load_w: f64,
    /// 目标后备时间（h）。
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub target_backup_time: f64,
    /// 系统电压（V）。
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub battery_voltage: f64,
    /// 单组容量（Ah）。
    #[serde(rename = "batteryAh", deserialize_with = "lenient::f64_or_zero")]
    pub battery_ah: f64,
    /// 放电效率，取值 (0, 1]。
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub efficiency: f64,
}

/// 整流器选型参数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RectifierParams {
    #[serde(rename = "dcLoadW", deserialize_with = "lenient::f64_or_zero")]
    pub dc_load_w: f64,
    #[serde(rename = "batteryAh", deserialize_with = "lenient::f64_or_zero")]
    pub battery_ah: f64,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub rectifier_module_size: f64,
}
