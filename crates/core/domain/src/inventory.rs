//! 物资台账。

use crate::lenient;
use serde::{Deserialize, Serialize};

/// 物资类型：在网 / 离网（库存）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InventoryType {
    Online,
    #[default]
    Offline,
}

/// 物资状态。未识别的状态统一归为 `Other`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InventoryStatus {
    #[default]
    Planned,
    Active,
    #[serde(other)]
    Other,
}

/// 调拨状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferState {
    pub is_transferred: bool,
}

/// 物资条目。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItem {
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub item_code: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub item_name: String,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub quantity: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub unit: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_f64"
    )]
    pub rated_power: Option<f64>,
    #[serde(rename = "type")]
    pub kind: InventoryType,
    pub status: InventoryStatus,
    /// 安装位置（原始字段名 location1）。
    #[serde(rename = "location1", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub note: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub transfer: TransferState,
}

impl InventoryItem {
    /// 是否与给定物资编码、名称相同（用于可选去重）。
    pub fn matches(&self, item_code: &str, item_name: &str) -> bool {
        self.item_code.trim() == item_code.trim() && self.item_name.trim() == item_name.trim()
    }
}

/// 单站物资台账：有序、只追加，允许重复编码。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryLedger {
    items: Vec<InventoryItem>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条物资。
    pub fn append(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InventoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 台账中是否已有相同编码与名称的物资。
    pub fn contains(&self, item_code: &str, item_name: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.matches(item_code, item_name))
    }
}

impl From<Vec<InventoryItem>> for InventoryLedger {
    fn from(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }
}
