//! 跨表同步。
//!
//! 单向投影，必须由调用方显式触发：
//! - 功率负载表 → 预算表：按名称去重
//! - 预算表 → 物资台账：默认不去重，每次同步都会追加
//!
//! 逐行生效，不做事务回滚；格式不合法的行跳过并计数。

use domain::{
    CostCategory, CostLineItem, DesignData, InventoryItem, InventoryLedger, InventoryStatus,
    InventoryType, ItemCondition, TransferState,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// 同步生成的预算条目默认单位。
pub const DEFAULT_UNIT: &str = "Cái";
/// 功率表同步到预算表时的备注。
pub const POWER_SYNC_NOTE: &str = "Đồng bộ từ bảng CS";
/// 预算表同步到物资台账时的备注前缀。
pub const COST_SYNC_NOTE_PREFIX: &str = "Đồng bộ từ Dự toán.";

/// 同步结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// 新建条目数。
    pub created: usize,
    /// 跳过的非法行数。
    pub skipped: usize,
}

/// 预算表 → 物资台账的同步模式。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InventorySyncMode {
    /// 始终追加，重复同步会产生重复物资。
    #[default]
    Append,
    /// 台账中已有相同编码与名称时跳过。
    SkipExisting,
}

impl InventorySyncMode {
    pub fn from_dedupe(dedupe: bool) -> Self {
        if dedupe {
            Self::SkipExisting
        } else {
            Self::Append
        }
    }
}

/// 物资 id 生成器：`sync_<unix 毫秒>_<序号>_<名称或编码>`，进程内唯一。
#[derive(Debug, Default)]
pub struct InventoryIdGenerator {
    sequence: AtomicU64,
}

impl InventoryIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self, label: &str) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let ts_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        format!("sync_{ts_ms}_{seq}_{}", label.trim())
    }
}

/// 功率负载表 → 预算表。
///
/// 每个功率行生成一条 MAIN 预算条目（单价 0，待填写，数量 0 按 1 计），
/// 预算表中已有同名条目时跳过；名称为空的行视为非法。
pub fn sync_power_to_cost(design: &mut DesignData) -> SyncReport {
    let mut report = SyncReport::default();
    let sources = design.calc_items.clone();
    for (index, item) in sources.iter().enumerate() {
        let name = item.name.trim();
        if name.is_empty() {
            warn!(row = index, "power row without name skipped");
            report.skipped += 1;
            continue;
        }
        if design.has_cost_item_named(name) {
            continue;
        }
        design.cost_estimate_items.push(CostLineItem {
            category: CostCategory::Main,
            item_code: String::new(),
            item_name: name.to_string(),
            unit: DEFAULT_UNIT.to_string(),
            // 预算数量至少为 1
            quantity: item.quantity.max(1),
            unit_price: 0.0,
            condition: ItemCondition::New,
            note: POWER_SYNC_NOTE.to_string(),
        });
        report.created += 1;
    }
    info!(
        created = report.created,
        skipped = report.skipped,
        "power rows synced to cost estimate"
    );
    report
}

/// 预算表 → 物资台账。
///
/// 预算表每一行生成一条 OFFLINE / PLANNED 物资；`Append` 模式下不与
/// 台账去重。名称与编码都为空的行视为非法。
pub fn sync_cost_to_inventory(
    design: &DesignData,
    ledger: &mut InventoryLedger,
    mode: InventorySyncMode,
    ids: &InventoryIdGenerator,
) -> SyncReport {
    let mut report = SyncReport::default();
    for (index, item) in design.cost_estimate_items.iter().enumerate() {
        let name = item.item_name.trim();
        let code = item.item_code.trim();
        if name.is_empty() && code.is_empty() {
            warn!(row = index, "cost row without name or code skipped");
            report.skipped += 1;
            continue;
        }
        if mode == InventorySyncMode::SkipExisting && ledger.contains(code, name) {
            continue;
        }
        let label = if name.is_empty() { code } else { name };
        ledger.append(InventoryItem {
            id: ids.next_id(label),
            item_code: code.to_string(),
            item_name: name.to_string(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            rated_power: None,
            kind: InventoryType::Offline,
            status: InventoryStatus::Planned,
            location: None,
            note: format!("{COST_SYNC_NOTE_PREFIX} {}", item.note.trim())
                .trim_end()
                .to_string(),
            transfer: TransferState::default(),
        });
        report.created += 1;
    }
    info!(
        created = report.created,
        skipped = report.skipped,
        ?mode,
        "cost rows synced to inventory"
    );
    report
}
