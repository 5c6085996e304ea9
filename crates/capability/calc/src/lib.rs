//! 派生字段计算。
//!
//! 纯函数，无副作用，对相同输入结果确定：
//! - 功率负载表：电流 I = P / U（保留两位小数），站点总负载 Σ 数量 × 功率
//! - 蓄电池选型：见 [`battery`]
//! - 预算表：行金额 = 数量 × 单价，总金额 = Σ 行金额
//!
//! 调用方在需要最新视图时显式调用 [`recompute`]，核心不会自动触发。

pub mod battery;

pub use battery::{
    BatterySizing, StringRounding, UnknownRounding, recommended_strings, size_battery,
};

use domain::{CostLineItem, DesignData, PowerLoadItem};

/// 保留两位小数，恰好落在中点时取偶数（银行家舍入）。
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// 电流（A）= 功率 / 电压，两位小数；电压 ≤ 0 时为 0。
pub fn line_current(power_rated_w: f64, voltage: f64) -> f64 {
    if !voltage.is_finite() || voltage <= 0.0 || !power_rated_w.is_finite() {
        return 0.0;
    }
    finite_or_zero(round2(power_rated_w / voltage))
}

/// 单行负载（W）= 数量 × 额定功率；非法或负功率贡献 0。
pub fn line_load(item: &PowerLoadItem) -> f64 {
    if !item.power_rated_w.is_finite() || item.power_rated_w < 0.0 {
        return 0.0;
    }
    finite_or_zero(f64::from(item.quantity) * item.power_rated_w)
}

/// 站点总负载（W）。
pub fn total_load(items: &[PowerLoadItem]) -> f64 {
    items.iter().map(line_load).sum()
}

/// 预算行金额 = 数量 × 单价。
pub fn line_total(item: &CostLineItem) -> f64 {
    finite_or_zero(f64::from(item.quantity) * item.unit_price)
}

/// 预算总金额。
pub fn grand_total(items: &[CostLineItem]) -> f64 {
    items.iter().map(line_total).sum()
}

/// 带电流的功率负载行。
#[derive(Debug, Clone, PartialEq)]
pub struct PowerLoadRow {
    pub item: PowerLoadItem,
    pub current: f64,
}

/// 带行金额的预算行。
#[derive(Debug, Clone, PartialEq)]
pub struct CostRow {
    pub item: CostLineItem,
    pub total_amount: f64,
}

/// 设计数据的派生视图。
#[derive(Debug, Clone, PartialEq)]
pub struct DesignView {
    pub power_rows: Vec<PowerLoadRow>,
    pub total_load_w: f64,
    pub cost_rows: Vec<CostRow>,
    pub grand_total: f64,
    pub battery: BatterySizing,
}

/// 为功率负载表逐行计算电流。
pub fn power_rows(items: &[PowerLoadItem]) -> Vec<PowerLoadRow> {
    items
        .iter()
        .map(|item| PowerLoadRow {
            current: line_current(item.power_rated_w, item.voltage),
            item: item.clone(),
        })
        .collect()
}

/// 为预算表逐行计算金额。
pub fn cost_rows(items: &[CostLineItem]) -> Vec<CostRow> {
    items
        .iter()
        .map(|item| CostRow {
            total_amount: line_total(item),
            item: item.clone(),
        })
        .collect()
}

/// 重新计算全部派生字段。
pub fn recompute(design: &DesignData, rounding: StringRounding) -> DesignView {
    let view = DesignView {
        power_rows: power_rows(&design.calc_items),
        total_load_w: total_load(&design.calc_items),
        cost_rows: cost_rows(&design.cost_estimate_items),
        grand_total: grand_total(&design.cost_estimate_items),
        battery: size_battery(&design.battery_params, rounding),
    };
    tracing::debug!(
        power_rows = view.power_rows.len(),
        cost_rows = view.cost_rows.len(),
        total_load_w = view.total_load_w,
        grand_total = view.grand_total,
        "design view recomputed"
    );
    view
}
