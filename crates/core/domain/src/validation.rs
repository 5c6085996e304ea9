//! 边界校验。
//!
//! 数据进入核心前在此校验；计算层本身对非法值做保护（返回 0），
//! 这里负责拒绝明显不合理的编辑输入。

use crate::design::{BatteryParams, CostLineItem, PowerLoadItem};
use crate::site::Site;

/// 领域校验错误。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl DomainError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// 校验站点记录：id / code / name 非空，数值非负。
pub fn validate_site(site: &Site) -> Result<(), DomainError> {
    if site.id.trim().is_empty() {
        return Err(DomainError::Missing("id"));
    }
    if site.code.trim().is_empty() {
        return Err(DomainError::Missing("code"));
    }
    if site.name.trim().is_empty() {
        return Err(DomainError::Missing("name"));
    }
    if site.power < 0.0 {
        return Err(DomainError::invalid("power", "must be >= 0"));
    }
    validate_power_items(&site.design_data.calc_items)?;
    validate_cost_items(&site.design_data.cost_estimate_items)?;
    Ok(())
}

/// 校验功率负载表：功率、电压非负。
pub fn validate_power_items(items: &[PowerLoadItem]) -> Result<(), DomainError> {
    for (index, item) in items.iter().enumerate() {
        if item.power_rated_w < 0.0 {
            return Err(DomainError::invalid(
                format!("calcItems[{index}].powerRatedW"),
                "must be >= 0",
            ));
        }
        if item.voltage < 0.0 {
            return Err(DomainError::invalid(
                format!("calcItems[{index}].voltage"),
                "must be >= 0",
            ));
        }
    }
    Ok(())
}

/// 校验预算表：数量 >= 1，单价非负。
pub fn validate_cost_items(items: &[CostLineItem]) -> Result<(), DomainError> {
    for (index, item) in items.iter().enumerate() {
        if item.quantity < 1 {
            return Err(DomainError::invalid(
                format!("costEstimateItems[{index}].quantity"),
                "must be >= 1",
            ));
        }
        if item.unit_price < 0.0 {
            return Err(DomainError::invalid(
                format!("costEstimateItems[{index}].unitPrice"),
                "must be >= 0",
            ));
        }
    }
    Ok(())
}

/// 校验蓄电池参数：效率在 (0, 1]，其余非负。
pub fn validate_battery_params(params: &BatteryParams) -> Result<(), DomainError> {
    if !(params.efficiency > 0.0 && params.efficiency <= 1.0) {
        return Err(DomainError::invalid("efficiency", "must be in (0, 1]"));
    }
    let fields = [
        ("dcLoadW", params.dc_load_w),
        ("targetBackupTime", params.target_backup_time),
        ("batteryVoltage", params.battery_voltage),
        ("batteryAh", params.battery_ah),
    ];
    for (field, value) in fields {
        if value < 0.0 {
            return Err(DomainError::invalid(field, "must be >= 0"));
        }
    }
    Ok(())
}
