//! 宽松反序列化辅助函数。
//!
//! 表格编辑器提交的数据没有固定 schema：数值可能是字符串、null 或缺失。
//! 这里统一在边界处归一化：
//! - 数字 / 数字字符串 → 数值
//! - null / 非数字 → 0
//! - null 集合或子结构 → 默认空值

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 从 JSON 值中读取有限浮点数。
fn finite_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|number| number.is_finite())
}

/// 数值字段：非法输入视为 0。
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(finite_number(&value).unwrap_or(0.0))
}

/// 整数数量字段：负数、非数字视为 0，小数截断。
pub fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = finite_number(&value).unwrap_or(0.0);
    if number <= 0.0 {
        return Ok(0);
    }
    Ok(number.trunc().min(u32::MAX as f64) as u32)
}

/// 可选数值字段：缺失或非法时为 None。
pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(finite_number(&value))
}

/// 文本字段：数字转为字符串，null 转为空串。
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    };
    Ok(text)
}

/// 子结构或集合：null 视为默认值。
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
