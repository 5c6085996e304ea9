//! 输入验证辅助函数
//!
//! - normalize_required：验证必填字段，去除空格并检查非空
//! - parse_region：解析区域查询参数（支持越南语标签）
//!
//! 失败返回 bad_request_error 响应。

use crate::utils::response::bad_request_error;
use axum::response::Response;
use domain::Region;

/// 验证必填字段，去除空格并检查非空
pub fn normalize_required(value: String, field: &str) -> Result<String, Response> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(bad_request_error(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

/// 解析可选区域参数；空串视为不过滤
pub fn parse_region(value: Option<String>) -> Result<Option<Region>, Response> {
    let value = match value {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => return Ok(None),
    };
    serde_json::from_value::<Region>(serde_json::Value::String(value.clone()))
        .map(Some)
        .map_err(|_| bad_request_error(format!("unknown region: {value}")))
}
