//! 对话上下文构造。

use crate::error::AssistantError;
use domain::Site;

const CONTEXT_PREFIX: &str = "Bạn là trợ lý PMB. Dữ liệu các trạm hiện tại:";
const CONTEXT_SUFFIX: &str = "Hãy trả lời ngắn gọn.";

/// 把整个站点登记表序列化进系统提示。
///
/// 只读：不会修改任何站点。
pub fn build_context(sites: &[Site]) -> Result<String, AssistantError> {
    let json = serde_json::to_string(sites)?;
    Ok(format!("{CONTEXT_PREFIX} {json}. {CONTEXT_SUFFIX}"))
}
