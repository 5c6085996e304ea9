//! 应用运行配置加载。

use pmb_calc::StringRounding;
use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// LLM 对话配置；未配置密钥时对话功能关闭。
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout_seconds: u64,
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub chat: Option<ChatConfig>,
    pub battery_rounding: StringRounding,
    pub inventory_sync_dedupe: bool,
    pub seed_demo: bool,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("PMB_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let api_key = read_optional("PMB_GEMINI_API_KEY").or_else(|| read_optional("API_KEY"));
        let model =
            env::var("PMB_GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());
        let endpoint = env::var("PMB_GEMINI_ENDPOINT").unwrap_or_else(|_| {
            "https://generativelanguage.googleapis.com/v1beta".to_string()
        });
        let timeout_seconds = read_u64_with_default("PMB_CHAT_TIMEOUT_SECONDS", 30)?;
        let battery_rounding = read_rounding("PMB_BATTERY_ROUNDING")?;
        let inventory_sync_dedupe = read_bool_with_default("PMB_INVENTORY_SYNC_DEDUPE", false)?;
        let seed_demo = read_bool_with_default("PMB_SEED_DEMO", true)?;

        let chat = api_key.map(|api_key| ChatConfig {
            api_key,
            model,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout_seconds,
        });

        Ok(Self {
            http_addr,
            chat,
            battery_rounding,
            inventory_sync_dedupe,
            seed_demo,
        })
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_rounding(key: &str) -> Result<StringRounding, ConfigError> {
    match read_optional(key) {
        Some(value) => value
            .parse::<StringRounding>()
            .map_err(|_| ConfigError::Invalid(key.to_string(), value)),
        None => Ok(StringRounding::default()),
    }
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn read_bool_with_default(key: &str, default: bool) -> Result<bool, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}
