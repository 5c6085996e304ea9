use pmb_calc::StringRounding;
use pmb_config::{AppConfig, ConfigError};

// 环境变量是进程级状态，所有场景放在同一个测试里顺序执行。
#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::remove_var("PMB_GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
        std::env::remove_var("PMB_BATTERY_ROUNDING");
        std::env::set_var("PMB_HTTP_ADDR", "127.0.0.1:8081");
    }

    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8081");
    assert!(config.chat.is_none());
    assert_eq!(config.battery_rounding, StringRounding::Ceiling);
    assert!(!config.inventory_sync_dedupe);
    assert!(config.seed_demo);

    unsafe {
        std::env::set_var("API_KEY", "fallback-key");
        std::env::set_var("PMB_GEMINI_ENDPOINT", "http://localhost:9000/v1beta/");
        std::env::set_var("PMB_CHAT_TIMEOUT_SECONDS", "5");
        std::env::set_var("PMB_BATTERY_ROUNDING", "floor-plus-one");
        std::env::set_var("PMB_INVENTORY_SYNC_DEDUPE", "true");
        std::env::set_var("PMB_SEED_DEMO", "0");
    }

    let config = AppConfig::from_env().expect("config");
    let chat = config.chat.expect("chat enabled");
    assert_eq!(chat.api_key, "fallback-key");
    assert_eq!(chat.model, "gemini-1.5-flash");
    assert_eq!(chat.endpoint, "http://localhost:9000/v1beta");
    assert_eq!(chat.timeout_seconds, 5);
    assert_eq!(config.battery_rounding, StringRounding::FloorPlusOne);
    assert!(config.inventory_sync_dedupe);
    assert!(!config.seed_demo);

    unsafe {
        std::env::set_var("PMB_GEMINI_API_KEY", "primary-key");
    }
    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.chat.expect("chat enabled").api_key, "primary-key");

    unsafe {
        std::env::set_var("PMB_BATTERY_ROUNDING", "banker");
    }
    let err = AppConfig::from_env().expect_err("invalid rounding");
    assert!(matches!(err, ConfigError::Invalid(key, _) if key == "PMB_BATTERY_ROUNDING"));

    unsafe {
        std::env::remove_var("PMB_BATTERY_ROUNDING");
        std::env::set_var("PMB_CHAT_TIMEOUT_SECONDS", "soon");
    }
    let err = AppConfig::from_env().expect_err("invalid timeout");
    assert!(matches!(err, ConfigError::Invalid(key, _) if key == "PMB_CHAT_TIMEOUT_SECONDS"));

    unsafe {
        std::env::set_var("PMB_CHAT_TIMEOUT_SECONDS", "5");
        std::env::set_var("PMB_INVENTORY_SYNC_DEDUPE", "yes");
    }
    let err = AppConfig::from_env().expect_err("invalid dedupe flag");
    assert!(
        matches!(err, ConfigError::Invalid(key, value) if key == "PMB_INVENTORY_SYNC_DEDUPE" && value == "yes")
    );

    unsafe {
        std::env::set_var("PMB_INVENTORY_SYNC_DEDUPE", " Off ");
    }
    let config = AppConfig::from_env().expect("config");
    assert!(!config.inventory_sync_dedupe);
}
