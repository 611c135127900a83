//! 翻译配置管理模块
//!
//! 提供简化的配置管理，支持环境变量、配置文件和默认值

pub mod manager;

use std::sync::OnceLock;

use regex::Regex;

use crate::translation::error::{TranslationError, TranslationResult};

// 重新导出主要类型
pub use manager::{ConfigManager, TranslationConfig};

/// 配置常量
pub mod constants {
    use std::time::Duration;

    // 分块相关
    pub const DEFAULT_TOKENS_PER_CHUNK: usize = 200;

    // 重试策略
    pub const DEFAULT_MAX_RETRY_ATTEMPTS: usize = 3;
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(2000);

    // 并发与网络
    pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 10;
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    // 默认API设置
    pub const DEFAULT_API_URL: &str = "https://api-free.deepl.com/v2/translate";

    // 跳过的元素：子树内的文本不属于人类可读内容
    pub const SKIP_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

    // 目标语言代码格式，如 "DE"、"EN-US"
    pub const LANGUAGE_CODE_PATTERN: &str = r"^[A-Za-z]{2}(-[A-Za-z]{2})?$";

    // 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &[
        "dolmetscher.toml",
        ".dolmetscher.toml",
        "~/.config/dolmetscher/config.toml",
    ];
}

/// 校验目标语言代码格式
///
/// 接受 BCP-47 风格的两段式代码（如 `de`、`EN-US`），大小写不敏感；
/// 提供方调用前会统一转为大写
pub fn validate_language_code(code: &str) -> TranslationResult<()> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(constants::LANGUAGE_CODE_PATTERN).expect("language code pattern is valid")
    });

    if pattern.is_match(code) {
        Ok(())
    } else {
        Err(TranslationError::InvalidInput(format!(
            "无效的目标语言代码: '{}'",
            code
        )))
    }
}

/// 检查翻译配置文件是否存在
pub fn config_file_exists() -> bool {
    constants::CONFIG_PATHS
        .iter()
        .any(|path| std::path::Path::new(shellexpand::tilde(path).as_ref()).exists())
}

/// 向后兼容的配置加载函数
///
/// 配置加载失败时退回默认配置而不是报错，便于在缺少配置文件的
/// 环境中直接使用
pub fn load_translation_config(api_url: Option<&str>) -> TranslationConfig {
    match ConfigManager::new() {
        Ok(manager) => {
            let mut config = manager.into_config();
            if let Some(url) = api_url {
                config.api_url = url.to_string();
            }
            config
        }
        Err(e) => {
            tracing::warn!("配置加载失败，使用默认配置: {}", e);
            let mut config = TranslationConfig::default();
            if let Some(url) = api_url {
                config.api_url = url.to_string();
            }
            config
        }
    }
}
