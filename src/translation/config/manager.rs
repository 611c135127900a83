//! 简化的配置管理器
//!
//! 提供统一的配置接口，支持文件配置、环境变量和默认值

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constants;
use crate::translation::error::{TranslationError, TranslationResult};

/// 翻译管道配置
///
/// 覆盖分块、重试、并发三类可调参数以及提供方地址。
/// 目标语言不在配置内——它随每次调用传入
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// 每个分块的最大词数
    pub tokens_per_chunk: usize,

    /// 单个分块的总尝试次数（含首次）
    pub max_retry_attempts: usize,

    /// 重试之间的固定等待时间（毫秒）
    pub retry_delay_ms: u64,

    /// 单次批量派发中的最大并发请求数
    pub max_concurrent_requests: usize,

    /// 单次提供方请求的超时时间（秒）
    pub request_timeout_secs: u64,

    /// 翻译提供方地址
    pub api_url: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            tokens_per_chunk: constants::DEFAULT_TOKENS_PER_CHUNK,
            max_retry_attempts: constants::DEFAULT_MAX_RETRY_ATTEMPTS,
            retry_delay_ms: constants::DEFAULT_RETRY_DELAY.as_millis() as u64,
            max_concurrent_requests: constants::DEFAULT_MAX_CONCURRENT_REQUESTS,
            request_timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT.as_secs(),
            api_url: constants::DEFAULT_API_URL.to_string(),
        }
    }
}

impl TranslationConfig {
    /// 重试间隔
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// 请求超时
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        if self.tokens_per_chunk == 0 {
            return Err(TranslationError::ConfigError(
                "分块大小不能为0".to_string(),
            ));
        }

        if self.max_retry_attempts == 0 {
            return Err(TranslationError::ConfigError(
                "至少需要一次尝试".to_string(),
            ));
        }

        if self.max_concurrent_requests == 0 {
            return Err(TranslationError::ConfigError(
                "最大并发数不能为0".to_string(),
            ));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(TranslationError::ConfigError(format!(
                "无效的API地址: {}",
                self.api_url
            )));
        }

        Ok(())
    }

    /// 应用环境变量覆盖（使用类型安全环境变量系统）
    pub fn apply_env_overrides(&mut self) {
        use crate::env::{provider, translation, EnvVar};

        if let Ok(tokens) = translation::TokensPerChunk::get() {
            self.tokens_per_chunk = tokens;
        }

        if let Ok(attempts) = translation::MaxRetryAttempts::get() {
            self.max_retry_attempts = attempts;
        }

        if let Ok(delay) = translation::RetryDelayMs::get() {
            self.retry_delay_ms = delay.as_millis() as u64;
        }

        if let Ok(max_concurrent) = translation::MaxConcurrentRequests::get() {
            self.max_concurrent_requests = max_concurrent;
        }

        if let Ok(timeout) = provider::RequestTimeout::get() {
            self.request_timeout_secs = timeout.as_secs();
        }

        if let Ok(api_url) = std::env::var("DOLMETSCHER_API_URL") {
            if let Ok(url) = <provider::ApiUrl as EnvVar<String>>::parse(&api_url) {
                self.api_url = url;
                tracing::info!("环境变量覆盖 API URL: {}", self.api_url);
            }
        }
    }
}

/// 配置管理器
///
/// 加载顺序：配置文件（若找到）、环境变量覆盖、最终校验
pub struct ConfigManager {
    config: TranslationConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 创建配置管理器，沿标准路径发现并加载配置
    pub fn new() -> TranslationResult<Self> {
        let (mut config, source) = match Self::find_config_file() {
            Some(path) => (Self::load_from_path(&path)?, Some(path)),
            None => (TranslationConfig::default(), None),
        };

        config.apply_env_overrides();
        config.validate()?;

        if let Some(ref path) = source {
            tracing::debug!("已加载配置文件: {}", path.display());
        }

        Ok(Self { config, source })
    }

    /// 从指定文件加载配置
    pub fn load_from_path(path: &Path) -> TranslationResult<TranslationConfig> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TranslationError::ConfigError(format!("读取配置文件 {} 失败: {}", path.display(), e))
        })?;
        let config: TranslationConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// 沿 CONFIG_PATHS 查找第一个存在的配置文件
    fn find_config_file() -> Option<PathBuf> {
        constants::CONFIG_PATHS
            .iter()
            .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()))
            .find(|path| path.exists())
    }

    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    pub fn into_config(self) -> TranslationConfig {
        self.config
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
