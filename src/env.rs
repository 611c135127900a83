//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问，翻译核心的全部进程级配置
//! （API凭证、调优参数）都经由这里读取

use std::env;
use std::fmt;
use std::time::Duration;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment variable '{}': {}",
            self.variable, self.message
        )
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

fn parse_usize(name: &str, value: &str) -> EnvResult<usize> {
    value.trim().parse::<usize>().map_err(|_| EnvError {
        variable: name.to_string(),
        message: format!("Invalid number '{}'", value),
    })
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "DOLMETSCHER_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// 翻译提供方相关环境变量
pub mod provider {
    use super::*;

    /// DeepL API 凭证（必需，无默认值）
    pub struct ApiKey;
    impl EnvVar<String> for ApiKey {
        const NAME: &'static str = "DEEPL_API_KEY";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "DeepL API authentication key (required)";

        fn parse(value: &str) -> EnvResult<String> {
            if value.trim().is_empty() {
                Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "API key must not be empty".to_string(),
                })
            } else {
                Ok(value.trim().to_string())
            }
        }
    }

    /// 翻译API地址
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "DOLMETSCHER_API_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Translation provider endpoint URL";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(crate::translation::config::constants::DEFAULT_API_URL.to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            if value.starts_with("http://") || value.starts_with("https://") {
                Ok(value.to_string())
            } else {
                Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Invalid URL '{}'. Must start with http:// or https://", value),
                })
            }
        }
    }

    /// 单次提供方请求的超时时间（秒）
    ///
    /// 未设置时不参与配置覆盖，默认值见 `config::constants`
    pub struct RequestTimeout;
    impl EnvVar<Duration> for RequestTimeout {
        const NAME: &'static str = "DOLMETSCHER_REQUEST_TIMEOUT_SECS";
        const DEFAULT: Option<Duration> = None;
        const DESCRIPTION: &'static str = "Per-request timeout for provider calls, in seconds";

        fn parse(value: &str) -> EnvResult<Duration> {
            parse_usize(Self::NAME, value).map(|secs| Duration::from_secs(secs as u64))
        }
    }
}

/// 翻译管道相关环境变量
pub mod translation {
    use super::*;

    /// 每个分块的最大词数
    ///
    /// 这些覆盖项未设置时返回错误而不是默认值，配置管理器据此
    /// 区分"用户设置了环境变量"和"沿用配置文件/默认值"
    pub struct TokensPerChunk;
    impl EnvVar<usize> for TokensPerChunk {
        const NAME: &'static str = "DOLMETSCHER_TOKENS_PER_CHUNK";
        const DEFAULT: Option<usize> = None;
        const DESCRIPTION: &'static str = "Maximum number of words per translation chunk";

        fn parse(value: &str) -> EnvResult<usize> {
            match parse_usize(Self::NAME, value)? {
                0 => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Chunk size must be at least 1".to_string(),
                }),
                n => Ok(n),
            }
        }
    }

    /// 单个分块的最大重试次数（含首次尝试）
    pub struct MaxRetryAttempts;
    impl EnvVar<usize> for MaxRetryAttempts {
        const NAME: &'static str = "DOLMETSCHER_MAX_RETRY_ATTEMPTS";
        const DEFAULT: Option<usize> = None;
        const DESCRIPTION: &'static str = "Total provider attempts per chunk, including the first";

        fn parse(value: &str) -> EnvResult<usize> {
            match parse_usize(Self::NAME, value)? {
                0 => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "At least one attempt is required".to_string(),
                }),
                n => Ok(n),
            }
        }
    }

    /// 重试之间的固定等待时间（毫秒）
    pub struct RetryDelayMs;
    impl EnvVar<Duration> for RetryDelayMs {
        const NAME: &'static str = "DOLMETSCHER_RETRY_DELAY_MS";
        const DEFAULT: Option<Duration> = None;
        const DESCRIPTION: &'static str = "Fixed delay between retry attempts, in milliseconds";

        fn parse(value: &str) -> EnvResult<Duration> {
            parse_usize(Self::NAME, value).map(|ms| Duration::from_millis(ms as u64))
        }
    }

    /// 最大并发请求数
    pub struct MaxConcurrentRequests;
    impl EnvVar<usize> for MaxConcurrentRequests {
        const NAME: &'static str = "DOLMETSCHER_MAX_CONCURRENT_REQUESTS";
        const DEFAULT: Option<usize> = None;
        const DESCRIPTION: &'static str = "Upper bound on concurrent provider calls per batch";

        fn parse(value: &str) -> EnvResult<usize> {
            match parse_usize(Self::NAME, value)? {
                0 => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Concurrency must be at least 1".to_string(),
                }),
                n => Ok(n),
            }
        }
    }
}
