//! DeepL 翻译提供方
//!
//! 通过 DeepL v2 HTTP API 翻译文本。凭证从 `DEEPL_API_KEY`
//! 环境变量读取，端点地址可通过配置覆盖（便于指向代理或
//! 自建兼容服务）

use serde::Deserialize;

use super::TranslationProvider;
use crate::env::{provider as provider_env, EnvVar};
use crate::translation::config::TranslationConfig;
use crate::translation::error::{TranslationError, TranslationResult};

/// DeepL API 客户端
pub struct DeepLProvider {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

/// DeepL 翻译响应
#[derive(Debug, Deserialize)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    #[serde(default)]
    #[allow(dead_code)]
    detected_source_language: Option<String>,
    text: String,
}

impl DeepLProvider {
    /// 使用显式凭证创建提供方
    pub fn new(api_key: impl Into<String>, config: &TranslationConfig) -> TranslationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_url: config.api_url.clone(),
        })
    }

    /// 从环境变量读取凭证创建提供方
    ///
    /// `DEEPL_API_KEY` 缺失或为空会在这里立刻报配置错误，
    /// 而凭证无效只会在实际调用时以提供方错误的形式出现，
    /// 由客户端的重试/回退策略统一处理
    pub fn from_env(config: &TranslationConfig) -> TranslationResult<Self> {
        let api_key = provider_env::ApiKey::get()?;
        Self::new(api_key, config)
    }
}

impl TranslationProvider for DeepLProvider {
    async fn translate(&self, text: &str, target_lang: &str) -> TranslationResult<String> {
        let body = serde_json::json!({
            "text": [text],
            "target_lang": target_lang.to_uppercase(),
        });

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimitExceeded);
        }

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TranslationError::TranslationServiceError(format!(
                "HTTP {}: {}",
                status,
                detail.trim()
            )));
        }

        let parsed: DeepLResponse = response.json().await?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| {
                TranslationError::TranslationServiceError("响应中缺少翻译结果".to_string())
            })
    }
}
