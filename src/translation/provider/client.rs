//! 翻译客户端
//!
//! 在提供方之上套一层重试与回退策略，向上层保证"永不失败"：
//! 不可恢复的错误降级为返回原文，而不是向调用方传播。
//! 大文档中单个分块的失败因此不会中断其余分块的翻译

use std::sync::Arc;
use std::time::Duration;

use super::retry::with_retry;
use super::TranslationProvider;
use crate::translation::config::TranslationConfig;

/// 单个分块的翻译结果
///
/// `translated` 标记仅用于日志统计——无论成功与否，`text` 都是
/// 调用方可以直接使用的文本（失败时为原文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOutcome {
    /// 译文，或降级后的原文
    pub text: String,
    /// 本分块是否真正经过了翻译
    pub translated: bool,
}

/// 带重试与回退的翻译客户端
///
/// 提供方通过 `Arc` 共享，客户端本身可以廉价克隆后分发给
/// 文本翻译器与文档翻译器
pub struct TranslationClient<P> {
    provider: Arc<P>,
    max_attempts: usize,
    retry_delay: Duration,
}

impl<P> Clone for TranslationClient<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            max_attempts: self.max_attempts,
            retry_delay: self.retry_delay,
        }
    }
}

impl<P: TranslationProvider> TranslationClient<P> {
    /// 创建客户端
    pub fn new(provider: Arc<P>, max_attempts: usize, retry_delay: Duration) -> Self {
        Self {
            provider,
            max_attempts,
            retry_delay,
        }
    }

    /// 从配置创建客户端
    pub fn from_config(provider: Arc<P>, config: &TranslationConfig) -> Self {
        Self::new(provider, config.max_retry_attempts, config.retry_delay())
    }

    /// 翻译单个分块——永不失败
    ///
    /// 按固定间隔重试至多 `max_attempts` 次；全部失败后记录错误并
    /// 回退为原文。重试对所有错误一视同仁，不区分瞬时与永久
    pub async fn translate_chunk(&self, text: &str, dest_language: &str) -> ChunkOutcome {
        match with_retry(self.max_attempts, self.retry_delay, || {
            self.provider.translate(text, dest_language)
        })
        .await
        {
            Ok(translated) => ChunkOutcome {
                text: translated,
                translated: true,
            },
            Err(e) => {
                tracing::error!(error = %e, "翻译失败，降级为原文");
                ChunkOutcome {
                    text: text.to_string(),
                    translated: false,
                }
            }
        }
    }
}
