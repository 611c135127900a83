//! 平文本翻译器
//!
//! 编排分块与并发派发：每个分块作为独立工作单元提交给客户端，
//! 结果按分块下标聚合（索引对齐，而非完成顺序），最后用单空格
//! 连接。客户端永不失败，本层因此没有错误路径——任何提供方故障
//! 都已在下层降级为原文

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::translation::config::TranslationConfig;
use crate::translation::pipeline::chunker::chunk_text;
use crate::translation::provider::{ChunkOutcome, TranslationClient, TranslationProvider};

/// 平文本翻译器
pub struct TextTranslator<P> {
    client: TranslationClient<P>,
    tokens_per_chunk: usize,
    max_concurrent_requests: usize,
}

impl<P> Clone for TextTranslator<P> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            tokens_per_chunk: self.tokens_per_chunk,
            max_concurrent_requests: self.max_concurrent_requests,
        }
    }
}

impl<P: TranslationProvider> TextTranslator<P> {
    /// 创建翻译器
    pub fn new(
        client: TranslationClient<P>,
        tokens_per_chunk: usize,
        max_concurrent_requests: usize,
    ) -> Self {
        Self {
            client,
            tokens_per_chunk: tokens_per_chunk.max(1),
            max_concurrent_requests: max_concurrent_requests.max(1),
        }
    }

    /// 从配置创建翻译器
    pub fn from_config(provider: Arc<P>, config: &TranslationConfig) -> Self {
        Self::new(
            TranslationClient::from_config(provider, config),
            config.tokens_per_chunk,
            config.max_concurrent_requests,
        )
    }

    /// 翻译一段平文本
    ///
    /// 分块后并发派发，单次批量内的并发量受配置上界约束；
    /// `buffered` 保证输出顺序与派发顺序一致，与各请求的完成
    /// 先后无关。空输入直接返回空串
    pub async fn translate_text(&self, text: &str, dest_language: &str) -> String {
        let chunks = chunk_text(text, self.tokens_per_chunk);
        if chunks.is_empty() {
            return String::new();
        }

        let outcomes: Vec<ChunkOutcome> = stream::iter(chunks.iter())
            .map(|chunk| self.client.translate_chunk(&chunk.text, dest_language))
            .buffered(self.max_concurrent_requests)
            .collect()
            .await;

        let translated = outcomes.iter().filter(|o| o.translated).count();
        if translated < outcomes.len() {
            tracing::warn!(
                "{}/{} 个分块翻译成功，其余降级为原文",
                translated,
                outcomes.len()
            );
        } else {
            tracing::debug!("{} 个分块全部翻译成功", outcomes.len());
        }

        outcomes
            .into_iter()
            .map(|o| o.text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 翻译单个文本节点的内容
    ///
    /// 与 `translate_text` 相同，但空白节点直接原样返回，不发起
    /// 任何提供方调用——标记树里纯排版空白的节点很常见，逐个翻译
    /// 是纯浪费
    pub async fn translate_text_node(&self, text: &str, dest_language: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        self.translate_text(text, dest_language).await
    }
}
