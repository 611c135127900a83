//! 文档翻译器
//!
//! 在保持标记结构逐字节不变的前提下翻译HTML文档的人类可读文本：
//! 解析为树、按文档序收集文本节点、并发翻译、串行回写、序列化并
//! 归一化输出。标签、属性、注释和树形结构一律不动，只有叶子文本
//! 的内容被替换
//!
//! ## 并发模型
//!
//! 树在一次调用内被独占持有。翻译阶段只读取收集时的文本快照，
//! 所有译文通过索引对齐的有界流收齐之后，替换阶段才开始并且
//! 完全串行——树本身因此不需要任何同步

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::parsers::html::{html_to_dom, normalize_markup, serialize_document, set_text_content};
use crate::translation::config::TranslationConfig;
use crate::translation::core::text::TextTranslator;
use crate::translation::pipeline::collector::TextCollector;
use crate::translation::provider::TranslationProvider;

/// 文档翻译器
pub struct DocumentTranslator<P> {
    texts: TextTranslator<P>,
    collector: TextCollector,
    max_concurrent_requests: usize,
}

impl<P: TranslationProvider> DocumentTranslator<P> {
    /// 创建文档翻译器
    pub fn new(texts: TextTranslator<P>, max_concurrent_requests: usize) -> Self {
        Self {
            texts,
            collector: TextCollector::new(),
            max_concurrent_requests: max_concurrent_requests.max(1),
        }
    }

    /// 从配置创建文档翻译器
    pub fn from_config(provider: Arc<P>, config: &TranslationConfig) -> Self {
        Self::new(
            TextTranslator::from_config(provider, config),
            config.max_concurrent_requests,
        )
    }

    /// 翻译HTML文档
    ///
    /// 残缺标记不会导致失败——解析器尽力恢复；提供方故障不会导致
    /// 失败——最坏情况是每个节点都回退为原文，外观归一化照常应用
    pub async fn translate_document(&self, html: &str, dest_language: &str) -> String {
        let dom = html_to_dom(html);

        let items = self.collector.collect_translatable_texts(&dom.document);
        if items.is_empty() {
            tracing::debug!("文档中没有可翻译的文本节点");
            return normalize_markup(&serialize_document(&dom));
        }

        tracing::info!("开始翻译文档: {} 个文本节点", items.len());

        // 并发收集译文，结果与工作列表按下标对齐；树保持不动
        let translated: Vec<String> = stream::iter(items.iter())
            .map(|item| self.texts.translate_text_node(&item.text, dest_language))
            .buffered(self.max_concurrent_requests)
            .collect()
            .await;

        // 收齐之后串行回写：修剪译文并追加单个尾部空格，与分块重组的
        // 单空格连接约定一致，避免相邻行内元素在视觉上粘连
        for (item, translated_text) in items.iter().zip(translated.iter()) {
            set_text_content(&item.node, &format!("{} ", translated_text.trim()));
        }

        tracing::info!("文档翻译完成");

        normalize_markup(&serialize_document(&dom))
    }
}
