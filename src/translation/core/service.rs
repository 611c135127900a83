//! 翻译服务门面
//!
//! 组合平文本翻译器与文档翻译器，作为排除在核心之外的请求处理层
//! 的唯一入口。两个入站操作都是全函数：提供方故障只会以未翻译
//! 段落的形式体现，永远不会作为错误向上传播
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use dolmetscher::translation::TranslationService;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 从环境变量（DEEPL_API_KEY 等）构建服务
//! let service = TranslationService::from_env()?;
//!
//! let text = service.translate_text_sync("Hallo, Welt!", "EN-US")?;
//! let html = service.translate_document_sync("<p>Hallo</p>", "EN-US")?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::translation::config::{load_translation_config, TranslationConfig};
use crate::translation::core::document::DocumentTranslator;
use crate::translation::core::text::TextTranslator;
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::provider::{DeepLProvider, TranslationProvider};

/// 统一的翻译服务
///
/// 提供方通过 `Arc` 在文本翻译器与文档翻译器之间共享；服务
/// 本身无跨调用状态，每次调用建立并拆除自己的并发批量
pub struct TranslationService<P = DeepLProvider> {
    texts: TextTranslator<P>,
    documents: DocumentTranslator<P>,
    config: TranslationConfig,
}

impl TranslationService<DeepLProvider> {
    /// 使用默认配置链（配置文件、环境变量、默认值）和 DeepL
    /// 提供方创建服务
    ///
    /// 凭证缺失在这里立刻失败；凭证无效则推迟到调用时按提供方
    /// 错误降级处理
    pub fn from_env() -> TranslationResult<Self> {
        Self::with_config(load_translation_config(None))
    }

    /// 使用给定配置和 DeepL 提供方创建服务
    pub fn with_config(config: TranslationConfig) -> TranslationResult<Self> {
        config.validate()?;
        let provider = Arc::new(DeepLProvider::from_env(&config)?);
        Ok(Self::new(provider, config))
    }
}

impl<P: TranslationProvider> TranslationService<P> {
    /// 使用任意提供方创建服务（测试注入桩实现的入口）
    pub fn new(provider: Arc<P>, config: TranslationConfig) -> Self {
        let texts = TextTranslator::from_config(Arc::clone(&provider), &config);
        let documents = DocumentTranslator::from_config(provider, &config);

        Self {
            texts,
            documents,
            config,
        }
    }

    /// 翻译平文本
    pub async fn translate_text(&self, text: &str, dest_language: &str) -> String {
        self.texts.translate_text(text, dest_language).await
    }

    /// 翻译单个文本节点内容（空白输入为空操作）
    pub async fn translate_text_node(&self, text: &str, dest_language: &str) -> String {
        self.texts.translate_text_node(text, dest_language).await
    }

    /// 翻译HTML文档，保持标记结构
    pub async fn translate_document(&self, html: &str, dest_language: &str) -> String {
        self.documents.translate_document(html, dest_language).await
    }

    /// 翻译平文本（同步版本）
    ///
    /// 内部创建异步运行时来执行翻译，适用于非异步环境。
    /// 仅当运行时创建失败时返回错误
    pub fn translate_text_sync(&self, text: &str, dest_language: &str) -> TranslationResult<String> {
        let rt = Self::runtime()?;
        Ok(rt.block_on(self.translate_text(text, dest_language)))
    }

    /// 翻译HTML文档（同步版本）
    pub fn translate_document_sync(
        &self,
        html: &str,
        dest_language: &str,
    ) -> TranslationResult<String> {
        let rt = Self::runtime()?;
        Ok(rt.block_on(self.translate_document(html, dest_language)))
    }

    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    fn runtime() -> TranslationResult<tokio::runtime::Runtime> {
        tokio::runtime::Runtime::new()
            .map_err(|e| TranslationError::InternalError(format!("创建异步运行时失败: {}", e)))
    }
}
