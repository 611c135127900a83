//! 翻译模块
//!
//! 提供结构保持的分块并发翻译管道，采用清晰的模块化架构：
//! - **core**: 翻译编排（平文本、文档、服务门面）
//! - **pipeline**: 文本处理管道（分块、收集）
//! - **provider**: 外部翻译提供方与重试/回退客户端
//! - **config**: 配置管理
//! - **error**: 错误处理
//!
//! # 基本用法
//!
//! ```rust,no_run
//! use dolmetscher::translation::TranslationService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = TranslationService::from_env()?;
//!
//! // 平文本：分块、并发翻译、按序重组
//! let text = service.translate_text("Hallo, Welt!", "EN-US").await;
//!
//! // HTML文档：只翻译人类可读文本，标记结构保持不变
//! let html = service
//!     .translate_document("<p>Dies ist ein Text.</p>", "EN-US")
//!     .await;
//! # Ok(())
//! # }
//! ```

/// 配置管理模块 - 处理翻译相关的所有配置
pub mod config;

/// 核心翻译编排模块 - 平文本与文档翻译器及服务门面
pub mod core;

/// 错误处理模块 - 统一的错误类型和处理机制
pub mod error;

/// 文本处理管道模块 - 分块与文本节点收集
pub mod pipeline;

/// 翻译提供方模块 - 外部服务抽象、重试与回退
pub mod provider;

// ============================================================================
// 核心API导出 - 主要的公共接口
// ============================================================================

pub use config::{
    constants, load_translation_config, validate_language_code, ConfigManager, TranslationConfig,
};
pub use core::{DocumentTranslator, TextTranslator, TranslationService};
pub use error::{TranslationError, TranslationResult};
pub use provider::{ChunkOutcome, DeepLProvider, TranslationClient, TranslationProvider};

// ============================================================================
// 高级API导出 - 供细粒度控制和扩展开发使用
// ============================================================================

pub use pipeline::{chunk_text, TextChunk, TextCollector, TextItem};
pub use provider::with_retry;

// ============================================================================
// 便利函数导出 - 简化常见操作的高级函数
// ============================================================================

/// 翻译平文本内容（异步版本）
///
/// 使用默认配置链与 DeepL 提供方。仅服务构建（缺少凭证、配置
/// 无效）会返回错误；翻译本身对提供方故障降级为原文
pub async fn translate_text_content(text: &str, dest_language: &str) -> TranslationResult<String> {
    let service = TranslationService::from_env()?;
    Ok(service.translate_text(text, dest_language).await)
}

/// 翻译HTML文档内容（异步版本），保持标记结构
pub async fn translate_html_content(html: &str, dest_language: &str) -> TranslationResult<String> {
    let service = TranslationService::from_env()?;
    Ok(service.translate_document(html, dest_language).await)
}

/// 翻译平文本内容（同步版本）
///
/// 内部创建异步运行时来执行翻译，适用于非异步环境
pub fn translate_text_content_sync(text: &str, dest_language: &str) -> TranslationResult<String> {
    let service = TranslationService::from_env()?;
    service.translate_text_sync(text, dest_language)
}

/// 翻译HTML文档内容（同步版本）
pub fn translate_html_content_sync(html: &str, dest_language: &str) -> TranslationResult<String> {
    let service = TranslationService::from_env()?;
    service.translate_document_sync(html, dest_language)
}
