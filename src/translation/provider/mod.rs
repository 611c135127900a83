//! 翻译提供方模块
//!
//! 封装与外部翻译服务的交互：
//! - **`TranslationProvider`**: 提供方抽象，一次调用翻译一段文本
//! - **`DeepLProvider`**: 基于 DeepL API 的具体实现
//! - **`TranslationClient`**: 带重试与回退策略的客户端，对调用方永不失败
//! - **`with_retry`**: 显式的重试组合子
//!
//! 管道的其余部分只依赖 `TranslationProvider`，测试可以注入桩实现

pub mod client;
pub mod deepl;
pub mod retry;

pub use client::{ChunkOutcome, TranslationClient};
pub use deepl::DeepLProvider;
pub use retry::with_retry;

use crate::translation::error::TranslationResult;

/// 翻译提供方抽象
///
/// 一次逻辑操作：`translate(text, target_lang) -> 译文 | 提供方错误`。
/// `target_lang` 为 BCP-47 风格代码（如 `EN-US`），实现负责按提供方
/// 要求规范化大小写
#[allow(async_fn_in_trait)]
pub trait TranslationProvider {
    async fn translate(&self, text: &str, target_lang: &str) -> TranslationResult<String>;
}
