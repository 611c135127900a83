//! 核心翻译编排模块
//!
//! - `text` - 平文本翻译器：分块、并发派发、按序重组
//! - `document` - 文档翻译器：解析、收集、并发翻译、原地回写、序列化
//! - `service` - 对外门面，组合以上两者并提供同步包装

pub mod document;
pub mod service;
pub mod text;

pub use document::DocumentTranslator;
pub use service::TranslationService;
pub use text::TextTranslator;
