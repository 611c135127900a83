//! 文本处理管道模块
//!
//! 负责把原始输入切成可独立提交的翻译单元：
//! - `chunker` - 纯函数文本分块，按词边界切分
//! - `collector` - 从DOM中按文档序收集可翻译文本节点

pub mod chunker;
pub mod collector;

pub use chunker::{chunk_text, TextChunk};
pub use collector::{TextCollector, TextItem};
