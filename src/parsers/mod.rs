//! # 解析器模块
//!
//! 文档解析与序列化：
//!
//! - `html` - 基于 html5ever 的宽容HTML解析、文本节点访问和序列化

pub mod html;
