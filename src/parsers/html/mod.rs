//! HTML 解析与序列化
//!
//! 封装 html5ever / markup5ever_rcdom：解析永不失败（残缺标记得到
//! 尽力恢复的树），序列化后再做输出归一化

pub mod dom;
pub mod serializer;

pub use dom::{get_node_name, get_text_content, html_to_dom, set_text_content};
pub use serializer::{normalize_markup, serialize_document};
