use html5ever::serialize::{serialize, SerializeOpts};
use markup5ever_rcdom::{RcDom, SerializableHandle};

/// 序列化文档
pub fn serialize_document(dom: &RcDom) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let serializable: SerializableHandle = dom.document.clone().into();
    serialize(&mut buf, &serializable, SerializeOpts::default())
        .expect("Unable to serialize DOM into buffer");

    String::from_utf8_lossy(&buf).to_string()
}

/// 输出归一化
///
/// 属性序列化中的双引号统一替换为单引号；`" >"` 收缩为 `">"`、
/// `" </"` 收缩为 `"</"`，消除文本替换时追加的尾部空格在闭合标签前
/// 留下的缝隙。这些是为输出稳定性做的外观规则，不是HTML语义要求
pub fn normalize_markup(html: &str) -> String {
    html.replace('"', "'").replace(" >", ">").replace(" </", "</")
}
