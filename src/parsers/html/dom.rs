use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// 将 HTML 字符串解析为 DOM
///
/// html5ever 的树构建器基于错误恢复，残缺或不完整的标记也会得到
/// 一棵尽力而为的树，解析本身不会失败
pub fn html_to_dom(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        // Reading from an in-memory buffer cannot fail
        .read_from(&mut html.as_bytes())
        .unwrap()
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 读取文本节点的内容；非文本节点返回 None
pub fn get_text_content(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

/// 原地替换文本节点的内容
///
/// 只改叶子文本，节点本身不会被移动或克隆；非文本节点是空操作
pub fn set_text_content(node: &Handle, text: &str) {
    if let NodeData::Text { contents } = &node.data {
        let contents_mut = &mut contents.borrow_mut();
        contents_mut.clear();
        contents_mut.push_slice(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_text_node(node: &Handle) -> Option<Handle> {
        if matches!(node.data, NodeData::Text { .. }) {
            return Some(node.clone());
        }
        for child in node.children.borrow().iter() {
            if let Some(found) = first_text_node(child) {
                return Some(found);
            }
        }
        None
    }

    #[test]
    fn test_html_to_dom_tolerates_malformed_markup() {
        // 未闭合的标签不会让解析失败
        let dom = html_to_dom("<div><p>offen");
        assert!(first_text_node(&dom.document).is_some());
    }

    #[test]
    fn test_set_text_content_replaces_in_place() {
        let dom = html_to_dom("<p>alt</p>");
        let node = first_text_node(&dom.document).unwrap();

        set_text_content(&node, "neu ");
        assert_eq!(get_text_content(&node).unwrap(), "neu ");
    }

    #[test]
    fn test_set_text_content_ignores_elements() {
        let dom = html_to_dom("<p>text</p>");
        // 对元素节点调用是空操作，不会panic
        set_text_content(&dom.document, "ignored");
        assert!(get_text_content(&dom.document).is_none());
    }
}
