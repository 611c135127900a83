//! 文本收集器模块
//!
//! 从DOM树中按文档序收集可翻译的文本节点

use markup5ever_rcdom::{Handle, NodeData};

use crate::parsers::html::get_node_name;
use crate::translation::config::constants;

/// 存储需要翻译的文本及其在树中的位置
///
/// `node` 是指向树内叶子文本节点的句柄，译文稍后原地写回；
/// `text` 是收集时刻的内容快照，派发翻译时只读取快照，
/// 树本身在收集与回写之间不被触碰
#[derive(Clone)]
pub struct TextItem {
    /// 文本内容
    pub text: String,
    /// DOM节点引用
    pub node: Handle,
}

/// 文本收集器
///
/// 前序深度优先遍历：发现顺序即文档顺序，后续派发与回写都以
/// 这个顺序为准。纯空白的文本节点不进入工作列表（原样留在树里），
/// 跳过列表中元素的整棵子树不参与收集
pub struct TextCollector {
    skip_elements: Vec<String>,
}

impl Default for TextCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCollector {
    pub fn new() -> Self {
        Self {
            skip_elements: constants::SKIP_ELEMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// 自定义跳过列表（测试用）
    pub fn with_skip_elements(skip_elements: Vec<String>) -> Self {
        Self { skip_elements }
    }

    /// 按文档序收集所有可翻译文本节点
    pub fn collect_translatable_texts(&self, root: &Handle) -> Vec<TextItem> {
        let mut items = Vec::new();
        self.walk(root, &mut items);

        tracing::debug!("收集到 {} 个可翻译文本节点", items.len());
        items
    }

    fn walk(&self, node: &Handle, items: &mut Vec<TextItem>) {
        match &node.data {
            NodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if !text.trim().is_empty() {
                    items.push(TextItem {
                        text,
                        node: node.clone(),
                    });
                }
            }
            _ => {
                if let Some(name) = get_node_name(node) {
                    if self.skip_elements.iter().any(|skip| skip == name) {
                        return;
                    }
                }

                for child in node.children.borrow().iter() {
                    self.walk(child, items);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::html::html_to_dom;

    fn collect(html: &str) -> Vec<String> {
        let dom = html_to_dom(html);
        TextCollector::new()
            .collect_translatable_texts(&dom.document)
            .into_iter()
            .map(|item| item.text)
            .collect()
    }

    #[test]
    fn test_collects_in_document_order() {
        let texts = collect("<div><h1>Erste</h1><p>Zweite</p><p>Dritte</p></div>");
        assert_eq!(texts, vec!["Erste", "Zweite", "Dritte"]);
    }

    #[test]
    fn test_skips_whitespace_only_nodes() {
        let texts = collect("<div>\n  <p>Inhalt</p>\n  </div>");
        assert_eq!(texts, vec!["Inhalt"]);
    }

    #[test]
    fn test_skips_script_and_style_subtrees() {
        let texts = collect(
            "<div><script>var x = 1;</script><style>p { color: red; }</style><p>Sichtbar</p></div>",
        );
        assert_eq!(texts, vec!["Sichtbar"]);
    }

    #[test]
    fn test_collects_nested_inline_text() {
        let texts = collect("<p>Hallo <b>fette</b> Welt</p>");
        assert_eq!(texts, vec!["Hallo ", "fette", " Welt"]);
    }

    #[test]
    fn test_empty_document_yields_no_items() {
        assert!(collect("").is_empty());
    }
}
