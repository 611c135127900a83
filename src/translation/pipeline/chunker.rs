//! 文本分块器
//!
//! 外部翻译提供方对请求体大小有限制，分块把每次调用的载荷
//! 控制在界内。边界始终落在词与词之间，任何词都不会被拦腰
//! 截断。词之间的原始空白不保留——重组时统一用单个空格连接

/// 原始文本的一个有序分块
///
/// `index` 为派发顺序的零基下标，重组时按它还原顺序；
/// `text` 是该分块的词以单个空格连接的结果。
/// 不变式：把所有分块的 `text` 按序用单空格连接，恰好还原
/// 原文的词序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub index: usize,
    pub text: String,
}

impl TextChunk {
    /// 分块包含的词数
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// 将文本按词边界切分为有界分块
///
/// 按空白切词后，每 `max_words_per_chunk` 个词聚成一块，最后
/// 一块可以更短。空输入或纯空白输入产生空序列。纯函数，无副作用，
/// 无失败路径；`max_words_per_chunk` 为 0 时按 1 处理
pub fn chunk_text(text: &str, max_words_per_chunk: usize) -> Vec<TextChunk> {
    let max_words = max_words_per_chunk.max(1);
    let words: Vec<&str> = text.split_whitespace().collect();

    words
        .chunks(max_words)
        .enumerate()
        .map(|(index, group)| TextChunk {
            index,
            text: group.join(" "),
        })
        .collect()
}
