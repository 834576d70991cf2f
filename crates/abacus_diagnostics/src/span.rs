//! Span - 输入行中的位置
//!
//! 以字节偏移表示表达式各部分在原始输入行中的范围

/// 字节偏移范围
pub type Span = std::ops::Range<usize>;

/// Span 辅助函数
pub trait SpanExt {
    /// 创建一个新的 Span
    fn new(start: usize, end: usize) -> Self;

    /// 以起点和长度创建
    fn at(start: usize, len: usize) -> Self;

    /// 获取长度
    fn len(&self) -> usize;

    /// 是否为空
    fn is_empty(&self) -> bool;

    /// 转换为字符偏移（ariadne 按字符定位）
    fn to_char_span(&self, source: &str) -> Self;
}

impl SpanExt for Span {
    fn new(start: usize, end: usize) -> Self {
        start..end
    }

    fn at(start: usize, len: usize) -> Self {
        start..start + len
    }

    fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    fn to_char_span(&self, source: &str) -> Self {
        let char_offset = |byte: usize| {
            let byte = byte.min(source.len());
            source
                .char_indices()
                .take_while(|(i, _)| *i < byte)
                .count()
        };
        char_offset(self.start)..char_offset(self.end)
    }
}
