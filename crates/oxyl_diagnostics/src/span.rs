//! Span / Position - 源码位置信息
//!
//! `Span` 是字节偏移范围，`Position` 是面向用户的行列号（均从 1 开始）。

use std::fmt;

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// Span 辅助函数
pub trait SpanExt {
    /// 转换为字符偏移范围（ariadne 以字符计数）
    fn to_char_range(&self, source: &str) -> Self;
}

impl SpanExt for Span {
    fn to_char_range(&self, source: &str) -> Self {
        let count = |offset: usize| {
            source
                .get(..offset.min(source.len()))
                .map_or(offset, |prefix| prefix.chars().count())
        };
        count(self.start)..count(self.end)
    }
}

/// 行列位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_range_counts_multibyte() {
        // 'é' 占两个字节
        let source = "é+x";
        let span: Span = 3..4;
        assert_eq!(span.to_char_range(source), 2..3);
    }

    #[test]
    fn test_char_range_clamps_past_end() {
        let span: Span = 1..9;
        assert_eq!(span.to_char_range("ab"), 1..2);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 7).to_string(), "3:7");
        assert!(Position::new(1, 9) < Position::new(2, 1));
    }
}
