//! Lexical Errors
//!
//! 只有无法表示的数字字面量会中止词法分析；无法识别的字符降级为
//! `Token::Unknown` 并记录一条诊断。

use oxyl_diagnostics::{Diagnostic, Position, Span};
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// 词法错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// 整数字面量超出 64 位有符号整数范围
    #[error("integer literal '{literal}' at {position} cannot be represented: {source}")]
    InvalidInteger {
        literal: String,
        span: Span,
        position: Position,
        source: ParseIntError,
    },

    /// 浮点字面量无法解析
    #[error("float literal '{literal}' at {position} cannot be represented: {source}")]
    InvalidFloat {
        literal: String,
        span: Span,
        position: Position,
        source: ParseFloatError,
    },
}

impl LexError {
    pub fn span(&self) -> &Span {
        match self {
            Self::InvalidInteger { span, .. } => span,
            Self::InvalidFloat { span, .. } => span,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::InvalidInteger { position, .. } => *position,
            Self::InvalidFloat { position, .. } => *position,
        }
    }

    /// 转换为统一诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string())
            .span(self.span().clone())
            .at(self.position());

        match self {
            Self::InvalidInteger { .. } => {
                diag.with_note("integer literals must fit in a 64-bit signed integer")
            }
            Self::InvalidFloat { .. } => diag,
        }
    }
}

/// logos 内部使用的扫描错误
///
/// 默认值对应“无法识别的字符”，这是 logos 在没有任何规则匹配时产生的错误。
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum ScanError {
    #[default]
    Unrecognized,
    Integer(ParseIntError),
    Float(ParseFloatError),
}
