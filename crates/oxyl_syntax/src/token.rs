//! Token 定义
//!
//! 词法分析器的输出单元。除字面量和标识符外，每种 token 的文本表示是固定的，
//! 诊断信息和快照测试可以依赖 `Display` 的输出。

use crate::operator::Operator;
use oxyl_diagnostics::{Position, Span};
use std::fmt;

/// 词法单元
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // --- 单字符符号 ---
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Dot,
    Colon,
    DoubleQuote,
    SingleQuote,

    // --- 字面量 ---
    Identifier(String),
    Int(i64),
    Float(f64),

    // --- 关键字 ---
    Let,
    Fun,

    Operator(Operator),

    /// 语句分隔符
    Newline,
    /// 无法识别的字符
    Unknown(char),
    Eof,
}

impl Token {
    /// 单字符符号查表
    pub fn from_punctuation(c: char) -> Option<Token> {
        match c {
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            '{' => Some(Token::LeftBrace),
            '}' => Some(Token::RightBrace),
            '[' => Some(Token::LeftBracket),
            ']' => Some(Token::RightBracket),
            ',' => Some(Token::Comma),
            '.' => Some(Token::Dot),
            ':' => Some(Token::Colon),
            '"' => Some(Token::DoubleQuote),
            '\'' => Some(Token::SingleQuote),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::LeftBrace => f.write_str("{"),
            Token::RightBrace => f.write_str("}"),
            Token::LeftBracket => f.write_str("["),
            Token::RightBracket => f.write_str("]"),
            Token::Comma => f.write_str(","),
            Token::Dot => f.write_str("."),
            Token::Colon => f.write_str(":"),
            Token::DoubleQuote => f.write_str("\""),
            Token::SingleQuote => f.write_str("'"),
            Token::Identifier(name) => write!(f, "Identifier: {}", name),
            Token::Int(n) => write!(f, "Int: {}", n),
            Token::Float(x) => write!(f, "Float: {:?}", x),
            Token::Let => f.write_str("let"),
            Token::Fun => f.write_str("fun"),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Newline => f.write_str("Newline"),
            Token::Unknown(c) => write!(f, "Unknown: {}", c.escape_debug()),
            Token::Eof => f.write_str("EOF"),
        }
    }
}

/// 带位置信息的 token
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    /// 字节范围
    pub span: Span,
    /// 起始行列
    pub position: Position,
}

impl SpannedToken {
    pub fn new(token: Token, span: Span, position: Position) -> Self {
        Self {
            token,
            span,
            position,
        }
    }
}
