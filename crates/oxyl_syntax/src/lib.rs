//! Oxyl Syntax
//!
//! 前端的词法层：
//! - [`Token`] / [`SpannedToken`] - 词法单元
//! - [`Operator`] - 二元运算符及其优先级
//! - [`Tokenizer`] - 字符序列到 token 序列
//!
//! 解析器将消费 [`TokenStream`]：`Newline` 作为语句分隔符，`Eof` 是唯一的终止信号。

pub mod error;
pub mod lexer;
pub mod operator;
pub mod token;

pub use error::LexError;
pub use lexer::{tokenize, TokenStream, Tokenizer};
pub use operator::Operator;
pub use token::{SpannedToken, Token};
