//! 运算符定义
//!
//! 运算符同时属于词法层（作为 token 产出）和类型层（按类型解析语义），
//! 因此单独成模块，`oxyl_types` 只依赖这一部分词汇。

use std::fmt;

/// 运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    /// `-`
    Dash,
    /// `+`
    Plus,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `^`
    Caret,
    /// `%`
    Percent,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `!`
    Bang,
    /// `=`
    Equal,
    /// `!=`
    BangEqual,
    /// `==`
    EqualEqual,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl Operator {
    /// 全部运算符，按声明顺序
    pub const ALL: [Operator; 18] = [
        Operator::Dash,
        Operator::Plus,
        Operator::Slash,
        Operator::Star,
        Operator::Caret,
        Operator::Percent,
        Operator::Amp,
        Operator::Pipe,
        Operator::Greater,
        Operator::Less,
        Operator::Bang,
        Operator::Equal,
        Operator::BangEqual,
        Operator::EqualEqual,
        Operator::GreaterEqual,
        Operator::LessEqual,
        Operator::And,
        Operator::Or,
    ];

    /// 源码写法
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Dash => "-",
            Operator::Plus => "+",
            Operator::Slash => "/",
            Operator::Star => "*",
            Operator::Caret => "^",
            Operator::Percent => "%",
            Operator::Amp => "&",
            Operator::Pipe => "|",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::Bang => "!",
            Operator::Equal => "=",
            Operator::BangEqual => "!=",
            Operator::EqualEqual => "==",
            Operator::GreaterEqual => ">=",
            Operator::LessEqual => "<=",
            Operator::And => "&&",
            Operator::Or => "||",
        }
    }

    /// 根据源码写法查找运算符
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// 二元表达式中的优先级，数值越大结合越紧
    ///
    /// 同一层级的运算符左结合，由解析器负责。
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Star | Operator::Slash | Operator::Percent => 5,
            Operator::Plus | Operator::Dash => 4,
            Operator::EqualEqual
            | Operator::BangEqual
            | Operator::Greater
            | Operator::GreaterEqual
            | Operator::Less
            | Operator::LessEqual => 3,
            Operator::And => 2,
            Operator::Or => 1,
            Operator::Caret | Operator::Amp | Operator::Pipe | Operator::Bang | Operator::Equal => 0,
        }
    }

    /// 是否可以出现在二元表达式中（`!` 是前缀运算符，`=` 是赋值）
    pub fn is_binary(&self) -> bool {
        !matches!(self, Operator::Bang | Operator::Equal)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("**"), None);
    }

    #[test]
    fn test_precedence_tiers() {
        assert!(Operator::Star.precedence() > Operator::Plus.precedence());
        assert!(Operator::Plus.precedence() > Operator::LessEqual.precedence());
        assert!(Operator::EqualEqual.precedence() > Operator::And.precedence());
        assert!(Operator::And.precedence() > Operator::Or.precedence());
        assert_eq!(Operator::Slash.precedence(), Operator::Percent.precedence());
    }

    #[test]
    fn test_binary_operators() {
        assert!(Operator::Plus.is_binary());
        assert!(Operator::Or.is_binary());
        assert!(!Operator::Bang.is_binary());
        assert!(!Operator::Equal.is_binary());
    }
}
