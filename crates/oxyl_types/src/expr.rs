//! 二元表达式
//!
//! 解析器尚未实现，表达式树由调用方直接构造。求值严格遵循两阶段协议：
//! 先由左操作数类型检查运算是否合法，检查通过后才取执行函数。

use crate::error::TypeError;
use crate::kind::Kind;
use crate::value::Value;
use oxyl_syntax::Operator;
use std::fmt;
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Binary {
        op: Operator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn binary(op: Operator, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// 类型检查，返回表达式的结果类型
    pub fn check(&self) -> Result<Kind, TypeError> {
        match self {
            Expr::Literal(value) => Ok(value.kind()),
            Expr::Binary { op, lhs, rhs } => {
                let left = lhs.check()?;
                let right = rhs.check()?;
                left.check_operands(*op, right)
                    .map_err(|err| with_right_kind(err, right))
            }
        }
    }

    /// 求值；任一子树出错即停止
    pub fn evaluate(&self) -> Result<Value, TypeError> {
        match self {
            Expr::Literal(value) => Ok(*value),
            Expr::Binary { op, lhs, rhs } => {
                let left = lhs.evaluate()?;
                let right = rhs.evaluate()?;

                left.kind()
                    .check_operands(*op, right.kind())
                    .map_err(|err| with_right_kind(err, right.kind()))?;
                let result = left.kind().executor(*op)?.apply(&left, &right)?;

                trace!(%op, %left, %right, %result, "evaluated binary expression");
                Ok(result)
            }
        }
    }
}

/// 表达式层同时知道两侧类型，报错时两者都要出现
fn with_right_kind(err: TypeError, right: Kind) -> TypeError {
    match err {
        TypeError::OperatorNotDefined { op, kind } => TypeError::mismatch(op, kind, right),
        other => other,
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(op: Operator, lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(op, lhs, rhs)
    }

    #[test]
    fn test_integer_division_truncates() {
        let expr = bin(Operator::Slash, Expr::literal(7), Expr::literal(2));
        assert_eq!(expr.check(), Ok(Kind::Int));
        assert_eq!(expr.evaluate(), Ok(Value::Int(3)));
    }

    #[test]
    fn test_promotion_to_float() {
        let expr = bin(Operator::Plus, Expr::literal(1), Expr::literal(2.0));
        assert_eq!(expr.check(), Ok(Kind::Float));
        assert_eq!(expr.evaluate(), Ok(Value::Float(3.0)));
    }

    #[test]
    fn test_nested_expression() {
        // (1 + 2) * 2.5 >= 7 && 1 != 2
        let sum = bin(Operator::Plus, Expr::literal(1), Expr::literal(2));
        let product = bin(Operator::Star, sum, Expr::literal(2.5));
        let cmp = bin(Operator::GreaterEqual, product, Expr::literal(7));
        let ne = bin(Operator::BangEqual, Expr::literal(1), Expr::literal(2));
        let expr = bin(Operator::And, cmp, ne);

        assert_eq!(expr.to_string(), "((((1 + 2) * 2.5) >= 7) && (1 != 2))");
        assert_eq!(expr.check(), Ok(Kind::Bool));
        assert_eq!(expr.evaluate(), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_mismatch_short_circuits() {
        let bad = bin(Operator::Plus, Expr::literal(1), Expr::literal(true));
        let expr = bin(Operator::Star, bad, Expr::literal(2));

        let expected = TypeError::mismatch(Operator::Plus, Kind::Int, Kind::Bool);
        assert_eq!(expr.check(), Err(expected.clone()));
        assert_eq!(expr.evaluate(), Err(expected));
    }

    #[test]
    fn test_undefined_operator_names_both_kinds() {
        let cases = [
            (bin(Operator::Plus, Expr::literal(true), Expr::literal(1)), "Bool", "Int"),
            (bin(Operator::And, Expr::literal(1), Expr::literal(2.0)), "Int", "Float"),
            (bin(Operator::Plus, Expr::Literal(Value::None), Expr::literal(1)), "None", "Int"),
        ];

        for (expr, left, right) in cases {
            let msg = expr.evaluate().unwrap_err().to_string();
            assert!(msg.contains(left) && msg.contains(right), "{}", msg);
            assert_eq!(expr.check().unwrap_err().to_string(), msg);
        }

        let expr = bin(Operator::Plus, Expr::Literal(Value::None), Expr::literal(1));
        assert_eq!(
            expr.evaluate(),
            Err(TypeError::mismatch(Operator::Plus, Kind::None, Kind::Int))
        );
    }

    #[test]
    fn test_division_by_zero_passes_check() {
        let expr = bin(Operator::Slash, Expr::literal(1), Expr::literal(0));
        assert_eq!(expr.check(), Ok(Kind::Int));
        assert!(matches!(
            expr.evaluate(),
            Err(TypeError::DivisionByZero { .. })
        ));
    }
}
