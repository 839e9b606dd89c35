//! 数值运算内核
//!
//! Int 与 Float 的规则表共用这些函数。混合运算时整数先提升为浮点数；
//! 整数运算按二进制补码回绕。

use crate::error::TypeError;
use crate::kind::Kind;
use crate::value::Value;
use oxyl_syntax::Operator;
use std::cmp::Ordering;

/// 提升后的操作数对
enum NumericPair {
    Int(i64, i64),
    Float(f64, f64),
}

impl NumericPair {
    fn promote(left: &Value, right: &Value) -> Option<NumericPair> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => Some(NumericPair::Int(*a, *b)),
            (Value::Int(a), Value::Float(b)) => Some(NumericPair::Float(*a as f64, *b)),
            (Value::Float(a), Value::Int(b)) => Some(NumericPair::Float(*a, *b as f64)),
            (Value::Float(a), Value::Float(b)) => Some(NumericPair::Float(*a, *b)),
            (Value::Int(_) | Value::Float(_), Value::Bool(_) | Value::None)
            | (Value::Bool(_) | Value::None, _) => None,
        }
    }
}

fn arithmetic(
    op: Operator,
    left: &Value,
    right: &Value,
    int: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Result<Value, TypeError> {
    match NumericPair::promote(left, right) {
        Some(NumericPair::Int(a, b)) => int(a, b)
            .map(Value::Int)
            .ok_or(TypeError::DivisionByZero { op, kind: Kind::Int }),
        Some(NumericPair::Float(a, b)) => Ok(Value::Float(float(a, b))),
        None => Err(TypeError::mismatch(op, left.kind(), right.kind())),
    }
}

pub(super) fn add(left: &Value, right: &Value) -> Result<Value, TypeError> {
    arithmetic(
        Operator::Plus,
        left,
        right,
        |a, b| Some(a.wrapping_add(b)),
        |a, b| a + b,
    )
}

pub(super) fn sub(left: &Value, right: &Value) -> Result<Value, TypeError> {
    arithmetic(
        Operator::Dash,
        left,
        right,
        |a, b| Some(a.wrapping_sub(b)),
        |a, b| a - b,
    )
}

pub(super) fn mul(left: &Value, right: &Value) -> Result<Value, TypeError> {
    arithmetic(
        Operator::Star,
        left,
        right,
        |a, b| Some(a.wrapping_mul(b)),
        |a, b| a * b,
    )
}

/// 整数除法向零截断
pub(super) fn div(left: &Value, right: &Value) -> Result<Value, TypeError> {
    arithmetic(
        Operator::Slash,
        left,
        right,
        |a, b| (b != 0).then(|| a.wrapping_div(b)),
        |a, b| a / b,
    )
}

pub(super) fn rem(left: &Value, right: &Value) -> Result<Value, TypeError> {
    arithmetic(
        Operator::Percent,
        left,
        right,
        |a, b| (b != 0).then(|| a.wrapping_rem(b)),
        |a, b| a % b,
    )
}

fn compare(op: Operator, left: &Value, right: &Value) -> Result<Value, TypeError> {
    let ordering = match NumericPair::promote(left, right) {
        Some(NumericPair::Int(a, b)) => Some(a.cmp(&b)),
        Some(NumericPair::Float(a, b)) => a.partial_cmp(&b),
        None => return Err(TypeError::mismatch(op, left.kind(), right.kind())),
    };

    // NaN 与任何值都无序：只有 `!=` 成立
    let holds = match op {
        Operator::Less => ordering == Some(Ordering::Less),
        Operator::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        Operator::Greater => ordering == Some(Ordering::Greater),
        Operator::GreaterEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        Operator::EqualEqual => ordering == Some(Ordering::Equal),
        Operator::BangEqual => ordering != Some(Ordering::Equal),
        _ => return Err(TypeError::mismatch(op, left.kind(), right.kind())),
    };
    Ok(Value::Bool(holds))
}

pub(super) fn less(left: &Value, right: &Value) -> Result<Value, TypeError> {
    compare(Operator::Less, left, right)
}

pub(super) fn less_equal(left: &Value, right: &Value) -> Result<Value, TypeError> {
    compare(Operator::LessEqual, left, right)
}

pub(super) fn greater(left: &Value, right: &Value) -> Result<Value, TypeError> {
    compare(Operator::Greater, left, right)
}

pub(super) fn greater_equal(left: &Value, right: &Value) -> Result<Value, TypeError> {
    compare(Operator::GreaterEqual, left, right)
}

pub(super) fn equal(left: &Value, right: &Value) -> Result<Value, TypeError> {
    compare(Operator::EqualEqual, left, right)
}

pub(super) fn not_equal(left: &Value, right: &Value) -> Result<Value, TypeError> {
    compare(Operator::BangEqual, left, right)
}

fn bitwise(
    op: Operator,
    left: &Value,
    right: &Value,
    f: fn(i64, i64) -> i64,
) -> Result<Value, TypeError> {
    if let (Value::Int(a), Value::Int(b)) = (left, right) {
        Ok(Value::Int(f(*a, *b)))
    } else {
        Err(TypeError::mismatch(op, left.kind(), right.kind()))
    }
}

pub(super) fn bit_and(left: &Value, right: &Value) -> Result<Value, TypeError> {
    bitwise(Operator::Amp, left, right, |a, b| a & b)
}

pub(super) fn bit_or(left: &Value, right: &Value) -> Result<Value, TypeError> {
    bitwise(Operator::Pipe, left, right, |a, b| a | b)
}

pub(super) fn bit_xor(left: &Value, right: &Value) -> Result<Value, TypeError> {
    bitwise(Operator::Caret, left, right, |a, b| a ^ b)
}
