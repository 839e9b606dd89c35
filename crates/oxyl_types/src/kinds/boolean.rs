//! Bool 类型规则

use super::{KindRules, OperandRule};
use crate::error::TypeError;
use crate::kind::{Kind, Trait};
use crate::method::Method;
use crate::value::Value;
use oxyl_syntax::Operator;

/// 布尔值，比较运算的结果类型
pub struct BoolKind;

fn logical(
    op: Operator,
    left: &Value,
    right: &Value,
    f: fn(bool, bool) -> bool,
) -> Result<Value, TypeError> {
    if let (Value::Bool(a), Value::Bool(b)) = (left, right) {
        Ok(Value::Bool(f(*a, *b)))
    } else {
        Err(TypeError::mismatch(op, left.kind(), right.kind()))
    }
}

fn and(left: &Value, right: &Value) -> Result<Value, TypeError> {
    logical(Operator::And, left, right, |a, b| a && b)
}

fn or(left: &Value, right: &Value) -> Result<Value, TypeError> {
    logical(Operator::Or, left, right, |a, b| a || b)
}

fn equal(left: &Value, right: &Value) -> Result<Value, TypeError> {
    logical(Operator::EqualEqual, left, right, |a, b| a == b)
}

fn not_equal(left: &Value, right: &Value) -> Result<Value, TypeError> {
    logical(Operator::BangEqual, left, right, |a, b| a != b)
}

static AND: [OperandRule; 1] = [OperandRule { rhs: Kind::Bool, result: Kind::Bool, apply: and }];
static OR: [OperandRule; 1] = [OperandRule { rhs: Kind::Bool, result: Kind::Bool, apply: or }];
static EQUAL: [OperandRule; 1] = [OperandRule { rhs: Kind::Bool, result: Kind::Bool, apply: equal }];
static NOT_EQUAL: [OperandRule; 1] = [OperandRule { rhs: Kind::Bool, result: Kind::Bool, apply: not_equal }];

impl KindRules for BoolKind {
    fn name(&self) -> &'static str {
        "Bool"
    }

    fn operator_rules(&self, op: Operator) -> Option<&'static [OperandRule]> {
        match op {
            Operator::And => Some(&AND),
            Operator::Or => Some(&OR),
            Operator::EqualEqual => Some(&EQUAL),
            Operator::BangEqual => Some(&NOT_EQUAL),
            Operator::Plus
            | Operator::Dash
            | Operator::Star
            | Operator::Slash
            | Operator::Percent
            | Operator::Caret
            | Operator::Amp
            | Operator::Pipe
            | Operator::Greater
            | Operator::Less
            | Operator::GreaterEqual
            | Operator::LessEqual
            | Operator::Bang
            | Operator::Equal => None,
        }
    }

    fn has_trait(&self, _wanted: &Trait) -> bool {
        false
    }

    fn has_method(&self, _name: &str) -> bool {
        false
    }

    fn get_method(&self, name: &str) -> Result<Method, TypeError> {
        Err(TypeError::MethodNotDefined {
            kind: Kind::Bool,
            method: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_operators() {
        let and_rule = &BoolKind.operator_rules(Operator::And).unwrap()[0];
        assert_eq!(
            (and_rule.apply)(&Value::Bool(true), &Value::Bool(false)),
            Ok(Value::Bool(false))
        );

        let or_rule = &BoolKind.operator_rules(Operator::Or).unwrap()[0];
        assert_eq!(
            (or_rule.apply)(&Value::Bool(true), &Value::Bool(false)),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn test_no_ordering_or_arithmetic() {
        assert!(BoolKind.operator_rules(Operator::Less).is_none());
        assert!(BoolKind.operator_rules(Operator::Plus).is_none());
    }
}
