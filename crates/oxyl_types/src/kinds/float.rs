//! Float 类型规则

use super::numeric;
use super::{KindRules, OperandRule};
use crate::error::TypeError;
use crate::kind::{Kind, Trait};
use crate::method::Method;
use oxyl_syntax::Operator;

/// 64 位浮点数
pub struct FloatKind;

// 右操作数无论是 Float 还是 Int，结果都是 Float
static ADD: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Float, apply: numeric::add },
    OperandRule { rhs: Kind::Int, result: Kind::Float, apply: numeric::add },
];

static SUB: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Float, apply: numeric::sub },
    OperandRule { rhs: Kind::Int, result: Kind::Float, apply: numeric::sub },
];

static MUL: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Float, apply: numeric::mul },
    OperandRule { rhs: Kind::Int, result: Kind::Float, apply: numeric::mul },
];

static DIV: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Float, apply: numeric::div },
    OperandRule { rhs: Kind::Int, result: Kind::Float, apply: numeric::div },
];

static REM: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Float, apply: numeric::rem },
    OperandRule { rhs: Kind::Int, result: Kind::Float, apply: numeric::rem },
];

static LESS: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::less },
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::less },
];

static LESS_EQUAL: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::less_equal },
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::less_equal },
];

static GREATER: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::greater },
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::greater },
];

static GREATER_EQUAL: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::greater_equal },
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::greater_equal },
];

static EQUAL: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::equal },
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::equal },
];

static NOT_EQUAL: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::not_equal },
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::not_equal },
];

impl KindRules for FloatKind {
    fn name(&self) -> &'static str {
        "Float"
    }

    fn operator_rules(&self, op: Operator) -> Option<&'static [OperandRule]> {
        match op {
            Operator::Plus => Some(&ADD),
            Operator::Dash => Some(&SUB),
            Operator::Star => Some(&MUL),
            Operator::Slash => Some(&DIV),
            Operator::Percent => Some(&REM),
            Operator::Less => Some(&LESS),
            Operator::LessEqual => Some(&LESS_EQUAL),
            Operator::Greater => Some(&GREATER),
            Operator::GreaterEqual => Some(&GREATER_EQUAL),
            Operator::EqualEqual => Some(&EQUAL),
            Operator::BangEqual => Some(&NOT_EQUAL),
            Operator::Amp
            | Operator::Pipe
            | Operator::Caret
            | Operator::And
            | Operator::Or
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
            kind: Kind::Float,
            method: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_dominates() {
        for op in [Operator::Plus, Operator::Dash, Operator::Star, Operator::Slash] {
            let rules = FloatKind.operator_rules(op).unwrap();
            assert!(rules.iter().all(|r| r.result == Kind::Float), "{op}");
        }
    }

    #[test]
    fn test_no_bitwise() {
        assert!(FloatKind.operator_rules(Operator::Amp).is_none());
        assert!(FloatKind.operator_rules(Operator::Caret).is_none());
    }
}
