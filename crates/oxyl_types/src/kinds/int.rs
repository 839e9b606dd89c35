//! Int 类型规则

use super::numeric;
use super::{KindRules, OperandRule};
use crate::error::TypeError;
use crate::kind::{Kind, Trait};
use crate::method::Method;
use oxyl_syntax::Operator;

/// 64 位有符号整数
pub struct IntKind;

static ADD: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Int, apply: numeric::add },
    OperandRule { rhs: Kind::Float, result: Kind::Float, apply: numeric::add },
];

static SUB: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Int, apply: numeric::sub },
    OperandRule { rhs: Kind::Float, result: Kind::Float, apply: numeric::sub },
];

static MUL: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Int, apply: numeric::mul },
    OperandRule { rhs: Kind::Float, result: Kind::Float, apply: numeric::mul },
];

static DIV: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Int, apply: numeric::div },
    OperandRule { rhs: Kind::Float, result: Kind::Float, apply: numeric::div },
];

static REM: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Int, apply: numeric::rem },
    OperandRule { rhs: Kind::Float, result: Kind::Float, apply: numeric::rem },
];

static BIT_AND: [OperandRule; 1] = [
    OperandRule { rhs: Kind::Int, result: Kind::Int, apply: numeric::bit_and },
];

static BIT_OR: [OperandRule; 1] = [
    OperandRule { rhs: Kind::Int, result: Kind::Int, apply: numeric::bit_or },
];

static BIT_XOR: [OperandRule; 1] = [
    OperandRule { rhs: Kind::Int, result: Kind::Int, apply: numeric::bit_xor },
];

static LESS: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::less },
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::less },
];

static LESS_EQUAL: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::less_equal },
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::less_equal },
];

static GREATER: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::greater },
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::greater },
];

static GREATER_EQUAL: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::greater_equal },
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::greater_equal },
];

static EQUAL: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::equal },
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::equal },
];

static NOT_EQUAL: [OperandRule; 2] = [
    OperandRule { rhs: Kind::Int, result: Kind::Bool, apply: numeric::not_equal },
    OperandRule { rhs: Kind::Float, result: Kind::Bool, apply: numeric::not_equal },
];

impl KindRules for IntKind {
    fn name(&self) -> &'static str {
        "Int"
    }

    fn operator_rules(&self, op: Operator) -> Option<&'static [OperandRule]> {
        match op {
            Operator::Plus => Some(&ADD),
            Operator::Dash => Some(&SUB),
            Operator::Star => Some(&MUL),
            Operator::Slash => Some(&DIV),
            Operator::Percent => Some(&REM),
            Operator::Amp => Some(&BIT_AND),
            Operator::Pipe => Some(&BIT_OR),
            Operator::Caret => Some(&BIT_XOR),
            Operator::Less => Some(&LESS),
            Operator::LessEqual => Some(&LESS_EQUAL),
            Operator::Greater => Some(&GREATER),
            Operator::GreaterEqual => Some(&GREATER_EQUAL),
            Operator::EqualEqual => Some(&EQUAL),
            Operator::BangEqual => Some(&NOT_EQUAL),
            Operator::And | Operator::Or | Operator::Bang | Operator::Equal => None,
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
            kind: Kind::Int,
            method: name.to_string(),
        })
    }
}
