//! None 类型规则：没有任何运算符

use super::{KindRules, OperandRule};
use crate::error::TypeError;
use crate::kind::{Kind, Trait};
use crate::method::Method;
use oxyl_syntax::Operator;

/// 空值
pub struct NoneKind;

impl KindRules for NoneKind {
    fn name(&self) -> &'static str {
        "None"
    }

    fn operator_rules(&self, _op: Operator) -> Option<&'static [OperandRule]> {
        None
    }

    fn has_trait(&self, _wanted: &Trait) -> bool {
        false
    }

    fn has_method(&self, _name: &str) -> bool {
        false
    }

    fn get_method(&self, name: &str) -> Result<Method, TypeError> {
        Err(TypeError::MethodNotDefined {
            kind: Kind::None,
            method: name.to_string(),
        })
    }
}
