//! 各类型的规则表
//!
//! 每个类型独立实现 [`KindRules`]，没有默认实现：新增类型时必须逐条写出自己的规则，
//! 避免运算符从一个类型“漏”到另一个类型。

mod boolean;
mod float;
mod int;
mod none;
mod numeric;

pub use boolean::BoolKind;
pub use float::FloatKind;
pub use int::IntKind;
pub use none::NoneKind;

use crate::error::TypeError;
use crate::kind::{Kind, Trait};
use crate::method::Method;
use crate::value::Value;
use oxyl_syntax::Operator;
use std::fmt;

/// 运算执行函数：输入两个操作数，产生新值
pub type ApplyFn = fn(&Value, &Value) -> Result<Value, TypeError>;

/// 规则表中的一行：右操作数类型、结果类型与执行函数
#[derive(Clone, Copy)]
pub struct OperandRule {
    pub rhs: Kind,
    pub result: Kind,
    pub apply: ApplyFn,
}

impl fmt::Debug for OperandRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperandRule")
            .field("rhs", &self.rhs)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

/// 单个类型的能力集合
///
/// 实现必须是无状态的，可在线程间共享。
pub trait KindRules: Send + Sync {
    /// 类型名
    fn name(&self) -> &'static str;

    /// `op` 的规则表；`None` 表示该运算符对此类型未定义
    fn operator_rules(&self, op: Operator) -> Option<&'static [OperandRule]>;

    fn has_trait(&self, wanted: &Trait) -> bool;

    fn has_method(&self, name: &str) -> bool;

    fn get_method(&self, name: &str) -> Result<Method, TypeError>;
}
