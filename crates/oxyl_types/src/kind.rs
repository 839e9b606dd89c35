//! 值的类型 (Kind)
//!
//! `Kind` 是封闭枚举，每个变体的规则由 [`KindRules`] 的独立实现给出（见 `kinds` 模块）。
//! 运算符合法性和执行函数来自同一张规则表，两阶段协议因此不会失配：
//!
//! 1. 检查阶段：[`Kind::legal_operands`] / [`Kind::check_operands`]
//! 2. 执行阶段：[`Kind::executor`]，仅在检查通过后调用

use crate::error::TypeError;
use crate::kinds::{BoolKind, FloatKind, IntKind, KindRules, NoneKind, OperandRule};
use crate::method::Method;
use crate::value::Value;
use oxyl_syntax::Operator;
use std::fmt;
use tracing::trace;

/// 值的类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Int,
    Float,
    Bool,
    None,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Int, Kind::Float, Kind::Bool, Kind::None];

    /// 该类型的规则表（无状态单例）
    pub fn rules(self) -> &'static dyn KindRules {
        match self {
            Kind::Int => &IntKind,
            Kind::Float => &FloatKind,
            Kind::Bool => &BoolKind,
            Kind::None => &NoneKind,
        }
    }

    pub fn name(self) -> &'static str {
        self.rules().name()
    }

    /// 按名称查找类型
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// `self` 作为左操作数时，`op` 允许的右操作数类型
    ///
    /// # Errors
    ///
    /// `op` 对该类型没有任何规则时返回 [`TypeError::OperatorNotDefined`]。
    pub fn legal_operands(self, op: Operator) -> Result<Vec<Kind>, TypeError> {
        Ok(self.operand_rules(op)?.iter().map(|r| r.rhs).collect())
    }

    /// 检查阶段：`self op rhs` 是否合法，合法时返回结果类型
    pub fn check_operands(self, op: Operator, rhs: Kind) -> Result<Kind, TypeError> {
        let rules = self.operand_rules(op)?;
        match rules.iter().find(|r| r.rhs == rhs) {
            Some(rule) => Ok(rule.result),
            None => {
                trace!(%op, left = %self, right = %rhs, "operand kinds rejected");
                Err(TypeError::mismatch(op, self, rhs))
            }
        }
    }

    /// 执行阶段：获取 `self` 作为左操作数时 `op` 的执行函数
    pub fn executor(self, op: Operator) -> Result<Executor, TypeError> {
        Ok(Executor {
            op,
            lhs: self,
            rules: self.operand_rules(op)?,
        })
    }

    pub fn has_trait(self, wanted: &Trait) -> bool {
        self.rules().has_trait(wanted)
    }

    pub fn has_method(self, name: &str) -> bool {
        self.rules().has_method(name)
    }

    pub fn get_method(self, name: &str) -> Result<Method, TypeError> {
        self.rules().get_method(name)
    }

    fn operand_rules(self, op: Operator) -> Result<&'static [OperandRule], TypeError> {
        self.rules()
            .operator_rules(op)
            .ok_or(TypeError::OperatorNotDefined { op, kind: self })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 运算符执行函数
///
/// 执行前会根据右操作数的实际类型重新查表，不依赖调用方已做过检查。
#[derive(Clone, Copy)]
pub struct Executor {
    op: Operator,
    lhs: Kind,
    rules: &'static [OperandRule],
}

impl Executor {
    pub fn operator(&self) -> Operator {
        self.op
    }

    /// 计算 `left op right`，总是产生新值
    pub fn apply(&self, left: &Value, right: &Value) -> Result<Value, TypeError> {
        let mismatch = || TypeError::mismatch(self.op, left.kind(), right.kind());

        if left.kind() != self.lhs {
            return Err(mismatch());
        }
        let rule = self
            .rules
            .iter()
            .find(|r| r.rhs == right.kind())
            .ok_or_else(mismatch)?;

        (rule.apply)(left, right)
    }
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("op", &self.op)
            .field("lhs", &self.lhs)
            .field("rules", &self.rules)
            .finish()
    }
}

/// Trait 名称，用于“是否实现某 trait”的查询
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trait {
    name: String,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
