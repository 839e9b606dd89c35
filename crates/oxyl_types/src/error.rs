//! Type Errors
//!
//! 运算符与方法解析的错误。全部是可恢复的结构化错误，由调用方（求值器）决定如何处理。

use crate::kind::Kind;
use oxyl_diagnostics::Diagnostic;
use oxyl_syntax::Operator;
use thiserror::Error;

/// 类型错误
///
/// 运算符解析只产生 `OperatorNotDefined` 与 `TypeMismatch`。`DivisionByZero` 是额外的一类，
/// 只在执行阶段由整数 `/`、`%` 产生，用来代替进程中止。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// 运算符对左操作数的类型完全没有定义
    #[error("operator '{op}' is not defined for type {kind}")]
    OperatorNotDefined { op: Operator, kind: Kind },

    /// 运算符有定义，但右操作数的类型不合法
    #[error("operator '{op}' cannot be applied to types {left} and {right}")]
    TypeMismatch {
        op: Operator,
        left: Kind,
        right: Kind,
    },

    /// 按名称查找方法失败
    #[error("method '{method}' is not defined for type {kind}")]
    MethodNotDefined { kind: Kind, method: String },

    /// 整数除零（浮点除零遵循 IEEE 语义，不报错）
    #[error("division by zero in {kind} '{op}'")]
    DivisionByZero { op: Operator, kind: Kind },
}

impl TypeError {
    pub fn mismatch(op: Operator, left: Kind, right: Kind) -> Self {
        Self::TypeMismatch { op, left, right }
    }

    /// 转换为统一诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());
        match self {
            Self::OperatorNotDefined { op, .. } if !op.is_binary() => {
                diag.with_note(format!("'{}' is not a binary operator for any type", op))
            }
            Self::OperatorNotDefined { op, kind } => {
                let legal: Vec<&str> = Kind::ALL
                    .into_iter()
                    .filter(|k| k.legal_operands(*op).is_ok())
                    .map(|k| k.name())
                    .collect();
                diag.with_note(format!(
                    "'{}' is defined for {}, not {}",
                    op,
                    legal.join(", "),
                    kind
                ))
            }
            Self::TypeMismatch { op, left, .. } => match left.legal_operands(*op) {
                Ok(kinds) => {
                    let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
                    diag.with_note(format!(
                        "{} '{}' accepts a right operand of type {}",
                        left,
                        op,
                        names.join(" or ")
                    ))
                }
                Err(_) => diag.with_note(format!("'{}' is not defined for {}", op, left)),
            },
            Self::MethodNotDefined { .. } => diag,
            Self::DivisionByZero { .. } => diag.with_help("check the divisor before dividing"),
        }
    }
}
