//! Oxyl Types
//!
//! 运算符与类型注册表：
//! - [`Kind`] - 值的类型标签，每个变体有独立的规则表 ([`KindRules`])
//! - [`Value`] - 不可变的带类型值
//! - [`Executor`] - 运算执行函数，会按右操作数类型做数值提升
//! - [`Expr`] - 按两阶段协议检查与求值的二元表达式
//!
//! # 示例
//!
//! ```rust
//! use oxyl_syntax::Operator;
//! use oxyl_types::{Kind, Value};
//!
//! // 检查阶段
//! assert!(Kind::Int.legal_operands(Operator::Plus).unwrap().contains(&Kind::Float));
//!
//! // 执行阶段
//! let add = Kind::Int.executor(Operator::Plus).unwrap();
//! assert_eq!(add.apply(&Value::Int(1), &Value::Float(2.0)), Ok(Value::Float(3.0)));
//! ```

pub mod error;
pub mod expr;
pub mod kind;
pub mod kinds;
pub mod method;
pub mod value;

pub use error::TypeError;
pub use expr::Expr;
pub use kind::{Executor, Kind, Trait};
pub use kinds::{KindRules, OperandRule};
pub use method::Method;
pub use value::Value;
