//! Oxyl Diagnostics
//!
//! 统一的诊断系统，为 Oxyl 前端（词法分析、类型检查）提供清晰的错误报告。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//! - [`Span`] / [`Position`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use oxyl_diagnostics::{Diagnostic, DiagnosticSink, Position};
//!
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(
//!     Diagnostic::error("unrecognized character '@'")
//!         .span(4..5)
//!         .at(Position::new(1, 5))
//!         .with_help("remove the character"),
//! );
//!
//! assert!(sink.has_errors());
//! assert_eq!(sink.error_count(), 1);
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::Diagnostic;
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{Position, Span, SpanExt};
