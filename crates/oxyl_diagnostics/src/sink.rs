//! DiagnosticSink - 诊断收集器
//!
//! 每次分析（例如一次词法分析）拥有自己的收集器，不存在全局状态。

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;

/// 诊断收集器
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagnosticSink {
    /// 按产生顺序排列的诊断
    diagnostics: Vec<Diagnostic>,
    /// 是否出现过错误级别的诊断
    has_errors: bool,
}

impl DiagnosticSink {
    /// 创建空的收集器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加诊断
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.has_errors |= diagnostic.level.is_error();
        self.diagnostics.push(diagnostic);
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// 获取所有诊断
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 获取错误数量
    pub fn error_count(&self) -> usize {
        self.count(DiagnosticLevel::Error)
    }

    /// 获取警告数量
    pub fn warning_count(&self) -> usize {
        self.count(DiagnosticLevel::Warning)
    }

    fn count(&self, level: DiagnosticLevel) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
