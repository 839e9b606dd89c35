//! Diagnostic - 诊断信息
//!
//! 一条诊断可以同时带字节范围（用于渲染源码片段）和行列号（用于纯文本输出）。

use crate::level::DiagnosticLevel;
use crate::span::{Position, Span};

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 字节范围（可选）
    pub span: Option<Span>,
    /// 行列位置（可选）
    pub position: Option<Position>,
    /// 补充注释
    pub notes: Vec<String>,
    /// 修复建议
    pub help: Option<String>,
}

impl Diagnostic {
    /// 创建新的诊断
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            position: None,
            notes: Vec::new(),
            help: None,
        }
    }

    /// 创建错误诊断
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    /// 创建警告诊断
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    /// 设置字节范围
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// 设置行列位置
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// 添加注释
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// 设置修复建议（后设置的覆盖先设置的）
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
