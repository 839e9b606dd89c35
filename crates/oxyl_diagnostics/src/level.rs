//! DiagnosticLevel - 诊断级别
//!
//! 词法分析只产生两种级别：无法识别的字符是错误，单独的 `\r` 是警告。

use ariadne::{Color, ReportKind};
use colored::*;
use std::fmt;

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// 错误：输入中存在无法识别的内容，`had_error` 为真
    Error,
    /// 警告：不影响 token 序列，但行号可能与编辑器不一致
    Warning,
}

impl DiagnosticLevel {
    /// 获取级别名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// 获取带颜色的级别名称
    pub fn colored_name(&self) -> ColoredString {
        match self {
            Self::Error => self.name().red().bold(),
            Self::Warning => self.name().yellow().bold(),
        }
    }

    /// 对应的 ariadne 报告类型与标签颜色
    pub(crate) fn report_style(&self) -> (ReportKind<'static>, Color) {
        match self {
            Self::Error => (ReportKind::Error, Color::Red),
            Self::Warning => (ReportKind::Warning, Color::Yellow),
        }
    }

    /// 是否为错误
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
