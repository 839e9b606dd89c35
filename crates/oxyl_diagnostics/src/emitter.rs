//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出到 stderr。有源码时通过 ariadne 渲染源码片段。

use crate::diagnostic::Diagnostic;
use crate::span::SpanExt;
use ariadne::{Config, Label, Report, Source};
use colored::*;

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建彩色输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器（`--no-color`）
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出单个诊断
    pub fn emit(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }

    /// 带源码片段输出；诊断没有 span 时退回普通输出
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        let Some(span) = &diagnostic.span else {
            self.emit(diagnostic);
            return;
        };

        let range = span.to_char_range(source);
        let (kind, color) = diagnostic.level.report_style();

        let mut report = Report::build(kind, (), range.start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(
                Label::new(range)
                    .with_message(&diagnostic.message)
                    .with_color(color),
            );

        if !diagnostic.notes.is_empty() {
            report = report.with_note(diagnostic.notes.join("\n"));
        }
        if let Some(help) = &diagnostic.help {
            report = report.with_help(help);
        }

        if report.finish().eprint(Source::from(source)).is_err() {
            self.emit(diagnostic);
        }
    }

    /// 格式化单个诊断
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        if self.use_colors {
            render_colored(diagnostic)
        } else {
            render_plain(diagnostic)
        }
    }
}

/// 优先显示行列号，没有时显示字节范围
fn location(diagnostic: &Diagnostic) -> Option<String> {
    match (&diagnostic.position, &diagnostic.span) {
        (Some(position), _) => Some(position.to_string()),
        (None, Some(span)) => Some(format!("{:?}", span)),
        (None, None) => None,
    }
}

fn render_colored(diagnostic: &Diagnostic) -> String {
    let mut out = format!(
        "{}: {}\n",
        diagnostic.level.colored_name(),
        diagnostic.message.bold()
    );

    if let Some(location) = location(diagnostic) {
        out.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));
    }
    for note in &diagnostic.notes {
        let note = format!("note: {}", note);
        out.push_str(&format!("  {} {}\n", "=".blue().bold(), note.bright_black()));
    }
    if let Some(help) = &diagnostic.help {
        let help = format!("help: {}", help);
        out.push_str(&format!("  {} {}\n", "=".green().bold(), help.green()));
    }

    out
}

fn render_plain(diagnostic: &Diagnostic) -> String {
    let mut out = format!("{}: {}\n", diagnostic.level, diagnostic.message);

    if let Some(location) = location(diagnostic) {
        out.push_str(&format!("  --> {}\n", location));
    }
    for note in &diagnostic.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    if let Some(help) = &diagnostic.help {
        out.push_str(&format!("  = help: {}\n", help));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_emitter_creation() {
        assert!(Emitter::new().use_colors);
        assert!(!Emitter::without_colors().use_colors);
    }

    #[test]
    fn test_render_plain_with_position() {
        let emitter = Emitter::without_colors();
        let diag = Diagnostic::error("unrecognized character '@'")
            .span(4..5)
            .at(Position::new(1, 5))
            .with_note("scanning continued")
            .with_help("remove it");

        assert_eq!(
            emitter.render(&diag),
            "error: unrecognized character '@'\n  --> 1:5\n  = note: scanning continued\n  = help: remove it\n"
        );
    }

    #[test]
    fn test_render_plain_falls_back_to_span() {
        let emitter = Emitter::without_colors();
        let diag = Diagnostic::warning("carriage return without line feed").span(10..11);
        assert_eq!(
            emitter.render(&diag),
            "warning: carriage return without line feed\n  --> 10..11\n"
        );
    }

    #[test]
    fn test_render_colored_keeps_message() {
        let text = Emitter::new().render(&Diagnostic::error("bad").with_help("fix it"));
        assert!(text.contains("bad"));
        assert!(text.contains("help: fix it"));
    }

    #[test]
    fn test_emit_with_source_does_not_panic() {
        let emitter = Emitter::without_colors();
        let diag = Diagnostic::error("bad").span(2..3).with_note("a note");
        emitter.emit_with_source(&diag, "1 @ 2");
        emitter.emit_with_source(&Diagnostic::warning("no span"), "");
    }
}
