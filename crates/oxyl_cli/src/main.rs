use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oxyl_diagnostics::{Diagnostic, Emitter};
use oxyl_syntax::{tokenize, TokenStream};
use std::fs;

#[derive(Parser)]
#[command(name = "oxylc")]
#[command(about = "Oxyl 编译器前端", version)]
struct Cli {
    /// 关闭彩色输出
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 输出源文件的 token 序列
    Lex {
        /// 输入文件
        input: String,
    },

    /// 只做词法检查，报告诊断
    Check {
        /// 输入文件
        input: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let emitter = if cli.no_color {
        Emitter::without_colors()
    } else {
        Emitter::new()
    };

    let ok = match cli.command {
        Commands::Lex { input } => cmd_lex(&input, &emitter)?,
        Commands::Check { input } => cmd_check(&input, &emitter)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// 仅在设置了 RUST_LOG 时启用日志，例如 `RUST_LOG=oxyl_syntax=debug`
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_source(input: &str) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("failed to read '{}'", input))
}

/// 词法分析并输出诊断；返回 token 流（硬错误时为 None）
fn lex_and_report(source: &str, emitter: &Emitter) -> Option<TokenStream> {
    match tokenize(source) {
        Ok(stream) => {
            for diag in stream.diagnostics().diagnostics() {
                emitter.emit_with_source(diag, source);
            }
            Some(stream)
        }
        Err(err) => {
            let diag: Diagnostic = err.to_diagnostic();
            emitter.emit_with_source(&diag, source);
            None
        }
    }
}

/// 输出 token 命令
fn cmd_lex(input: &str, emitter: &Emitter) -> Result<bool> {
    let source = read_source(input)?;
    tracing::debug!(input, "lexing");

    let Some(stream) = lex_and_report(&source, emitter) else {
        return Ok(false);
    };
    print!("{}", format_tokens(&stream));

    Ok(!stream.had_error())
}

/// 检查命令
fn cmd_check(input: &str, emitter: &Emitter) -> Result<bool> {
    let source = read_source(input)?;

    match lex_and_report(&source, emitter) {
        Some(stream) if stream.diagnostics().is_empty() => {
            println!("✅ {}: {} tokens, no diagnostics", input, stream.len());
            Ok(true)
        }
        Some(stream) => {
            let diagnostics = stream.diagnostics();
            let summary = format!(
                "{}: {} error(s), {} warning(s)",
                input,
                diagnostics.error_count(),
                diagnostics.warning_count()
            );
            if stream.had_error() {
                eprintln!("❌ {}", summary);
            } else {
                println!("⚠️  {}", summary);
            }
            Ok(!stream.had_error())
        }
        None => {
            eprintln!("❌ {}: lexing aborted", input);
            Ok(false)
        }
    }
}

/// 每行一个 token：`行:列<TAB>token`
fn format_tokens(stream: &TokenStream) -> String {
    stream
        .tokens()
        .iter()
        .map(|t| format!("{}\t{}\n", t.position, t.token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens() {
        let stream = tokenize("let a = 1\nb").unwrap();
        assert_eq!(
            format_tokens(&stream),
            "1:1\tlet\n1:5\tIdentifier: a\n1:7\t=\n1:9\tInt: 1\n1:10\tNewline\n2:1\tIdentifier: b\n2:2\tEOF\n"
        );
    }

    #[test]
    fn test_lex_and_report_hard_error() {
        let emitter = Emitter::without_colors();
        assert!(lex_and_report("99999999999999999999", &emitter).is_none());
        assert!(lex_and_report("1 + 2", &emitter).is_some());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["oxylc", "--no-color", "lex", "main.ox"]).unwrap();
        assert!(cli.no_color);
        assert!(matches!(cli.command, Commands::Lex { input } if input == "main.ox"));
    }
}
