//! Oxyl 词法分析器
//!
//! logos 负责最长匹配：`&&` 优先于 `&`，`let ` / `fun ` 连同其后的空白一起匹配，
//! 因此 `lettuce` 仍是标识符。`Tokenizer` 在此之上维护行列号、收集诊断并补上 EOF。

use crate::error::{LexError, ScanError};
use crate::operator::Operator;
use crate::token::{SpannedToken, Token};
use logos::Logos;
use oxyl_diagnostics::{Diagnostic, DiagnosticSink, Position, Span};
use tracing::{debug, trace};

/// logos 产出的原始 token
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = ScanError)]
#[logos(skip r"[ \t]+")]
enum RawToken {
    #[token("\n")]
    LineFeed,
    #[token("\r")]
    CarriageReturn,

    #[token("(", |_| '(')]
    #[token(")", |_| ')')]
    #[token("{", |_| '{')]
    #[token("}", |_| '}')]
    #[token("[", |_| '[')]
    #[token("]", |_| ']')]
    #[token(",", |_| ',')]
    #[token(".", |_| '.')]
    #[token(":", |_| ':')]
    #[token("\"", |_| '"')]
    #[token("'", |_| '\'')]
    Punct(char),

    #[token("&&", |_| Operator::And)]
    #[token("||", |_| Operator::Or)]
    #[token("==", |_| Operator::EqualEqual)]
    #[token("!=", |_| Operator::BangEqual)]
    #[token("<=", |_| Operator::LessEqual)]
    #[token(">=", |_| Operator::GreaterEqual)]
    #[token("&", |_| Operator::Amp)]
    #[token("|", |_| Operator::Pipe)]
    #[token("=", |_| Operator::Equal)]
    #[token("!", |_| Operator::Bang)]
    #[token("<", |_| Operator::Less)]
    #[token(">", |_| Operator::Greater)]
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Dash)]
    #[token("*", |_| Operator::Star)]
    #[token("/", |_| Operator::Slash)]
    #[token("%", |_| Operator::Percent)]
    #[token("^", |_| Operator::Caret)]
    Op(Operator),

    // 关键字必须带上后面的空白，否则会吞掉更长标识符的前缀
    #[regex("let[ \t]")]
    Let,
    #[regex("fun[ \t]")]
    Fun,

    #[regex("[a-zA-Z]+")]
    Ident,

    #[regex("[0-9]+", |lex| lex.slice().parse::<i64>().map_err(ScanError::Integer))]
    Int(i64),

    // `1.` 也是合法的浮点数
    #[regex(r"[0-9]+\.[0-9]*", |lex| lex.slice().parse::<f64>().map_err(ScanError::Float))]
    Float(f64),
}

/// 关键字 token 的 span 不包含其后的分隔符
const KEYWORD_LEN: usize = 3;

fn convert(raw: RawToken, slice: &str) -> Token {
    match raw {
        RawToken::LineFeed | RawToken::CarriageReturn => Token::Newline,
        RawToken::Punct(c) => Token::from_punctuation(c).unwrap_or(Token::Unknown(c)),
        RawToken::Op(op) => Token::Operator(op),
        RawToken::Let => Token::Let,
        RawToken::Fun => Token::Fun,
        RawToken::Ident => Token::Identifier(slice.to_string()),
        RawToken::Int(n) => Token::Int(n),
        RawToken::Float(x) => Token::Float(x),
    }
}

/// 一次词法分析的结果：完整的 token 序列（以唯一的 EOF 结尾）以及诊断
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<SpannedToken>,
    diagnostics: DiagnosticSink,
}

impl TokenStream {
    pub fn tokens(&self) -> &[SpannedToken] {
        &self.tokens
    }

    /// 去掉位置信息的 token 序列
    pub fn to_tokens(&self) -> Vec<Token> {
        self.tokens.iter().map(|t| t.token.clone()).collect()
    }

    pub fn diagnostics(&self) -> &DiagnosticSink {
        &self.diagnostics
    }

    /// 是否遇到过无法识别的字符
    pub fn had_error(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// 总是 false：序列至少包含 EOF
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// 词法分析器
///
/// 扫描状态（行号、行首偏移、诊断）属于单个实例，`tokenize` 消费实例，
/// 因此每份输入都需要一个新的 `Tokenizer`。
pub struct Tokenizer<'src> {
    source: &'src str,
    /// 当前行号，从 1 开始
    line: usize,
    /// 当前行首的字节偏移
    line_start: usize,
    sink: DiagnosticSink,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            line: 1,
            line_start: 0,
            sink: DiagnosticSink::new(),
        }
    }

    /// 执行词法分析
    ///
    /// # Errors
    ///
    /// 仅当数字字面量无法表示（例如溢出 `i64`）时返回 [`LexError`]。
    pub fn tokenize(mut self) -> Result<TokenStream, LexError> {
        debug!(bytes = self.source.len(), "tokenize start");

        let mut tokens = Vec::new();
        let mut lexer = RawToken::lexer(self.source);

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            let position = self.position_of(span.start);

            let token = match result {
                Ok(RawToken::LineFeed) => {
                    self.line += 1;
                    self.line_start = span.end;
                    Token::Newline
                }
                Ok(RawToken::CarriageReturn) => {
                    if self.source.as_bytes().get(span.end) != Some(&b'\n') {
                        self.lone_carriage_return(span.clone(), position);
                    }
                    Token::Newline
                }
                Ok(raw) => convert(raw, lexer.slice()),
                Err(ScanError::Unrecognized) => {
                    // 错误 token 必须覆盖完整的 UTF-8 字符
                    let mut end = span.end;
                    while !self.source.is_char_boundary(end) {
                        end += 1;
                    }
                    if end > span.end {
                        lexer.bump(end - span.end);
                    }
                    self.unknown(span.start..end, position)
                }
                Err(ScanError::Integer(source)) => {
                    return Err(LexError::InvalidInteger {
                        literal: lexer.slice().to_string(),
                        span,
                        position,
                        source,
                    });
                }
                Err(ScanError::Float(source)) => {
                    return Err(LexError::InvalidFloat {
                        literal: lexer.slice().to_string(),
                        span,
                        position,
                        source,
                    });
                }
            };

            let span = match token {
                Token::Let | Token::Fun => span.start..span.start + KEYWORD_LEN,
                _ => lexer.span(),
            };
            tokens.push(SpannedToken::new(token, span, position));
        }

        let end = self.source.len();
        tokens.push(SpannedToken::new(Token::Eof, end..end, self.position_of(end)));

        debug!(
            tokens = tokens.len(),
            diagnostics = self.sink.len(),
            lines = self.line,
            "tokenize finished"
        );

        Ok(TokenStream {
            tokens,
            diagnostics: self.sink,
        })
    }

    /// 字节偏移对应的行列号，列按字符计数
    fn position_of(&self, offset: usize) -> Position {
        let column = self
            .source
            .get(self.line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        Position::new(self.line, column + 1)
    }

    /// 单独的 `\r` 只产生换行 token，行号不前进
    fn lone_carriage_return(&mut self, span: Span, position: Position) {
        self.sink.add(
            Diagnostic::warning("carriage return without line feed")
                .span(span)
                .at(position)
                .with_note("line numbers only advance on '\\n'"),
        );
    }

    fn unknown(&mut self, span: Span, position: Position) -> Token {
        let c = self
            .source
            .get(span.start..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);

        trace!(character = ?c, %position, "unrecognized character");

        self.sink.add(
            Diagnostic::error(format!("unrecognized character '{}'", c.escape_debug()))
                .span(span)
                .at(position),
        );
        Token::Unknown(c)
    }
}

/// 对一段源码做词法分析
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    Tokenizer::new(source).tokenize()
}
