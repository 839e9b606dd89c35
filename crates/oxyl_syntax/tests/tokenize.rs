use oxyl_syntax::{tokenize, Operator, Token, Tokenizer};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[test]
fn test_function_with_let() {
    let stream = tokenize("fun main() { let a = 1 }").unwrap();

    assert_eq!(
        stream.to_tokens(),
        vec![
            Token::Fun,
            ident("main"),
            Token::LeftParen,
            Token::RightParen,
            Token::LeftBrace,
            Token::Let,
            ident("a"),
            Token::Operator(Operator::Equal),
            Token::Int(1),
            Token::RightBrace,
            Token::Eof,
        ]
    );
    assert!(!stream.had_error());
}

#[test]
fn test_multiline_program() {
    let source = "fun main() {\n\tlet a = 1\n\tlet b = 2.5\n\tlet c = a + b\n}\n";
    let stream = tokenize(source).unwrap();
    let tokens = stream.to_tokens();

    assert_eq!(tokens.iter().filter(|t| **t == Token::Newline).count(), 5);
    assert_eq!(tokens.iter().filter(|t| **t == Token::Let).count(), 3);
    assert!(tokens.contains(&Token::Float(2.5)));
    assert!(tokens.contains(&Token::Operator(Operator::Plus)));
    assert_eq!(tokens.last(), Some(&Token::Eof));

    let closing = stream
        .tokens()
        .iter()
        .find(|t| t.token == Token::RightBrace)
        .unwrap();
    assert_eq!(closing.position.line, 5);
    assert_eq!(closing.position.column, 1);
}

#[test]
fn test_expression_operators() {
    let stream = tokenize("a >= 1 && b != 2.0 || !c").unwrap();

    let ops: Vec<Operator> = stream
        .tokens()
        .iter()
        .filter_map(|t| t.token.as_operator())
        .collect();
    assert_eq!(
        ops,
        vec![
            Operator::GreaterEqual,
            Operator::And,
            Operator::BangEqual,
            Operator::Or,
            Operator::Bang,
        ]
    );
}

#[test]
fn test_rendering_for_snapshots() {
    let stream = tokenize("let x = 1.5\n").unwrap();
    let rendered: Vec<String> = stream.to_tokens().iter().map(|t| t.to_string()).collect();

    assert_eq!(
        rendered,
        vec!["let", "Identifier: x", "=", "Float: 1.5", "Newline", "EOF"]
    );
}

#[test]
fn test_diagnostics_report_positions() {
    let stream = tokenize("let a = 1\nlet b = $\n").unwrap();

    assert!(stream.had_error());
    let diag = &stream.diagnostics().diagnostics()[0];
    assert_eq!(diag.position.map(|p| (p.line, p.column)), Some((2, 9)));
    assert!(stream.to_tokens().contains(&Token::Unknown('$')));
}

proptest! {
    #[test]
    fn whitespace_only_yields_eof(source in "[ \t]{0,32}") {
        let stream = tokenize(&source).unwrap();
        prop_assert_eq!(stream.to_tokens(), vec![Token::Eof]);
    }

    #[test]
    fn tokenizing_is_idempotent(source in "[a-zA-Z0-9 \t\n(){}.,=!<>&|+*/@é-]{0,48}") {
        let first = Tokenizer::new(&source).tokenize();
        let second = Tokenizer::new(&source).tokenize();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn stream_ends_with_single_eof(source in "[a-z0-9 \n(){}=+.#]{0,48}") {
        if let Ok(stream) = tokenize(&source) {
            let eofs = stream.tokens().iter().filter(|t| t.token.is_eof()).count();
            prop_assert_eq!(eofs, 1);
            prop_assert!(stream.tokens().last().unwrap().token.is_eof());
        }
    }
}
