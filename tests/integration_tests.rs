//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text goes through the
//! lexer and parser, and the resulting program and errors are checked the way
//! a downstream evaluator or REPL would consume them.

use std::thread;

use frontend::{
    ast::ast::{Expr, Stmt},
    errors::errors::ErrorImpl,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse, render_error,
};

#[test]
fn test_parse_simple_program() {
    let source = "let x = 42;\nlet y = x * 2;\nreturn x + y;".to_string();
    let (program, errors) = parse(source, Some("test.mk".to_string()));

    assert!(errors.is_empty(), "errors: {:?}", errors.messages());
    assert_eq!(program.len(), 3);
    assert_eq!(program.token_literal(), "let");
    assert_eq!(
        program.to_string(),
        "let x = 42;let y = (x * 2);return (x + y);"
    );
}

#[test]
fn test_parse_conditional_program() {
    let source = r#"
        let max = if (a > b) { a } else { b };
        if (!(max == 0)) {
            return -max;
        }
    "#
    .to_string();

    let (program, errors) = parse(source, None);
    assert!(errors.is_empty(), "errors: {:?}", errors.messages());
    assert_eq!(program.len(), 2);

    let Stmt::Let(let_stmt) = &program.statements[0] else {
        panic!("expected a let statement");
    };
    assert_eq!(let_stmt.name.value, "max");
    let Expr::If(if_expr) = &let_stmt.value else {
        panic!("expected an if expression as the let value");
    };
    assert_eq!(if_expr.condition.to_string(), "(a > b)");
    assert!(if_expr.alternative.is_some());

    assert_eq!(program.statements[1].to_string(), "if(!(max == 0)) return (-max);");
}

#[test]
fn test_tokens_and_parse_agree_on_positions() {
    let source = "let answer = 40 + 2;".to_string();
    let tokens = tokenize(source.clone(), Some("main.mk".to_string()));

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );

    let (program, _) = parse(source, Some("main.mk".to_string()));
    let Stmt::Let(let_stmt) = &program.statements[0] else {
        panic!("expected a let statement");
    };
    assert_eq!(let_stmt.name.token.span.start.0, tokens[1].span.start.0);
    assert_eq!(let_stmt.name.token.span.start.1.as_str(), "main.mk");
}

#[test]
fn test_errors_are_reported_in_order() {
    let source = "let = 1;\nlet y 2;\n@\n(3".to_string();
    let (_, errors) = parse(source, None);

    let kinds: Vec<ErrorImpl> = errors.iter().map(|e| e.get_kind().clone()).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: TokenKind::Assignment,
            },
            ErrorImpl::NoPrefixParseFn {
                kind: TokenKind::Assignment,
            },
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Assignment,
                found: TokenKind::Number,
            },
            ErrorImpl::NoPrefixParseFn {
                kind: TokenKind::Illegal,
            },
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseParen,
                found: TokenKind::EOF,
            },
        ]
    );

    let positions: Vec<u32> = errors.iter().map(|e| e.get_position().0).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert!(errors.iter().all(|e| e.get_position().1.as_str() == "shell"));
}

#[test]
fn test_render_errors_for_a_repl() {
    let source = "let x = 5;\nlet = 10;";
    let (program, errors) = parse(source.to_string(), None);

    assert_eq!(program.len(), 2);
    let rendered: Vec<String> = errors.iter().map(|e| render_error(e, source)).collect();

    assert_eq!(rendered.len(), 2);
    assert!(rendered[0].starts_with("Error: UnexpectedToken"));
    assert!(rendered[0].contains("-> shell"));
    assert!(rendered[0].contains("2 | let = 10;"));
    assert!(rendered[1].starts_with("Error: NoPrefixParseFn"));
}

#[test]
fn test_independent_parses_on_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let source = format!("let vx = {} * (1 + {});", i, i);
                let (program, errors) = parse(source, None);
                assert!(errors.is_empty());
                program.to_string()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let rendered = handle.join().expect("parser thread panicked");
        assert_eq!(rendered, format!("let vx = ({} * (1 + {}));", i, i));
    }
}
