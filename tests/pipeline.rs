use panda::parser::{self, grammar};
use panda::{lex, Expected, Found, TokenKind, SYNTAX_ERROR_PREAMBLE};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_whitespace_only_input() {
    for source in ["", " ", "\t\t", "\n \r\n", "   \u{a0} "] {
        let result = lex(source);
        assert!(result.tokens.is_empty(), "{:?}", source);
        assert!(result.errors.is_empty(), "{:?}", source);
    }
}

#[test]
fn test_maximal_munch() {
    assert_eq!(kinds("=="), vec![TokenKind::Equivalence]);

    let result = lex("Truething");
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].kind, TokenKind::Identifier);
    assert_eq!(result.tokens[0].lexeme, "Truething");

    assert_eq!(kinds("True"), vec![TokenKind::Boolean]);
    assert_eq!(kinds("False || True && x"), vec![
        TokenKind::Boolean,
        TokenKind::LogicalOR,
        TokenKind::Boolean,
        TokenKind::LogicalAND,
        TokenKind::Identifier,
    ]);
}

#[test]
fn test_demo_input_json() {
    let result = lex("True == Truething");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["errors"], serde_json::json!([]));
    assert_eq!(
        json["tokens"],
        serde_json::json!([
            { "kind": "Boolean", "lexeme": "True", "startOffset": 0, "endOffset": 4, "line": 1, "column": 1 },
            { "kind": "Equivalence", "lexeme": "==", "startOffset": 5, "endOffset": 7, "line": 1, "column": 6 },
            { "kind": "Identifier", "lexeme": "Truething", "startOffset": 8, "endOffset": 17, "line": 1, "column": 9 },
        ])
    );
}

#[test]
fn test_lexical_errors_are_data() {
    let result = lex("x = 1 @ 2 ~");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(result.errors.len(), 2);
    assert_eq!(json["errors"][0]["code"], "E_LEX");
    assert_eq!(json["errors"][0]["found"], serde_json::json!({ "Char": "@" }));
    assert_eq!(result.tokens.len(), 4);
}

#[test]
fn test_precedence_and_grouping_accepted() {
    for source in [
        "x = 1 + 2 * 3",
        "x = ( 1 + 2 ) * 3",
        "x = a - b - c",
        "x = a + b - c + d",
        "result = (a * (b + c) - 4) * d",
    ] {
        assert!(panda::parse(source).is_ok(), "{}", source);
    }
}

#[test]
fn test_missing_assignment_reported() {
    let err = panda::parse("x 1").unwrap_err();
    let diag = err.diagnostic();

    assert_eq!(diag.expected, Expected::Kind(TokenKind::Assignment));
    assert!(matches!(&diag.found, Found::Token(t) if t.kind == TokenKind::Integer && t.lexeme == "1"));
    assert_eq!(diag.span.start, 2);
    assert_eq!(
        err.to_string(),
        format!(
            "{}expected `Assignment`, found `Integer` (`1`) at offset 2",
            SYNTAX_ERROR_PREAMBLE
        )
    );
}

#[test]
fn test_first_error_wins() {
    let err = panda::parse("x = * + )").unwrap_err();

    assert_eq!(err.diagnostic().span.start, 4);
    assert!(matches!(&err.diagnostic().found, Found::Token(t) if t.kind == TokenKind::Multiplication));
}

#[test]
fn test_lexical_errors_do_not_block_parse() {
    assert!(panda::parse("x = 1 $ + 2").is_ok());
}

#[test]
fn test_idempotence() {
    let source = "total = (a + 1) * b - 7";

    let first = lex(source);
    let second = lex(source);
    assert_eq!(first, second);

    assert!(parser::parse(&first.tokens).is_ok());
    assert!(parser::parse(&second.tokens).is_ok());
}

#[test]
fn test_parses_do_not_share_state() {
    let good = lex("x = a * (b + c)").tokens;
    let bad = lex("x = (a").tokens;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let tokens = if i % 2 == 0 { good.clone() } else { bad.clone() };
            std::thread::spawn(move || parser::parse(&tokens).is_ok())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), i % 2 == 0);
    }
}

#[test]
fn test_grammar_self_analysis() {
    assert!(grammar::validate().is_ok());
}

#[test]
fn test_deep_nesting_is_rejected_not_overflowed() {
    let source = format!("x = {}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = panda::parse(&source).unwrap_err();

    assert_eq!(err.diagnostic().code, "E_DEPTH");
}
