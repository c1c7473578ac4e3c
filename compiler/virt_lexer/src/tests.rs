#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn values(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.value)
        .collect()
}

#[test]
fn lex_var_declaration() {
    assert_eq!(
        kinds("let x = 42"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] , . :"),
        vec![
            TokenKind::OParen,
            TokenKind::CParen,
            TokenKind::OBrace,
            TokenKind::CBrace,
            TokenKind::OBracket,
            TokenKind::CBracket,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Colon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comparison_operators_are_greedy() {
    let tokens = tokenize("a <= b => c == d != e < f > g").unwrap();
    let ops: Vec<&str> = tokens
        .iter()
        .filter(|t| t.is(TokenKind::ComparisonOperator))
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(ops, vec!["<=", "=>", "==", "!=", "<", ">"]);
}

#[test]
fn greater_equal_is_not_a_single_token() {
    assert_eq!(
        kinds(">="),
        vec![
            TokenKind::ComparisonOperator,
            TokenKind::Equals,
            TokenKind::Eof
        ]
    );
}

#[test]
fn binary_operators() {
    assert_eq!(values("1+2-3*4/5%6"), vec![
        "1", "+", "2", "-", "3", "*", "4", "/", "5", "%", "6", "EOF"
    ]);
}

#[test]
fn line_comment_keeps_text() {
    let tokens = tokenize("x --> the rest\ny").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Comment);
    assert_eq!(tokens[1].value, " the rest");
    assert_eq!(tokens[2].value, "y");
    assert_eq!(tokens[2].line, 2);
}

#[test]
fn block_comment_spans_lines() {
    let tokens = tokenize("--< one\ntwo >-- z").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, " one\ntwo ");
    assert_eq!(tokens[1].value, "z");
    assert_eq!((tokens[1].line, tokens[1].col), (2, 9));
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    assert_eq!(kinds("--< never closed\n1 + 2"), vec![
        TokenKind::Comment,
        TokenKind::Eof
    ]);
}

#[test]
fn double_minus_without_marker_is_two_operators() {
    assert_eq!(values("a--b"), vec!["a", "-", "-", "b", "EOF"]);
}

#[test]
fn strings_use_either_quote() {
    let tokens = tokenize(r#"'hello " to the " world' "it's""#).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, r#"hello " to the " world"#);
    assert_eq!(tokens[1].value, "it's");
}

#[test]
fn strings_have_no_escapes() {
    let tokens = tokenize(r"'a\nb'").unwrap();
    assert_eq!(tokens[0].value, r"a\nb");
}

#[test]
fn empty_string() {
    let tokens = tokenize("''").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "");
}

#[test]
fn unterminated_string_is_an_error() {
    assert_eq!(
        tokenize("let s = 'oops"),
        Err(LexError::UnterminatedString { line: 1, col: 9 })
    );
}

#[test]
fn numbers() {
    assert_eq!(values("7 3.25 .5"), vec!["7", "3.25", "0.5", "EOF"]);
    assert_eq!(kinds(".5")[0], TokenKind::Number);
}

#[test]
fn trailing_decimal_point_belongs_to_the_number() {
    assert_eq!(values("let a = 5.\na"), vec!["let", "a", "=", "5", "a", "EOF"]);
    assert_eq!(kinds("5."), vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(values("1.25.5"), vec!["1.25", "0.5", "EOF"]);
}

#[test]
fn member_dot_then_identifier() {
    assert_eq!(
        kinds("a.b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
fn identifier_characters() {
    assert_eq!(values("snake_case camel$ x2 été"), vec![
        "snake_case",
        "camel$",
        "x2",
        "été",
        "EOF"
    ]);
}

#[test]
fn identifier_cannot_start_with_underscore() {
    assert_eq!(
        tokenize("_x"),
        Err(LexError::UnexpectedCharacter {
            ch: '_',
            line: 1,
            col: 1
        })
    );
}

#[test]
fn keywords() {
    assert_eq!(
        kinds("let const fn if else while try catch return lets"),
        vec![
            TokenKind::Let,
            TokenKind::Const,
            TokenKind::Fn,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Try,
            TokenKind::Catch,
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unexpected_character_reports_position() {
    let err = tokenize("let a = 1\nlet b = @").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            ch: '@',
            line: 2,
            col: 9
        }
    );
    assert_eq!(err.position(), (2, 9));
    assert_eq!(
        err.to_string(),
        "unexpected character `@` at line 2, column 9"
    );
}

#[test]
fn lone_bang_is_rejected() {
    assert!(matches!(
        tokenize("!x"),
        Err(LexError::UnexpectedCharacter { ch: '!', .. })
    ));
}

#[test]
fn tracks_lines_and_columns() {
    let tokens = tokenize("let a = 1\n\tfoo(a)").unwrap();
    let foo = &tokens[4];
    assert_eq!(foo.value, "foo");
    assert_eq!((foo.line, foo.col), (2, 2));
}

#[test]
fn empty_source_is_just_eof() {
    let tokens = tokenize("  \n ").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].line, 2);
}

const KEYWORDS: &[&str] = &[
    "let", "const", "fn", "if", "else", "while", "try", "catch", "return",
];

proptest! {
    #[test]
    fn integer_literals_lex_to_one_number(n in 0u64..10_000_000_000) {
        let source = n.to_string();
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].value, &source);
    }

    #[test]
    fn plain_identifiers_round_trip(name in "[a-zA-Z][a-zA-Z0-9_]{0,12}") {
        prop_assume!(!KEYWORDS.contains(&name.as_str()));
        let tokens = tokenize(&name).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(&tokens[0].value, &name);
    }

    #[test]
    fn string_contents_are_verbatim(body in "[^'\r]{0,20}") {
        let source = format!("'{body}'");
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(&tokens[0].value, &body);
    }
}
