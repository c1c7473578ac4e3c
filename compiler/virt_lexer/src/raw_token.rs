//! Raw Token Definition
//!
//! The logos-derived tokenizer output before it is turned into
//! [`virt_ir::Token`]s with text and line/column information.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"-->[^\n\r]*")]
    LineComment,

    #[token("--<", block_comment)]
    BlockComment,

    #[token("let")]
    Let,
    #[token("const")]
    Const,
    #[token("fn")]
    Fn,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("return")]
    Return,

    #[token("(")]
    OParen,
    #[token(")")]
    CParen,
    #[token("{")]
    OBrace,
    #[token("}")]
    CBrace,
    #[token("[")]
    OBracket,
    #[token("]")]
    CBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,

    // Two-character forms win over `<`, `>` and `=` by longest match.
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token("=>")]
    #[token("<")]
    #[token(">")]
    Comparison,

    #[token("=")]
    Equals,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    BinaryOperator,

    // A trailing point is allowed: `5.` is `5`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    // `.5` is sugar for `0.5`
    #[regex(r"\.[0-9]+")]
    LeadingDotNumber,

    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    String,

    // Only matches when no closing quote follows; a closed string is longer.
    #[regex(r#""[^"]*"#)]
    #[regex(r"'[^']*")]
    UnterminatedString,

    // First char must be a cased letter; `_`, `$` and digits only after it.
    #[regex(r"[\p{Lu}\p{Ll}\p{Lt}][\p{Lu}\p{Ll}\p{Lt}0-9_$]*")]
    Identifier,
}

/// Consume through the closing `>--`, or to end of input when unterminated.
fn block_comment(lex: &mut logos::Lexer<RawToken>) -> bool {
    let rest = lex.remainder();
    let consumed = rest.find(">--").map_or(rest.len(), |end| end + 3);
    lex.bump(consumed);
    true
}
