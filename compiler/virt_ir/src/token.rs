//! Lexer output.

use std::fmt;

use crate::Span;

/// Kind of a lexed token.
///
/// Operators are grouped by role (`BinaryOperator`, `ComparisonOperator`);
/// the operator itself is carried in [`Token::value`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Number,
    Identifier,
    String,

    // Operators
    Equals,
    BinaryOperator,
    ComparisonOperator,

    // Punctuation
    OParen,
    CParen,
    OBrace,
    CBrace,
    OBracket,
    CBracket,
    Comma,
    Colon,
    Dot,

    // Keywords
    Let,
    Const,
    Fn,
    If,
    Else,
    While,
    Try,
    Catch,
    Return,

    Comment,
    Eof,
}

impl TokenKind {
    /// How the kind reads in a diagnostic ("expected `)`").
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Equals => "`=`",
            TokenKind::BinaryOperator => "binary operator",
            TokenKind::ComparisonOperator => "comparison operator",
            TokenKind::OParen => "`(`",
            TokenKind::CParen => "`)`",
            TokenKind::OBrace => "`{`",
            TokenKind::CBrace => "`}`",
            TokenKind::OBracket => "`[`",
            TokenKind::CBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Dot => "`.`",
            TokenKind::Let => "`let`",
            TokenKind::Const => "`const`",
            TokenKind::Fn => "`fn`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::While => "`while`",
            TokenKind::Try => "`try`",
            TokenKind::Catch => "`catch`",
            TokenKind::Return => "`return`",
            TokenKind::Comment => "comment",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its text and 1-based position.
///
/// `value` is the token text, except for strings (contents without quotes),
/// comments (text without markers) and leading-dot numbers (normalized to
/// `0.5` form).
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub line: u32,
    pub col: u32,
    pub span: Span,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, line: u32, col: u32, span: Span) -> Self {
        Token {
            value: value.into(),
            kind,
            line,
            col,
            span,
        }
    }

    /// Check the kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
