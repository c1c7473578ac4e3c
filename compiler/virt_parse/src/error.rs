//! Parse failures.

use thiserror::Error;
use virt_ir::{Token, TokenKind};
use virt_lexer::LexError;

/// A token that does not fit the production being parsed.
///
/// Parsing stops at the first one; there is no recovery.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected {expected}, got {found} at line {line}, column {col}")]
pub struct ParseError {
    /// What the production wanted, e.g. "`)`" or "expression".
    pub expected: String,
    /// The offending token as it reads in a message.
    pub found: String,
    pub line: u32,
    pub col: u32,
}

impl ParseError {
    pub(crate) fn unexpected(expected: impl Into<String>, token: &Token) -> Self {
        let found = match token.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Comment => "comment".to_string(),
            TokenKind::String => format!("string '{}'", token.value),
            _ => format!("`{}`", token.value),
        };
        ParseError {
            expected: expected.into(),
            found,
            line: token.line,
            col: token.col,
        }
    }
}

/// Failure of [`produce_ast`](crate::produce_ast): either stage of the front end.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("lexer error: {0}")]
    Lex(#[from] LexError),
    #[error("parser error: {0}")]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// 1-based `(line, column)` where the front end gave up.
    pub fn position(&self) -> (u32, u32) {
        match self {
            SyntaxError::Lex(err) => err.position(),
            SyntaxError::Parse(err) => (err.line, err.col),
        }
    }
}
