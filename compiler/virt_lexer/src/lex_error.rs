//! Lexer failures.
//!
//! Lexing stops at the first bad character; there is no recovery.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character `{ch}` at line {line}, column {col}")]
    UnexpectedCharacter { ch: char, line: u32, col: u32 },

    #[error("unterminated string literal starting at line {line}, column {col}")]
    UnterminatedString { line: u32, col: u32 },
}

impl LexError {
    /// 1-based `(line, column)` of the failure.
    pub fn position(&self) -> (u32, u32) {
        match *self {
            LexError::UnexpectedCharacter { line, col, .. }
            | LexError::UnterminatedString { line, col } => (line, col),
        }
    }
}
