//! Lexer for VirtLang.
//!
//! Turns source text into a flat `Vec<Token>` ending in `Eof`. Comments are
//! kept as `Comment` tokens; the parser decides where they may appear.

mod lex_error;
mod raw_token;

use logos::Logos;
use virt_ir::{LineIndex, Span, Token, TokenKind};

pub use lex_error::LexError;
use raw_token::RawToken;

/// Lex `source` into tokens.
///
/// Fails on the first character that starts no token, and on a string
/// literal with no closing quote.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let lines = LineIndex::build(source);
    let mut tokens = Vec::new();

    for (result, range) in RawToken::lexer(source).spanned() {
        let span = Span::from_range(range.clone());
        let (line, col) = lines.line_col(source, span.start);
        let slice = &source[range];

        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                let ch = slice.chars().next().unwrap_or('\0');
                return Err(LexError::UnexpectedCharacter { ch, line, col });
            }
        };

        let (kind, value) = match raw {
            RawToken::UnterminatedString => {
                return Err(LexError::UnterminatedString { line, col });
            }
            RawToken::LineComment => (TokenKind::Comment, slice[3..].to_string()),
            RawToken::BlockComment => {
                let text = &slice[3..];
                let text = text.strip_suffix(">--").unwrap_or(text);
                (TokenKind::Comment, text.to_string())
            }
            RawToken::String => (TokenKind::String, slice[1..slice.len() - 1].to_string()),
            RawToken::Number => {
                let digits = slice.strip_suffix('.').unwrap_or(slice);
                (TokenKind::Number, digits.to_string())
            }
            RawToken::LeadingDotNumber => (TokenKind::Number, format!("0{slice}")),
            other => (convert_kind(other), slice.to_string()),
        };
        tokens.push(Token::new(value, kind, line, col, span));
    }

    let eof_offset = u32::try_from(source.len()).unwrap_or(u32::MAX);
    let (line, col) = lines.line_col(source, eof_offset);
    tokens.push(Token::new(
        "EOF",
        TokenKind::Eof,
        line,
        col,
        Span::point(eof_offset),
    ));

    Ok(tokens)
}

/// Kinds whose token text is the slice itself.
fn convert_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Let => TokenKind::Let,
        RawToken::Const => TokenKind::Const,
        RawToken::Fn => TokenKind::Fn,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Try => TokenKind::Try,
        RawToken::Catch => TokenKind::Catch,
        RawToken::Return => TokenKind::Return,
        RawToken::OParen => TokenKind::OParen,
        RawToken::CParen => TokenKind::CParen,
        RawToken::OBrace => TokenKind::OBrace,
        RawToken::CBrace => TokenKind::CBrace,
        RawToken::OBracket => TokenKind::OBracket,
        RawToken::CBracket => TokenKind::CBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Comparison => TokenKind::ComparisonOperator,
        RawToken::Equals => TokenKind::Equals,
        RawToken::BinaryOperator => TokenKind::BinaryOperator,
        RawToken::Number | RawToken::LeadingDotNumber => TokenKind::Number,
        RawToken::Identifier => TokenKind::Identifier,
        RawToken::String | RawToken::UnterminatedString => TokenKind::String,
        RawToken::LineComment | RawToken::BlockComment => TokenKind::Comment,
    }
}

#[cfg(test)]
mod tests;
