//! Token cursor for navigating the token stream.

use virt_ir::{Span, Token, TokenKind};

use crate::ParseError;

/// Position in a token list that always ends in `Eof`.
///
/// The cursor never moves past the final `Eof`, so `current()` is always
/// valid.
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// `tokens` must end with an `Eof` token, as `virt_lexer::tokenize` guarantees.
    pub(crate) fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::Eof)) {
            let end = tokens.last().map_or(Span::DUMMY, |t| Span::point(t.span.end));
            let (line, col) = tokens.last().map_or((1, 1), |t| (t.line, t.col));
            tokens.push(Token::new("EOF", TokenKind::Eof, line, col, end));
        }
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    pub(crate) fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token. At `Eof` the cursor stays put.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of `kind` or fail naming it.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(kind.describe(), self.current()))
        }
    }
}
