//! Primary expressions.

use tracing::trace;
use virt_ir::{Expr, ExprKind, Property, TokenKind, TryCatchStmt};

use crate::{ParseError, Parser};

impl Parser {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let kind = self.cursor.current_kind();
        let start = self.cursor.current_span();
        trace!(?kind, "parse_primary");

        let expr = match kind {
            TokenKind::Identifier => ExprKind::Identifier(self.cursor.advance().value),
            TokenKind::Number => {
                let token = self.cursor.advance();
                let value = token
                    .value
                    .parse::<f64>()
                    .map_err(|_| ParseError::unexpected("number", &token))?;
                ExprKind::NumericLiteral(value)
            }
            TokenKind::String => ExprKind::StringLiteral(self.cursor.advance().value),
            TokenKind::OParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(TokenKind::CParen)?;
                return Ok(inner);
            }
            TokenKind::OBracket => self.parse_array()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Try => ExprKind::TryCatchStmt(self.parse_try()?),
            TokenKind::Return => self.parse_return()?,
            TokenKind::Comment => {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    ExprKind::Identifier("nil".to_string())
                } else {
                    return self.parse_expr();
                }
            }
            _ => return Err(ParseError::unexpected("expression", self.cursor.current())),
        };

        Ok(Expr::new(expr, start.merge(self.cursor.previous_span())))
    }

    /// `[a, b, c]` becomes an object literal keyed `"0"`, `"1"`, `"2"`.
    /// Commas between elements are optional.
    fn parse_array(&mut self) -> Result<ExprKind, ParseError> {
        self.cursor.expect(TokenKind::OBracket)?;
        let mut properties = Vec::new();

        while !self.cursor.is_at_end() && !self.cursor.check(TokenKind::CBracket) {
            let key = properties.len().to_string();
            let value = self.parse_expr()?;
            properties.push(Property {
                key,
                span: value.span,
                value: Some(value),
            });
            if self.cursor.check(TokenKind::Comma) {
                self.cursor.advance();
            }
        }

        self.cursor.expect(TokenKind::CBracket)?;
        Ok(ExprKind::ObjectLiteral(properties))
    }

    /// `while ( expr ) { stmts }`
    fn parse_while(&mut self) -> Result<ExprKind, ParseError> {
        self.cursor.expect(TokenKind::While)?;
        self.cursor.expect(TokenKind::OParen)?;
        let condition = self.parse_expr()?;
        self.cursor.expect(TokenKind::CParen)?;
        let body = self.parse_block()?;
        Ok(ExprKind::WhileLoop {
            condition: Box::new(condition),
            body,
        })
    }

    /// `try { stmts } catch name { stmts }`
    fn parse_try(&mut self) -> Result<TryCatchStmt, ParseError> {
        self.cursor.expect(TokenKind::Try)?;
        let try_body = self.parse_block()?;
        self.cursor.expect(TokenKind::Catch)?;
        let catch_var = self.cursor.expect(TokenKind::Identifier)?.value;
        let catch_body = self.parse_block()?;
        Ok(TryCatchStmt {
            try_body,
            catch_body,
            catch_var,
        })
    }

    /// `return expr`, or a bare `return` before end of input or `}`.
    fn parse_return(&mut self) -> Result<ExprKind, ParseError> {
        self.cursor.expect(TokenKind::Return)?;
        if self.cursor.is_at_end() || self.cursor.check(TokenKind::CBrace) {
            return Ok(ExprKind::ReturnStmt(None));
        }
        let value = self.parse_expr()?;
        Ok(ExprKind::ReturnStmt(Some(Box::new(value))))
    }
}
