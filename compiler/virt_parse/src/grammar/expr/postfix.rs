//! Member access and call chains.

use virt_ir::{Expr, ExprKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser {
    /// A member chain followed by any number of call suffixes: `a.b[c]()()`.
    pub(crate) fn parse_call_member(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_member()?;

        while self.cursor.check(TokenKind::OParen) {
            let args = self.parse_args()?;
            let span = expr.span.merge(self.cursor.previous_span());
            expr = Expr::new(
                ExprKind::Call {
                    callee: Box::new(expr),
                    args,
                },
                span,
            );
        }

        Ok(expr)
    }

    /// `( arg, arg )`. Arguments are assignment expressions.
    fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.cursor.expect(TokenKind::OParen)?;
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::CParen) {
            args.push(self.parse_assignment()?);
            while self.cursor.check(TokenKind::Comma) {
                self.cursor.advance();
                args.push(self.parse_assignment()?);
            }
        }
        self.cursor.expect(TokenKind::CParen)?;
        Ok(args)
    }

    /// `object.name` and `object[expr]`, chained.
    fn parse_member(&mut self) -> Result<Expr, ParseError> {
        let mut object = self.parse_primary()?;

        loop {
            let computed = match self.cursor.current_kind() {
                TokenKind::Dot => false,
                TokenKind::OBracket => true,
                _ => break,
            };
            self.cursor.advance();

            let property = if computed {
                let property = self.parse_expr()?;
                self.cursor.expect(TokenKind::CBracket)?;
                property
            } else {
                let first = self.cursor.current().clone();
                let property = self.parse_primary()?;
                if property.as_identifier().is_none() {
                    return Err(ParseError::unexpected("identifier after `.`", &first));
                }
                property
            };

            let span = object.span.merge(self.cursor.previous_span());
            object = Expr::new(
                ExprKind::Member {
                    object: Box::new(object),
                    property: Box::new(property),
                    computed,
                },
                span,
            );
        }

        Ok(object)
    }
}
