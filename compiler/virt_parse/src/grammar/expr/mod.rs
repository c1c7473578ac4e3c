//! Expression parsing.
//!
//! Precedence, lowest first: assignment, comparison, object literal or
//! additive, additive, multiplicative, call/member, primary.

mod postfix;
mod primary;

use virt_ir::{BinaryOp, CompareOp, Expr, ExprKind, Property, TokenKind};
use virt_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser {
    /// Parse an expression. `fn` here starts a function expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check(TokenKind::Fn) {
            let start = self.cursor.current_span();
            let decl = self.parse_fn_decl()?;
            return Ok(Expr::new(
                ExprKind::FnDeclaration(decl),
                start.merge(self.cursor.previous_span()),
            ));
        }
        self.parse_assignment()
    }

    /// `target = value`, right-associative.
    ///
    /// Every recursive path through the expression grammar passes through
    /// here, so this is where the stack is grown.
    pub(crate) fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment_inner())
    }

    fn parse_assignment_inner(&mut self) -> Result<Expr, ParseError> {
        let assignee = self.parse_comparison()?;

        if self.cursor.check(TokenKind::Equals) {
            self.cursor.advance();
            let value = self.parse_assignment()?;
            let span = assignee.span.merge(value.span);
            return Ok(Expr::new(
                ExprKind::VarAssignment {
                    assignee: Box::new(assignee),
                    value: Box::new(value),
                },
                span,
            ));
        }

        Ok(assignee)
    }

    /// A single comparison; `a < b < c` does not chain.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_object()?;

        if self.cursor.check(TokenKind::ComparisonOperator) {
            let token = self.cursor.advance();
            let op = CompareOp::from_symbol(&token.value)
                .ok_or_else(|| ParseError::unexpected("comparison operator", &token))?;
            let rhs = self.parse_object()?;
            let span = lhs.span.merge(rhs.span);
            return Ok(Expr::new(
                ExprKind::Compare {
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                    op,
                },
                span,
            ));
        }

        Ok(lhs)
    }

    /// `{ key, key: value, }` or fall through to additive.
    fn parse_object(&mut self) -> Result<Expr, ParseError> {
        if !self.cursor.check(TokenKind::OBrace) {
            return self.parse_additive();
        }

        let start = self.cursor.advance().span;
        let mut properties = Vec::new();

        loop {
            self.skip_comments();
            if self.cursor.is_at_end() || self.cursor.check(TokenKind::CBrace) {
                break;
            }

            let key = self.cursor.expect(TokenKind::Identifier)?;

            // Shorthand: `{ key, ... }` or `{ key }`.
            if self.cursor.check(TokenKind::Comma) {
                self.cursor.advance();
                properties.push(Property {
                    key: key.value,
                    value: None,
                    span: key.span,
                });
                continue;
            }
            if self.cursor.check(TokenKind::CBrace) {
                properties.push(Property {
                    key: key.value,
                    value: None,
                    span: key.span,
                });
                break;
            }

            self.cursor.expect(TokenKind::Colon)?;
            let value = self.parse_expr()?;
            let span = key.span.merge(value.span);
            properties.push(Property {
                key: key.value,
                value: Some(value),
                span,
            });

            if !self.cursor.check(TokenKind::CBrace) {
                self.cursor.expect(TokenKind::Comma)?;
            }
        }

        self.cursor.expect(TokenKind::CBrace)?;
        Ok(Expr::new(
            ExprKind::ObjectLiteral(properties),
            start.merge(self.cursor.previous_span()),
        ))
    }

    /// `+ -`, left-associative.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_multiplicative()?;
        while let Some(op) = self.match_binary_op(true) {
            self.cursor.advance();
            let rhs = self.parse_multiplicative()?;
            lhs = binary(lhs, rhs, op);
        }
        Ok(lhs)
    }

    /// `* / %`, left-associative.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_call_member()?;
        while let Some(op) = self.match_binary_op(false) {
            self.cursor.advance();
            let rhs = self.parse_call_member()?;
            lhs = binary(lhs, rhs, op);
        }
        Ok(lhs)
    }

    /// The operator under the cursor, if it belongs to the requested level.
    fn match_binary_op(&self, additive: bool) -> Option<BinaryOp> {
        let token = self.cursor.current();
        if !token.is(TokenKind::BinaryOperator) {
            return None;
        }
        BinaryOp::from_symbol(&token.value).filter(|op| op.is_additive() == additive)
    }
}

fn binary(lhs: Expr, rhs: Expr, op: BinaryOp) -> Expr {
    let span = lhs.span.merge(rhs.span);
    Expr::new(
        ExprKind::Binary {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            op,
        },
        span,
    )
}
