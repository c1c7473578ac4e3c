//! Statements and statement lists.

use std::rc::Rc;

use virt_ir::{FnDeclaration, IfStatement, Stmt, StmtKind, TokenKind, VarDeclaration};

use virt_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser {
    /// Parse statements up to end of input, or up to the closing `}` when
    /// `in_block` is set. Comments between statements are dropped.
    pub(crate) fn parse_stmt_list(&mut self, in_block: bool) -> Result<Vec<Stmt>, ParseError> {
        let mut body = Vec::new();
        loop {
            self.skip_comments();
            if self.cursor.is_at_end() || (in_block && self.cursor.check(TokenKind::CBrace)) {
                break;
            }
            body.push(self.parse_stmt()?);
        }
        Ok(body)
    }

    /// `{ stmts }`
    pub(crate) fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.cursor.expect(TokenKind::OBrace)?;
        let body = self.parse_stmt_list(true)?;
        self.cursor.expect(TokenKind::CBrace)?;
        Ok(body)
    }

    /// Blocks nest through here, so the stack is grown here too.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        let kind = match self.cursor.current_kind() {
            TokenKind::Let | TokenKind::Const => StmtKind::VarDeclaration(self.parse_var_decl()?),
            TokenKind::Fn => StmtKind::FnDeclaration(self.parse_fn_decl()?),
            TokenKind::If => StmtKind::IfStatement(self.parse_if()?),
            _ => StmtKind::Expr(self.parse_expr()?),
        };
        Ok(Stmt::new(kind, start.merge(self.cursor.previous_span())))
    }

    /// `let name = expr` or `const name = expr`. The initializer is required.
    fn parse_var_decl(&mut self) -> Result<VarDeclaration, ParseError> {
        let constant = self.cursor.advance().is(TokenKind::Const);
        let name = self.cursor.expect(TokenKind::Identifier)?.value;
        self.cursor.expect(TokenKind::Equals)?;
        let value = self.parse_expr()?;
        Ok(VarDeclaration {
            name,
            constant,
            value: Some(value),
        })
    }

    /// `fn name? (params) { body }`
    pub(crate) fn parse_fn_decl(&mut self) -> Result<Rc<FnDeclaration>, ParseError> {
        self.cursor.expect(TokenKind::Fn)?;
        let name = if self.cursor.check(TokenKind::Identifier) {
            Some(self.cursor.advance().value)
        } else {
            None
        };
        let params = self.parse_params()?;
        let body = self.parse_block()?;

        Ok(Rc::new(FnDeclaration {
            anonymous: name.is_none(),
            name: name.unwrap_or_default(),
            params,
            body,
        }))
    }

    /// Parameter list. Each entry goes through the argument grammar and must
    /// come out as a bare identifier.
    fn parse_params(&mut self) -> Result<Vec<String>, ParseError> {
        self.cursor.expect(TokenKind::OParen)?;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::CParen) {
            loop {
                let first = self.cursor.current().clone();
                let param = self.parse_assignment()?;
                match param.as_identifier() {
                    Some(name) => params.push(name.to_string()),
                    None => return Err(ParseError::unexpected("parameter name", &first)),
                }
                if !self.cursor.check(TokenKind::Comma) {
                    break;
                }
                self.cursor.advance();
            }
        }
        self.cursor.expect(TokenKind::CParen)?;
        Ok(params)
    }

    /// `if ( expr ) { stmts }`
    fn parse_if(&mut self) -> Result<IfStatement, ParseError> {
        self.cursor.expect(TokenKind::If)?;
        self.cursor.expect(TokenKind::OParen)?;
        let condition = self.parse_expr()?;
        self.cursor.expect(TokenKind::CParen)?;
        let body = self.parse_block()?;
        Ok(IfStatement { condition, body })
    }

    pub(crate) fn skip_comments(&mut self) {
        while self.cursor.check(TokenKind::Comment) {
            self.cursor.advance();
        }
    }
}
