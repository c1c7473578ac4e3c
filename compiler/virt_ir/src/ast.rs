//! AST produced by the parser.
//!
//! The tree is immutable once built. Function declarations sit behind an
//! `Rc` so the evaluator can hand the same body to every call of a function
//! value without copying it.
//!
//! `Expr` and `Stmt` free their children from a heap work list, so dropping
//! a deeply nested tree does not recurse on the native stack.

use std::fmt;
use std::rc::Rc;

use crate::Span;

/// A whole source file or REPL input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `let x = ...` / `const x = ...`
    VarDeclaration(VarDeclaration),
    /// `fn name(a, b) { ... }` in statement position.
    FnDeclaration(Rc<FnDeclaration>),
    /// `if (cond) { ... }`
    IfStatement(IfStatement),
    /// Any expression used as a statement.
    Expr(Expr),
}

impl Drop for Stmt {
    fn drop(&mut self) {
        if let StmtKind::Expr(expr) = &self.kind {
            if expr.kind.is_leaf() {
                return;
            }
        }
        let mut list = DropList::default();
        list.take_stmt(&mut self.kind);
        list.run();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VarDeclaration {
    pub name: String,
    pub constant: bool,
    /// `None` evaluates to `nil`. The parser always supplies an initializer.
    pub value: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FnDeclaration {
    /// Empty for anonymous functions.
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub anonymous: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStatement {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TryCatchStmt {
    pub try_body: Vec<Stmt>,
    pub catch_body: Vec<Stmt>,
    pub catch_var: String,
}

/// Object literal entry. `value: None` is the `{ key }` shorthand.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Option<Expr>,
    pub span: Span,
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// The identifier name, if this is a bare identifier.
    pub fn as_identifier(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Identifier(symbol) => Some(symbol.as_str()),
            _ => None,
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        if self.kind.is_leaf() {
            return;
        }
        let mut list = DropList::default();
        list.take_expr(&mut self.kind);
        list.run();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// `fn (...) { ... }` where an expression is expected.
    FnDeclaration(Rc<FnDeclaration>),
    /// `while (cond) { ... }`
    WhileLoop {
        condition: Box<Expr>,
        body: Vec<Stmt>,
    },
    /// `return expr`; `None` is a bare `return`.
    ReturnStmt(Option<Box<Expr>>),
    /// `try { ... } catch e { ... }`
    TryCatchStmt(TryCatchStmt),
    /// `target = value`
    VarAssignment {
        assignee: Box<Expr>,
        value: Box<Expr>,
    },
    /// `+ - * / %`
    Binary {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        op: BinaryOp,
    },
    /// `== != > < => <=`
    Compare {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        op: CompareOp,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `object.property` (`computed: false`) or `object[property]`.
    Member {
        object: Box<Expr>,
        property: Box<Expr>,
        computed: bool,
    },
    /// `{ ... }`, and `[ ... ]` after desugaring to index keys.
    ObjectLiteral(Vec<Property>),
    Identifier(String),
    NumericLiteral(f64),
    StringLiteral(String),
}

impl ExprKind {
    fn is_leaf(&self) -> bool {
        matches!(
            self,
            ExprKind::Identifier(_) | ExprKind::NumericLiteral(_) | ExprKind::StringLiteral(_)
        )
    }
}

/// Nodes detached from a parent that is being dropped.
///
/// Each popped node has its children moved onto the lists before it is
/// freed, so by the time its own `Drop` runs it holds only leaves.
#[derive(Default)]
struct DropList {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
}

impl DropList {
    fn run(&mut self) {
        loop {
            if let Some(mut expr) = self.exprs.pop() {
                self.take_expr(&mut expr.kind);
            } else if let Some(mut stmt) = self.stmts.pop() {
                self.take_stmt(&mut stmt.kind);
            } else {
                return;
            }
        }
    }

    fn take_expr(&mut self, kind: &mut ExprKind) {
        match std::mem::replace(kind, ExprKind::NumericLiteral(0.0)) {
            ExprKind::FnDeclaration(decl) => self.take_fn(decl),
            ExprKind::WhileLoop { condition, body } => {
                self.exprs.push(*condition);
                self.stmts.extend(body);
            }
            ExprKind::ReturnStmt(value) => self.exprs.extend(value.map(|value| *value)),
            ExprKind::TryCatchStmt(stmt) => {
                self.stmts.extend(stmt.try_body);
                self.stmts.extend(stmt.catch_body);
            }
            ExprKind::VarAssignment { assignee, value } => {
                self.exprs.push(*assignee);
                self.exprs.push(*value);
            }
            ExprKind::Binary { lhs, rhs, .. } | ExprKind::Compare { lhs, rhs, .. } => {
                self.exprs.push(*lhs);
                self.exprs.push(*rhs);
            }
            ExprKind::Call { callee, args } => {
                self.exprs.push(*callee);
                self.exprs.extend(args);
            }
            ExprKind::Member {
                object, property, ..
            } => {
                self.exprs.push(*object);
                self.exprs.push(*property);
            }
            ExprKind::ObjectLiteral(properties) => self
                .exprs
                .extend(properties.into_iter().filter_map(|property| property.value)),
            ExprKind::Identifier(_) | ExprKind::NumericLiteral(_) | ExprKind::StringLiteral(_) => {}
        }
    }

    fn take_stmt(&mut self, kind: &mut StmtKind) {
        let placeholder = StmtKind::Expr(Expr::new(ExprKind::NumericLiteral(0.0), Span::DUMMY));
        match std::mem::replace(kind, placeholder) {
            StmtKind::VarDeclaration(decl) => self.exprs.extend(decl.value),
            StmtKind::FnDeclaration(decl) => self.take_fn(decl),
            StmtKind::IfStatement(stmt) => {
                self.exprs.push(stmt.condition);
                self.stmts.extend(stmt.body);
            }
            StmtKind::Expr(expr) => self.exprs.push(expr),
        }
    }

    /// Shared declarations are left to their other owners.
    fn take_fn(&mut self, decl: Rc<FnDeclaration>) {
        if let Ok(decl) = Rc::try_unwrap(decl) {
            self.stmts.extend(decl.body);
        }
    }
}

/// Arithmetic operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "%" => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }

    /// `+ -` bind looser than `* / %`.
    pub fn is_additive(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Sub)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Numeric comparison. Greater-or-equal is spelled `=>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
}

impl CompareOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(CompareOp::Eq),
            "!=" => Some(CompareOp::NotEq),
            ">" => Some(CompareOp::Gt),
            "<" => Some(CompareOp::Lt),
            "=>" => Some(CompareOp::GtEq),
            "<=" => Some(CompareOp::LtEq),
            _ => None,
        }
    }

    pub fn as_symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::GtEq => "=>",
            CompareOp::LtEq => "<=",
        }
    }

    /// Apply to two numbers with IEEE-754 semantics.
    pub fn apply(self, lhs: f64, rhs: f64) -> bool {
        match self {
            CompareOp::Eq => lhs == rhs,
            CompareOp::NotEq => lhs != rhs,
            CompareOp::Gt => lhs > rhs,
            CompareOp::Lt => lhs < rhs,
            CompareOp::GtEq => lhs >= rhs,
            CompareOp::LtEq => lhs <= rhs,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn greater_or_equal_is_spelled_fat_arrow() {
        assert_eq!(CompareOp::from_symbol("=>"), Some(CompareOp::GtEq));
        assert_eq!(CompareOp::from_symbol(">="), None);
        assert_eq!(CompareOp::GtEq.as_symbol(), "=>");
    }

    #[test]
    fn compare_follows_ieee() {
        assert!(!CompareOp::Eq.apply(f64::NAN, f64::NAN));
        assert!(CompareOp::NotEq.apply(f64::NAN, f64::NAN));
        assert!(CompareOp::GtEq.apply(2.0, 2.0));
        assert!(CompareOp::Lt.apply(f64::NEG_INFINITY, -1e308));
    }

    #[test]
    fn operator_symbols() {
        for op in [
            BinaryOp::Add,
            BinaryOp::Sub,
            BinaryOp::Mul,
            BinaryOp::Div,
            BinaryOp::Mod,
        ] {
            assert_eq!(BinaryOp::from_symbol(op.as_symbol()), Some(op));
        }
        assert!(BinaryOp::Sub.is_additive());
        assert!(!BinaryOp::Mod.is_additive());
    }

    fn nested_binary(depth: usize) -> Expr {
        let mut expr = Expr::new(ExprKind::NumericLiteral(1.0), Span::DUMMY);
        for _ in 0..depth {
            expr = Expr::new(
                ExprKind::Binary {
                    lhs: Box::new(Expr::new(ExprKind::NumericLiteral(1.0), Span::DUMMY)),
                    rhs: Box::new(expr),
                    op: BinaryOp::Add,
                },
                Span::DUMMY,
            );
        }
        expr
    }

    #[test]
    fn dropping_a_deep_expression_does_not_recurse() {
        drop(nested_binary(500_000));
    }

    #[test]
    fn dropping_deeply_nested_blocks_does_not_recurse() {
        let mut body = vec![Stmt::new(StmtKind::Expr(nested_binary(10)), Span::DUMMY)];
        for _ in 0..200_000 {
            let stmt = Stmt::new(
                StmtKind::IfStatement(IfStatement {
                    condition: Expr::new(ExprKind::Identifier("x".into()), Span::DUMMY),
                    body,
                }),
                Span::DUMMY,
            );
            body = vec![stmt];
        }
        let decl = Rc::new(FnDeclaration {
            name: "deep".into(),
            params: Vec::new(),
            body,
            anonymous: false,
        });
        drop(Program {
            body: vec![Stmt::new(StmtKind::FnDeclaration(decl), Span::DUMMY)],
        });
    }

    #[test]
    fn shared_function_bodies_survive_the_tree() {
        let decl = Rc::new(FnDeclaration {
            name: "f".into(),
            params: vec!["a".into()],
            body: vec![Stmt::new(StmtKind::Expr(nested_binary(3)), Span::DUMMY)],
            anonymous: true,
        });
        let expr = Expr::new(ExprKind::FnDeclaration(Rc::clone(&decl)), Span::DUMMY);
        drop(expr);
        assert_eq!(Rc::strong_count(&decl), 1);
        assert_eq!(decl.body.len(), 1);
    }

    #[test]
    fn as_identifier_only_matches_identifiers() {
        let id = Expr::new(ExprKind::Identifier("x".into()), Span::DUMMY);
        let num = Expr::new(ExprKind::NumericLiteral(1.0), Span::DUMMY);
        assert_eq!(id.as_identifier(), Some("x"));
        assert_eq!(num.as_identifier(), None);
    }
}
