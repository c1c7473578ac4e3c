//! VirtLang IR
//!
//! Data shared between the lexer, the parser and the evaluator:
//! - Spans and line/column lookup for diagnostics
//! - Tokens produced by the lexer
//! - AST nodes produced by the parser
//!
//! Nothing here knows about runtime values.

mod line_index;
mod span;
mod token;
pub mod ast;

pub use ast::{
    BinaryOp, CompareOp, Expr, ExprKind, FnDeclaration, IfStatement, Program, Property, Stmt,
    StmtKind, TryCatchStmt, VarDeclaration,
};
pub use line_index::LineIndex;
pub use span::Span;
pub use token::{Token, TokenKind};
