//! Evaluation of programs, statements and expressions.
//!
//! - `expr`: identifiers, object literals, member access, assignment
//! - `operators`: arithmetic and comparison
//! - `call`: calls to user and native functions
//! - `control`: declarations, `if`, `while`, `return`, `try`/`catch`
//!
//! Every evaluation step returns [`EvalResult`]. `Err` carries either a
//! runtime error or a `return` on its way to the nearest call boundary.

mod call;
mod control;
mod expr;
mod operators;

use tracing::debug;
use virt_ir::{Expr, ExprKind, Program, Stmt, StmtKind};
use virt_stack::ensure_sufficient_stack;

use crate::{Environment, RuntimeError, Value};

pub use call::call_function;

/// Non-local exit from an evaluation step.
#[derive(Clone, Debug)]
pub(crate) enum Interrupt {
    /// `return` unwinding to the enclosing function or program.
    Return(Value),
    /// A runtime error unwinding to the nearest `try`.
    Raise(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Interrupt::Raise(error)
    }
}

pub(crate) type EvalResult = Result<Value, Interrupt>;

/// Run `program` in `env` and return the value of its last statement.
///
/// A top-level `return` ends the program early with its value.
pub fn evaluate(program: &Program, env: &Environment) -> Result<Value, RuntimeError> {
    debug!(statements = program.body.len(), "evaluating program");
    match eval_body(&program.body, env) {
        Ok(value) | Err(Interrupt::Return(value)) => Ok(value),
        Err(Interrupt::Raise(error)) => Err(error),
    }
}

/// Statements in order; the value is the last one's, or nil when empty.
pub(crate) fn eval_body(body: &[Stmt], env: &Environment) -> EvalResult {
    let mut result = Value::Nil;
    for stmt in body {
        result = eval_stmt(stmt, env)?;
    }
    Ok(result)
}

fn eval_stmt(stmt: &Stmt, env: &Environment) -> EvalResult {
    ensure_sufficient_stack(|| eval_stmt_inner(stmt, env))
}

fn eval_stmt_inner(stmt: &Stmt, env: &Environment) -> EvalResult {
    match &stmt.kind {
        StmtKind::VarDeclaration(decl) => control::eval_var_decl(decl, env),
        StmtKind::FnDeclaration(decl) => control::eval_fn_decl(decl, env),
        StmtKind::IfStatement(stmt) => control::eval_if(stmt, env),
        StmtKind::Expr(expr) => eval_expr(expr, env),
    }
}

pub(crate) fn eval_expr(expr: &Expr, env: &Environment) -> EvalResult {
    ensure_sufficient_stack(|| eval_expr_inner(expr, env))
}

fn eval_expr_inner(expr: &Expr, env: &Environment) -> EvalResult {
    match &expr.kind {
        ExprKind::NumericLiteral(n) => Ok(Value::Number(*n)),
        ExprKind::StringLiteral(s) => Ok(Value::string(s)),
        ExprKind::Identifier(name) => Ok(env.lookup_var(name)?),
        ExprKind::ObjectLiteral(properties) => expr::eval_object(properties, env),
        ExprKind::Member {
            object,
            property,
            computed,
        } => expr::eval_member(object, property, *computed, env),
        ExprKind::VarAssignment { assignee, value } => expr::eval_assignment(assignee, value, env),
        ExprKind::Binary { lhs, rhs, op } => {
            let lhs = eval_expr(lhs, env)?;
            let rhs = eval_expr(rhs, env)?;
            Ok(operators::eval_binary(*op, &lhs, &rhs)?)
        }
        ExprKind::Compare { lhs, rhs, op } => {
            let lhs = eval_expr(lhs, env)?;
            let rhs = eval_expr(rhs, env)?;
            Ok(operators::eval_compare(*op, &lhs, &rhs)?)
        }
        ExprKind::Call { callee, args } => call::eval_call(callee, args, env),
        ExprKind::FnDeclaration(decl) => control::eval_fn_decl(decl, env),
        ExprKind::WhileLoop { condition, body } => control::eval_while(condition, body, env),
        ExprKind::ReturnStmt(value) => control::eval_return(value.as_deref(), env),
        ExprKind::TryCatchStmt(stmt) => control::eval_try_catch(stmt, env),
    }
}
