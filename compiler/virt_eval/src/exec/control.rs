//! Declarations and control flow.

use std::rc::Rc;

use tracing::debug;
use virt_ir::{Expr, FnDeclaration, IfStatement, Stmt, TryCatchStmt, VarDeclaration};

use super::{eval_body, eval_expr, EvalResult, Interrupt};
use crate::{Environment, Value};

pub(super) fn eval_var_decl(decl: &VarDeclaration, env: &Environment) -> EvalResult {
    let value = match &decl.value {
        Some(expr) => eval_expr(expr, env)?,
        None => Value::Nil,
    };
    Ok(env.declare_var(&decl.name, value, decl.constant)?)
}

/// Capture `env` as the closure. Named functions are also bound as
/// constants in `env`.
pub(super) fn eval_fn_decl(decl: &Rc<FnDeclaration>, env: &Environment) -> EvalResult {
    let func = Value::function(Rc::clone(decl), env.clone());
    if decl.anonymous {
        return Ok(func);
    }
    Ok(env.declare_var(&decl.name, func, true)?)
}

/// Runs the body only for `Boolean(true)`. Always nil.
pub(super) fn eval_if(stmt: &IfStatement, env: &Environment) -> EvalResult {
    if eval_expr(&stmt.condition, env)?.is_true() {
        eval_body(&stmt.body, &env.child())?;
    }
    Ok(Value::Nil)
}

/// Each iteration gets a fresh scope. A `return` in the body leaves the
/// loop and keeps unwinding.
pub(super) fn eval_while(condition: &Expr, body: &[Stmt], env: &Environment) -> EvalResult {
    while eval_expr(condition, env)?.is_true() {
        eval_body(body, &env.child())?;
    }
    Ok(Value::Nil)
}

pub(super) fn eval_return(value: Option<&Expr>, env: &Environment) -> EvalResult {
    let value = match value {
        Some(expr) => eval_expr(expr, env)?,
        None => Value::Nil,
    };
    Err(Interrupt::Return(value))
}

/// Runtime errors from the try body bind their message in the catch scope.
/// `return` passes straight through. Always nil.
pub(super) fn eval_try_catch(stmt: &TryCatchStmt, env: &Environment) -> EvalResult {
    let error = match eval_body(&stmt.try_body, &env.child()) {
        Ok(_) => return Ok(Value::Nil),
        Err(Interrupt::Raise(error)) => error,
        Err(ret @ Interrupt::Return(_)) => return Err(ret),
    };
    debug!(%error, "caught runtime error");

    let scope = env.child();
    let message = Value::string(&error.message);
    if scope.has_local(&stmt.catch_var) {
        scope.assign_var(&stmt.catch_var, message)?;
    } else {
        scope.declare_var(&stmt.catch_var, message, false)?;
    }

    eval_body(&stmt.catch_body, &scope)?;
    Ok(Value::Nil)
}
