//! Function calls.

use virt_ir::Expr;

use super::{eval_body, eval_expr, EvalResult, Interrupt};
use crate::errors::not_callable;
use crate::value::FunctionValue;
use crate::{Environment, RuntimeError, Value};

/// The callee is evaluated first, then the arguments left to right, all in
/// the caller's scope.
pub(super) fn eval_call(callee: &Expr, args: &[Expr], env: &Environment) -> EvalResult {
    let callee = eval_expr(callee, env)?;

    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(eval_expr(arg, env)?);
    }

    match callee {
        Value::NativeFunction(native) => Ok(native.call(&values, env)?),
        Value::Function(func) => Ok(call_function(&func, values)?),
        other => Err(not_callable(other.type_name()).into()),
    }
}

/// Call a user function with already evaluated arguments.
///
/// The body runs in a new scope under the function's closure. Parameters
/// bind positionally: extra arguments are dropped, missing ones are nil.
#[tracing::instrument(level = "debug", skip_all, fields(name = func.name(), args = args.len()))]
pub fn call_function(func: &FunctionValue, args: Vec<Value>) -> Result<Value, RuntimeError> {
    let scope = func.closure.child();
    let mut args = args.into_iter();
    for param in &func.decl.params {
        scope.declare_var(param, args.next().unwrap_or(Value::Nil), false)?;
    }

    match eval_body(&func.decl.body, &scope) {
        Ok(value) | Err(Interrupt::Return(value)) => Ok(value),
        Err(Interrupt::Raise(error)) => Err(error),
    }
}
