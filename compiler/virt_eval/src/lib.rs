//! Tree-walking evaluator for VirtLang.
//!
//! # Architecture
//!
//! - [`Value`]: runtime values; objects and functions are shared references
//! - [`Environment`]: chained lexical scopes
//! - `exec`: evaluation by AST node kind
//! - [`GlobalEnvBuilder`]: root environments with the native library
//! - [`errors`]: every runtime error message
//!
//! Hosts usually need only [`run_source`] and [`create_global_env`].

mod environment;
pub mod errors;
mod exec;
mod globals;
mod print_handler;
mod value;

use thiserror::Error;
use virt_parse::SyntaxError;

pub use environment::Environment;
pub use errors::RuntimeError;
pub use exec::{call_function, evaluate};
pub use globals::{create_global_env, GlobalEnvBuilder};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::{format_number, FunctionValue, NativeFn, NativeFunction, ObjectMap, Value};

/// Failure of [`run_source`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Parse `source` and evaluate it in `env`.
pub fn run_source(source: &str, env: &Environment) -> Result<Value, ProgramError> {
    let program = virt_parse::produce_ast(source)?;
    Ok(evaluate(&program, env)?)
}
