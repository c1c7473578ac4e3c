//! Runtime errors and their constructors.
//!
//! Every runtime failure message is built here, so the evaluator and the
//! natives report problems the same way. Scripts see the message as the
//! string bound by `catch`.

use std::fmt;
use std::path::Path;

use thiserror::Error;
use virt_ir::{BinaryOp, CompareOp};

use crate::Value;

/// A runtime failure. Only the message is observable to scripts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub message: String,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>) -> Self {
        RuntimeError {
            message: message.into(),
        }
    }
}

// Variables

#[cold]
pub fn variable_already_declared(name: &str) -> RuntimeError {
    RuntimeError::new(format!("variable already declared: {name}"))
}

#[cold]
pub fn assign_to_constant(name: &str) -> RuntimeError {
    RuntimeError::new(format!("cannot assign to constant: {name}"))
}

#[cold]
pub fn undefined_variable(name: &str) -> RuntimeError {
    RuntimeError::new(format!("cannot resolve variable: {name}"))
}

// Operators

/// Arithmetic on something other than two numbers.
#[cold]
pub fn invalid_binary_operands(op: BinaryOp, lhs: &Value, rhs: &Value) -> RuntimeError {
    RuntimeError::new(format!(
        "invalid operands for binary expression: {} {op} {}",
        lhs.type_name(),
        rhs.type_name()
    ))
}

/// Comparison of something other than two numbers.
#[cold]
pub fn invalid_compare_operands(op: CompareOp, lhs: &Value, rhs: &Value) -> RuntimeError {
    RuntimeError::new(format!(
        "invalid operands for compare expression: {} {op} {}",
        lhs.type_name(),
        rhs.type_name()
    ))
}

// Calls and members

#[cold]
pub fn not_callable(type_name: &str) -> RuntimeError {
    RuntimeError::new(format!("cannot call {type_name}"))
}

#[cold]
pub fn member_of_non_object(type_name: &str) -> RuntimeError {
    RuntimeError::new(format!("cannot access property of non-object: {type_name}"))
}

#[cold]
pub fn invalid_assignee() -> RuntimeError {
    RuntimeError::new("invalid assignee in assignment expression")
}

#[cold]
pub fn invalid_property_key(type_name: &str) -> RuntimeError {
    RuntimeError::new(format!("invalid property key: {type_name}"))
}

// Natives

/// A native was called with arguments it cannot use. `requirement` reads
/// as the rest of the sentence, e.g. "a number as argument".
#[cold]
pub fn native_expects(native: &str, requirement: &str) -> RuntimeError {
    RuntimeError::new(format!("`{native}` function expects {requirement}"))
}

#[cold]
pub fn module_not_found(name: &str, path: &Path) -> RuntimeError {
    RuntimeError::new(format!(
        "module not found: {name} (looked for {})",
        path.display()
    ))
}

#[cold]
pub fn module_load_failed(name: &str, reason: &dyn fmt::Display) -> RuntimeError {
    RuntimeError::new(format!("failed to load module {name}: {reason}"))
}
