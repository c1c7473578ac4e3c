//! Stack growth for the recursive-descent parser and the tree-walking evaluator.
//!
//! Both walk the program recursively, so a deeply nested expression such as
//! `((((...))))` or a long chain of nested calls can exhaust the native
//! stack. Wrapping the recursive entry points in [`ensure_sufficient_stack`]
//! grows the stack on demand instead.
//!
//! Unbounded recursion in a VirtLang program is still unbounded: growth only
//! moves the limit from the thread stack to available memory.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval_expr(expr: &Expr, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| dispatch(expr, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
