//! Grammar productions, split by syntactic area.
//!
//! - `stmt.rs`: statement dispatch, blocks, declarations, `if`
//! - `expr/mod.rs`: assignment down to the multiplicative fold
//! - `expr/postfix.rs`: member access and call chains
//! - `expr/primary.rs`: literals, grouping, `while`, `try`, `return`

mod expr;
mod stmt;
