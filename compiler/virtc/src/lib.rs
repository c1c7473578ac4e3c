//! VirtLang command-line front end.
//!
//! The binary in `main.rs` only parses arguments; the commands live here so
//! they can be tested without spawning a process.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
