//! Command handlers for the `virt` CLI.
//!
//! Shared helpers such as `read_file` live here in the module root.

mod debug;
mod repl;
mod run;

pub use debug::{format_tokens, lex_file, parse_file};
pub use repl::{repl_loop, run_repl, BANNER, PROMPT};
pub use run::{module_root, run_file, RunOptions};

/// Read a source file, or report why not and exit with status 1.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
