//! `virt run`: evaluate a script file.

use std::path::{Path, PathBuf};

use tracing::debug;
use virt_eval::{evaluate, GlobalEnvBuilder};

use super::{read_file, run_repl};

/// Flags accepted by `virt run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the parsed program before evaluating it.
    pub print_ast: bool,
    /// Enter the REPL afterwards, keeping the script's bindings.
    pub repl: bool,
}

/// Run `path` in a fresh global environment. Exits with status 1 on a
/// syntax or runtime error.
pub fn run_file(path: &str, options: RunOptions) {
    let source = read_file(path);

    let program = match virt_parse::produce_ast(&source) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("{path}: {err}");
            std::process::exit(1);
        }
    };
    if options.print_ast {
        println!("{program:#?}");
    }

    let root = module_root(path);
    debug!(path, module_root = %root.display(), "running script");
    let env = GlobalEnvBuilder::new().module_root(root).build();

    if let Err(err) = evaluate(&program, &env) {
        eprintln!("{path}: runtime error: {err}");
        std::process::exit(1);
    }

    if options.repl {
        run_repl(&env);
    }
}

/// Directory that `import` resolves against for a script: the script's own.
pub fn module_root(path: &str) -> PathBuf {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
