//! `virt repl`: read, evaluate, print.

use std::io::{self, BufRead, Write};

use virt_eval::{run_source, Environment};

pub const BANNER: &str = concat!("Welcome to the VirtLang REPL v", env!("CARGO_PKG_VERSION"), "!");
pub const PROMPT: &str = ">>> ";

/// Run the REPL on stdin/stdout against `env`.
pub fn run_repl(env: &Environment) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = repl_loop(stdin.lock(), stdout.lock(), env) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// The REPL over arbitrary streams.
///
/// Empty lines are skipped. `exit` or end of input stops the loop. Each
/// result is printed; errors are printed and the loop carries on with the
/// same environment.
pub fn repl_loop<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    env: &Environment,
) -> io::Result<()> {
    writeln!(output, "{BANNER}")?;
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if entry == "exit" {
            return Ok(());
        }

        match run_source(entry, env) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
