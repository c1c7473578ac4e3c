//! `virt`: the VirtLang interpreter.

use virtc::commands::{lex_file, parse_file, run_file, run_repl, RunOptions};

fn main() {
    virtc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: virt run <file.vl> [--ast] [--repl]");
                std::process::exit(1);
            };
            let mut options = RunOptions::default();
            for flag in &args[3..] {
                match flag.as_str() {
                    "--ast" => options.print_ast = true,
                    "--repl" => options.repl = true,
                    other => {
                        eprintln!("Unknown option for run: {other}");
                        std::process::exit(1);
                    }
                }
            }
            run_file(path, options);
        }
        "repl" => {
            let env = virt_eval::create_global_env();
            run_repl(&env);
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: virt lex <file.vl>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: virt parse <file.vl>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("VirtLang {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // Bare script path: `virt script.vl`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("vl"))
            {
                run_file(command, RunOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("VirtLang interpreter");
    println!();
    println!("Usage: virt <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.vl>       Run a script");
    println!("    --ast             Print the parsed program first");
    println!("    --repl            Enter the REPL after the script finishes");
    println!("  repl                Start an interactive session");
    println!("  lex <file.vl>       Print the token stream");
    println!("  parse <file.vl>     Print the AST");
    println!("  help                Show this message");
    println!("  version             Show version information");
    println!();
    println!("Set VIRT_LOG (e.g. VIRT_LOG=virt_eval=debug) for diagnostic output.");
}
