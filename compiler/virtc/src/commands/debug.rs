//! Debug commands: `lex` and `parse` for inspecting the front end.

use virt_lexer::LexError;

use super::read_file;

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    match format_tokens(&content) {
        Ok(listing) => {
            println!("Tokens for '{path}':");
            print!("{listing}");
        }
        Err(err) => {
            eprintln!("{path}: lexer error: {err}");
            std::process::exit(1);
        }
    }
}

/// One line per token: position, kind, and text.
pub fn format_tokens(source: &str) -> Result<String, LexError> {
    let tokens = virt_lexer::tokenize(source)?;
    Ok(tokens
        .iter()
        .map(|token| {
            format!(
                "  {}:{} {:?} {:?}\n",
                token.line, token.col, token.kind, token.value
            )
        })
        .collect())
}

/// Parse a file and print the AST.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match virt_parse::produce_ast(&content) {
        Ok(program) => {
            println!("Parse result for '{path}' ({} statements):", program.body.len());
            println!("{program:#?}");
        }
        Err(err) => {
            eprintln!("{path}: {err}");
            std::process::exit(1);
        }
    }
}
