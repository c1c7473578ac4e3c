//! Recursive-descent parser for VirtLang.
//!
//! [`produce_ast`] runs the lexer and parses the resulting tokens into a
//! [`Program`]. The grammar methods live in `grammar/` as `impl Parser`
//! blocks, one file per syntactic area.

mod cursor;
mod error;
mod grammar;

#[cfg(test)]
mod tests;

use tracing::debug;
use virt_ir::{Program, Token};

use cursor::Cursor;
pub use error::{ParseError, SyntaxError};

/// Parser state: a cursor over the token stream.
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    /// Create a parser over `tokens`. A trailing `Eof` is added if missing.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let body = self.parse_stmt_list(false)?;
        Ok(Program { body })
    }
}

/// Lex and parse `source` into a [`Program`].
pub fn produce_ast(source: &str) -> Result<Program, SyntaxError> {
    let tokens = virt_lexer::tokenize(source)?;
    debug!(tokens = tokens.len(), "lexed source");

    let program = Parser::new(tokens).parse_program()?;
    debug!(statements = program.body.len(), "parsed program");
    Ok(program)
}
