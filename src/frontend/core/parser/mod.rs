//! Parser module
//!
//! Recursive descent over statements, with a Pratt parser for expressions.
//! This module provides the main entry points for parsing tokens into an AST.

pub mod ast;
pub mod parser_state;
pub mod pratt;
pub mod statements;
#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use ast::*;
pub use parser_state::{ParseError, ParserState};
pub use pratt::*;

use crate::frontend::core::lexer::Token;

/// Parse a token sequence into a program
///
/// # Arguments
/// * `tokens` - Token stream from the lexer
///
/// # Returns
/// The top-level statements in source order, or the first parse error
///
/// # Example
/// ```text
/// fn add(a, b) -> int {
///     ret a + b
/// }
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, ParseError> {
    tracing::debug!("parsing {} tokens", tokens.len());

    let mut state = ParserState::new(tokens);
    let program = statements::parse_sequence(&mut state, false)?;

    tracing::debug!("parsing complete: {} statements", program.len());
    Ok(program)
}

/// Parse a single expression; only terminators may follow it
pub fn parse_expression(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    let mut state = ParserState::new(tokens);
    state.skip_terminators();
    let expr = state.parse_expression(BP_LOWEST)?;
    state.skip_terminators();

    match state.peek() {
        None => Ok(expr),
        Some(token) => Err(ParseError::unexpected(token, "end of expression")),
    }
}
