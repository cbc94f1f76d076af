//! Parser tests module
//!
//! - statements: declarations, conditionals, returns, scopes
//! - expressions: precedence, associativity, primaries
//! - errors: error kinds and positions
//! - fuzz: proptest-generated programs


use crate::frontend::core::lexer::tokenize_str;
use crate::frontend::core::parser::{parse, parse_expression, Expr, ParseError, Stmt};

/// Lex and parse, panicking on error
pub(crate) fn parse_ok(source: &str) -> Vec<Stmt> {
    parse(tokenize_str(source).unwrap()).unwrap()
}

/// Lex and parse, expecting a parse error
pub(crate) fn parse_err(source: &str) -> ParseError {
    parse(tokenize_str(source).unwrap()).unwrap_err()
}

/// Parse a lone expression
pub(crate) fn expr(source: &str) -> Expr {
    parse_expression(tokenize_str(source).unwrap()).unwrap()
}

/// Prefix rendering of a lone expression
pub(crate) fn render(source: &str) -> String {
    expr(source).to_string()
}
