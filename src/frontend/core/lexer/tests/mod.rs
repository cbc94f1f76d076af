//! Lexer tests module
//!
//! - basic: identifiers, whitespace, terminators, positions
//! - literals: numeric, string and char literals
//! - keywords: keywords and built-in types
//! - operators: operators and punctuators
//! - comments: line comments
//! - errors: error reporting
//! - symbols: classifier and symbol tables
//! - properties: proptest checks over generated input


use crate::frontend::core::lexer::{tokenize_str, Token, TokenKind};

/// Tokenize, panicking on error
pub(crate) fn lex(source: &str) -> Vec<Token> {
    tokenize_str(source).unwrap()
}

/// Kinds of all tokens
pub(crate) fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).iter().map(|t| t.kind).collect()
}

/// Lexemes of all tokens
pub(crate) fn lexemes(source: &str) -> Vec<String> {
    lex(source).into_iter().map(|t| t.lexeme).collect()
}
