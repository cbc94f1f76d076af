//! Precedence handling for the Pratt parser
//!
//! Binding powers mirror the expression ladder, lowest to highest:
//! logical, comparison, shift, additive, term, then prefix unary.
//! Every binary tier is left-associative.

use crate::frontend::core::lexer::{Token, TokenKind};

/// Binding power levels
pub const BP_LOWEST: u8 = 0;
pub const BP_LOGICAL: u8 = 1;
pub const BP_COMPARISON: u8 = 2;
pub const BP_SHIFT: u8 = 3;
pub const BP_ADDITIVE: u8 = 4;
pub const BP_TERM: u8 = 5;
pub const BP_UNARY: u8 = 6;

/// Precedence tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `||` `&&`
    Logical,
    /// `==` `!=` `<` `>` `<=` `>=`
    Comparison,
    /// `<<` `>>`
    Shift,
    /// `+` `-`
    Additive,
    /// `*` `/` `%`
    Term,
    /// prefix `-` `!` `~`
    Unary,
}

impl Precedence {
    /// Binding power of this tier
    pub fn binding_power(self) -> u8 {
        match self {
            Precedence::Lowest => BP_LOWEST,
            Precedence::Logical => BP_LOGICAL,
            Precedence::Comparison => BP_COMPARISON,
            Precedence::Shift => BP_SHIFT,
            Precedence::Additive => BP_ADDITIVE,
            Precedence::Term => BP_TERM,
            Precedence::Unary => BP_UNARY,
        }
    }

    /// Tier of a binary operator lexeme
    pub fn of_binary(lexeme: &str) -> Option<Self> {
        match lexeme {
            "||" | "&&" => Some(Precedence::Logical),
            "==" | "!=" | "<" | ">" | "<=" | ">=" => Some(Precedence::Comparison),
            "<<" | ">>" => Some(Precedence::Shift),
            "+" | "-" => Some(Precedence::Additive),
            "*" | "/" | "%" => Some(Precedence::Term),
            _ => None,
        }
    }
}

/// Infix binding power of a token, if it is a binary operator
pub fn infix_binding_power(token: &Token) -> Option<u8> {
    if token.kind != TokenKind::Operator {
        return None;
    }
    Precedence::of_binary(&token.lexeme).map(Precedence::binding_power)
}

/// Whether a token is a prefix unary operator
pub fn is_prefix_operator(token: &Token) -> bool {
    token.kind == TokenKind::Operator && matches!(token.lexeme.as_str(), "-" | "!" | "~")
}
