//! Statement parsing modules
//!
//! `parse_sequence` is the statement dispatcher: it walks one scope,
//! identifies each statement by its leading token, and checks that the
//! statement is properly terminated.

pub mod control_flow;
pub mod declarations;

pub use control_flow::*;
pub use declarations::*;

use crate::frontend::core::lexer::{Token, TokenKind};
use crate::frontend::core::parser::ast::Stmt;
use crate::frontend::core::parser::parser_state::{ParseError, ParserState};

const EXPECT_STATEMENT: &str = "a statement";
const EXPECT_END_OF_STATEMENT: &str = "end of statement";

/// Parse statements until the current scope ends.
///
/// A nested scope ends at its `}` (consumed here) and must have one; the
/// top-level scope ends with the input. A bare `{ ... }` block contributes
/// its statements to the enclosing sequence.
pub fn parse_sequence(
    state: &mut ParserState,
    nested: bool,
) -> Result<Vec<Stmt>, ParseError> {
    let mut stmts = Vec::new();

    loop {
        state.skip_terminators();

        let Some(token) = state.peek() else {
            if nested {
                return Err(ParseError::OutOfTokens {
                    expected: "'}'",
                    position: state.last_position(),
                });
            }
            return Ok(stmts);
        };

        if token.is_punct('{') {
            state.pop("'{'")?;
            let inner = parse_sequence(state, true)?;
            stmts.extend(inner);
            continue;
        }

        if token.is_punct('}') {
            if !nested {
                return Err(ParseError::unexpected(token, EXPECT_STATEMENT));
            }
            state.pop("'}'")?;
            return Ok(stmts);
        }

        let stmt = parse_statement(state)?;
        tracing::trace!("parsed {} at {}", stmt.kind_name(), stmt.position());
        expect_statement_end(state)?;
        stmts.push(stmt);
    }
}

/// Parse one statement, chosen by its leading token
pub fn parse_statement(state: &mut ParserState) -> Result<Stmt, ParseError> {
    let token = state.peek().ok_or(ParseError::OutOfTokens {
        expected: EXPECT_STATEMENT,
        position: state.last_position(),
    })?;

    match StatementStart::of(token)? {
        StatementStart::Function => parse_function_stmt(state),
        StatementStart::Variable => parse_var_stmt(state),
        StatementStart::TypedVariable => parse_typed_var_stmt(state),
        StatementStart::Conditional => parse_if_stmt(state),
        StatementStart::Return => parse_return_stmt(state),
        StatementStart::Expression => parse_expr_stmt(state),
    }
}

/// Statement form selected by a leading token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatementStart {
    Function,
    Variable,
    TypedVariable,
    Conditional,
    Return,
    Expression,
}

impl StatementStart {
    fn of(token: &Token) -> Result<Self, ParseError> {
        match (token.kind, token.lexeme.as_str()) {
            (TokenKind::Keyword, "fn" | "fn_" | "fn?" | "fn/") => Ok(StatementStart::Function),
            (TokenKind::Keyword, "let" | "op") => Ok(StatementStart::Variable),
            (TokenKind::Keyword, "if") => Ok(StatementStart::Conditional),
            (TokenKind::Keyword, "ret" | "rev") => Ok(StatementStart::Return),
            (TokenKind::Keyword, "else") => Err(ParseError::unexpected(token, EXPECT_STATEMENT)),
            (TokenKind::Type, _) => Ok(StatementStart::TypedVariable),
            _ => Ok(StatementStart::Expression),
        }
    }
}

/// `{ statements }` after skipping terminators before the brace
pub fn parse_body(state: &mut ParserState) -> Result<Vec<Stmt>, ParseError> {
    state.skip_terminators();
    state.expect_punct('{', "'{'")?;
    parse_sequence(state, true)
}

/// A statement ends at a terminator, a closing brace, or the end of input
fn expect_statement_end(state: &ParserState) -> Result<(), ParseError> {
    match state.peek() {
        None => Ok(()),
        Some(token) if token.is_terminator() || token.is_punct('}') => Ok(()),
        Some(token) => Err(ParseError::unexpected(token, EXPECT_END_OF_STATEMENT)),
    }
}
