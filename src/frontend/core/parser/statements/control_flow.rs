//! Control flow statement parsing
//! Handles if / else if / else chains and returns

use super::parse_body;
use crate::frontend::core::lexer::{Symbol, TokenKind};
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{symbol_for, ParseError, ParserState};
use crate::frontend::core::parser::BP_LOWEST;

/// Parse return statement: `ret expr` or `rev`
pub fn parse_return_stmt(state: &mut ParserState) -> Result<Stmt, ParseError> {
    let keyword = state.pop("'ret' or 'rev'")?;
    let kind = symbol_for(&keyword, "'ret' or 'rev'")?;

    let value = match kind {
        Symbol::FunctionReturn => Some(state.parse_expression(BP_LOWEST)?),
        _ => None,
    };

    Ok(Stmt::Return(ReturnStatement {
        kind,
        position: keyword.position,
        value,
    }))
}

/// Parse `if expr { body }` and its whole else chain
pub fn parse_if_stmt(state: &mut ParserState) -> Result<Stmt, ParseError> {
    let keyword = state.expect(TokenKind::Keyword, "if", "'if'")?;
    let condition = state.parse_expression(BP_LOWEST)?;
    let body = parse_body(state)?;
    let next = parse_else_chain(state)?;

    Ok(Stmt::Conditional(ConditionalStatement {
        kind: Symbol::ConditionalIf,
        position: keyword.position,
        condition: Some(condition),
        body,
        next,
    }))
}

/// Parse any `else if` links and an optional final `else`
fn parse_else_chain(
    state: &mut ParserState,
) -> Result<Option<Box<ConditionalStatement>>, ParseError> {
    // Terminators between `}` and `else` are dropped; without an `else`
    // one goes back to end the statement.
    let mut terminator = None;
    while state.at_terminator() {
        terminator = Some(state.pop("a terminator")?);
    }
    if !state.at(TokenKind::Keyword, "else") {
        if let Some(terminator) = terminator {
            state.restore(terminator);
        }
        return Ok(None);
    }

    let keyword = state.pop("'else'")?;
    state.skip_terminators();
    if state.at(TokenKind::Keyword, "if") {
        state.pop("'if'")?;
        let condition = state.parse_expression(BP_LOWEST)?;
        let body = parse_body(state)?;
        let next = parse_else_chain(state)?;
        return Ok(Some(Box::new(ConditionalStatement {
            kind: Symbol::ConditionalElseIf,
            position: keyword.position,
            condition: Some(condition),
            body,
            next,
        })));
    }

    let body = parse_body(state)?;
    Ok(Some(Box::new(ConditionalStatement {
        kind: Symbol::ConditionalElse,
        position: keyword.position,
        condition: None,
        body,
        next: None,
    })))
}
