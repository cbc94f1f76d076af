//! Declaration parsing - functions and variables
//!
//! Implements parsing for:
//! - Function declarations: `fn name(a, b) -> int { ... }` (also `fn_`, `fn?`, `fn/`)
//! - Variable declarations: `let name[: type] = expr`, `op name[: type] [= expr]`
//! - Typed declarations: `type name [= expr]`
//! - Expression statements

use super::parse_body;
use crate::frontend::core::lexer::{Symbol, TokenKind};
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{symbol_for, ParseError, ParserState};
use crate::frontend::core::parser::BP_LOWEST;

/// Parse a function declaration starting at its keyword
pub fn parse_function_stmt(state: &mut ParserState) -> Result<Stmt, ParseError> {
    let keyword = state.pop("a function keyword")?;
    let kind = symbol_for(&keyword, "a function keyword")?;
    let name = state.expect_kind(TokenKind::Identifier, "a function name")?;

    state.expect_punct('(', "'('")?;
    let mut params = Vec::new();
    if !state.at_punct(')') {
        loop {
            let param = state.expect_kind(TokenKind::Identifier, "a parameter name")?;
            params.push(Identifier::new(param.lexeme, param.position));
            if !state.at_punct(',') {
                break;
            }
            state.pop("','")?;
        }
    }
    state.expect_punct(')', "')'")?;

    let return_type = if state.at(TokenKind::Operator, "->") {
        state.pop("'->'")?;
        state.expect_type()?
    } else {
        Symbol::TypeVoid
    };

    let body = parse_body(state)?;

    Ok(Stmt::FunctionDecl(FunctionDecl {
        kind,
        name: name.lexeme,
        position: keyword.position,
        params,
        return_type,
        body,
    }))
}

/// Parse a `let` or `op` declaration; only `op` may omit the initializer
pub fn parse_var_stmt(state: &mut ParserState) -> Result<Stmt, ParseError> {
    let keyword = state.pop("'let' or 'op'")?;
    let kind = symbol_for(&keyword, "'let' or 'op'")?;
    let name = state.expect_kind(TokenKind::Identifier, "a variable name")?;

    let ty = if state.at_punct(':') {
        state.pop("':'")?;
        Some(state.expect_type()?)
    } else {
        None
    };

    let value = if kind == Symbol::VariableDeclarationLet {
        state.expect(TokenKind::Operator, "=", "'='")?;
        Some(state.parse_expression(BP_LOWEST)?)
    } else {
        parse_initializer(state)?
    };

    Ok(Stmt::VariableDecl(VariableDecl {
        kind,
        name: name.lexeme,
        position: keyword.position,
        ty,
        value,
    }))
}

/// Parse `TYPE name [= expr]`
pub fn parse_typed_var_stmt(state: &mut ParserState) -> Result<Stmt, ParseError> {
    let ty_token = state.expect_kind(TokenKind::Type, "a type")?;
    let ty = symbol_for(&ty_token, "a type")?;
    let name = state.expect_kind(TokenKind::Identifier, "a variable name")?;
    let value = parse_initializer(state)?;

    Ok(Stmt::VariableDecl(VariableDecl {
        kind: ty,
        name: name.lexeme,
        position: ty_token.position,
        ty: Some(ty),
        value,
    }))
}

/// Parse a bare expression as a statement
pub fn parse_expr_stmt(state: &mut ParserState) -> Result<Stmt, ParseError> {
    let position = state
        .peek()
        .map_or(state.last_position(), |t| t.position);
    let expr = state.parse_expression(BP_LOWEST)?;
    Ok(Stmt::Expression(ExpressionStatement { expr, position }))
}

/// Optional `= expr`
fn parse_initializer(state: &mut ParserState) -> Result<Option<Expr>, ParseError> {
    if !state.at(TokenKind::Operator, "=") {
        return Ok(None);
    }
    state.pop("'='")?;
    Ok(Some(state.parse_expression(BP_LOWEST)?))
}
