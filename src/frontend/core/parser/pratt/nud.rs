//! Prefix expression parsing (nud - null denotation)
//!
//! Literals, identifiers, calls, parenthesised groups and unary operators.

use crate::frontend::core::lexer::literals::numeric_type;
use crate::frontend::core::lexer::{Token, TokenKind};
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{symbol_for, ParseError, ParserState};
use crate::frontend::core::parser::pratt::precedence::*;

const EXPECT_EXPRESSION: &str = "an expression";

/// Extension trait for prefix parsing
pub trait PrefixParser {
    /// Parse the expression that starts at the current token
    fn parse_prefix(&mut self) -> Result<Expr, ParseError>;
}

impl PrefixParser for ParserState {
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let token = self.pop(EXPECT_EXPRESSION)?;
        match token.kind {
            TokenKind::NumericLiteral => Ok(Expr::Numeric {
                ty: numeric_type(&token.lexeme),
                value: token.lexeme,
                position: token.position,
            }),
            TokenKind::StringLiteral => Ok(Expr::String {
                value: token.lexeme,
                position: token.position,
            }),
            TokenKind::CharLiteral => Ok(Expr::Char {
                value: token.lexeme,
                position: token.position,
            }),
            TokenKind::Keyword if token.lexeme == "null" => Ok(Expr::Null {
                position: token.position,
            }),
            TokenKind::Identifier => self.parse_identifier_or_call(token),
            TokenKind::Punctuator if token.is_punct('(') => self.parse_group(),
            TokenKind::Operator if is_prefix_operator(&token) => self.parse_unary(token),
            _ => Err(ParseError::unexpected(&token, EXPECT_EXPRESSION)),
        }
    }
}

impl ParserState {
    /// `NAME` or `NAME(args)`; the call form needs `(` right after the name
    fn parse_identifier_or_call(
        &mut self,
        name: Token,
    ) -> Result<Expr, ParseError> {
        if !self.at_punct('(') {
            return Ok(Expr::Identifier(Identifier::new(name.lexeme, name.position)));
        }
        self.pop("'('")?;

        let mut args = Vec::new();
        if self.at_punct(')') {
            self.pop("')'")?;
        } else {
            loop {
                args.push(self.parse_expression(BP_LOWEST)?);
                let separator = self.pop("',' or ')'")?;
                if separator.is_punct(')') {
                    break;
                }
                if !separator.is_punct(',') {
                    return Err(ParseError::unexpected(&separator, "',' or ')'"));
                }
            }
        }

        Ok(Expr::Call {
            name: name.lexeme,
            args,
            position: name.position,
        })
    }

    /// `( expr )`; grouping leaves no node behind
    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        let inner = self.parse_expression(BP_LOWEST)?;
        self.expect_punct(')', "')'")?;
        Ok(inner)
    }

    /// Prefix `-`, `!` or `~`
    fn parse_unary(
        &mut self,
        op: Token,
    ) -> Result<Expr, ParseError> {
        let symbol = symbol_for(&op, "a unary operator")?;
        let operand = self.parse_expression(BP_UNARY)?;
        Ok(Expr::Unary {
            op: symbol,
            operand: Box::new(operand),
            position: op.position,
        })
    }
}
