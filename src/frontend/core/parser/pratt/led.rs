//! Infix expression parsing (led - left denotation)

use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{symbol_for, ParseError, ParserState};
use crate::frontend::core::parser::pratt::precedence::*;

/// Extension trait for infix parsing
pub trait InfixParser {
    /// Fold the binary operator at the front onto `lhs`
    fn parse_infix(
        &mut self,
        lhs: Expr,
        bp: u8,
    ) -> Result<Expr, ParseError>;
}

impl InfixParser for ParserState {
    fn parse_infix(
        &mut self,
        lhs: Expr,
        bp: u8,
    ) -> Result<Expr, ParseError> {
        let op = self.pop("a binary operator")?;
        let symbol = symbol_for(&op, "a binary operator")?;
        // Right side binds tighter, which keeps every tier left-associative.
        let rhs = self.parse_expression(bp + 1)?;
        Ok(Expr::Binary {
            op: symbol,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            position: op.position,
        })
    }
}
