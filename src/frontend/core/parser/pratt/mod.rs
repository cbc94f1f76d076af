//! Pratt parser implementation
//! Handles expression parsing with binding power

pub mod led;
pub mod nud;
pub mod precedence;

pub use led::*;
pub use nud::*;
pub use precedence::*;

use crate::frontend::core::parser::ast::Expr;
use crate::frontend::core::parser::parser_state::{ParseError, ParserState};

impl ParserState {
    /// Parse an expression whose operators all bind at least `min_bp`
    pub fn parse_expression(
        &mut self,
        min_bp: u8,
    ) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_prefix()?;

        while let Some(bp) = self.peek().and_then(infix_binding_power) {
            if bp < min_bp {
                break;
            }
            lhs = self.parse_infix(lhs, bp)?;
        }

        Ok(lhs)
    }
}
