//! Parser state and error handling

use crate::frontend::core::lexer::symbols::symbol_of;
use crate::frontend::core::lexer::{Symbol, Token, TokenKind};
use crate::util::span::Position;
use std::collections::VecDeque;

/// Parse error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A token that cannot appear here
    #[error("unexpected token '{found}' at {position}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        position: Position,
    },
    /// Input ended while something was still required
    #[error("out of tokens after {position}, expected {expected}")]
    OutOfTokens {
        expected: &'static str,
        position: Position,
    },
}

impl ParseError {
    /// Unexpected-token error at `token`
    pub fn unexpected(
        token: &Token,
        expected: &'static str,
    ) -> Self {
        ParseError::UnexpectedToken {
            found: token.lexeme.clone(),
            expected,
            position: token.position,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::OutOfTokens { position, .. } => *position,
        }
    }
}

/// Parser state: a double-ended token queue with pop / peek / restore
///
/// Comment tokens never reach the grammar; they are dropped on construction.
/// Terminators that end up adjacent once a comment line is gone are merged,
/// so the queue never holds two in a row.
pub struct ParserState {
    tokens: VecDeque<Token>,
    last_position: Position,
}

impl ParserState {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut queue: VecDeque<Token> = VecDeque::new();
        for token in tokens {
            if matches!(token.kind, TokenKind::CommentSeparator | TokenKind::CommentBody) {
                continue;
            }
            if token.is_terminator() && queue.back().is_some_and(Token::is_terminator) {
                continue;
            }
            queue.push_back(token);
        }
        Self {
            tokens: queue,
            last_position: Position::start(),
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Position of the most recently consumed token
    pub fn last_position(&self) -> Position {
        self.last_position
    }

    /// Take the next token; an empty queue is `OutOfTokens`
    pub fn pop(
        &mut self,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        let token = self.tokens.pop_front().ok_or(ParseError::OutOfTokens {
            expected,
            position: self.last_position,
        })?;
        self.last_position = token.position;
        Ok(token)
    }

    /// Put a token back at the front
    pub fn restore(
        &mut self,
        token: Token,
    ) {
        self.tokens.push_front(token);
    }

    pub fn at(
        &self,
        kind: TokenKind,
        lexeme: &str,
    ) -> bool {
        self.peek().is_some_and(|t| t.is(kind, lexeme))
    }

    pub fn at_punct(
        &self,
        ch: char,
    ) -> bool {
        self.peek().is_some_and(|t| t.is_punct(ch))
    }

    pub fn at_terminator(&self) -> bool {
        self.peek().is_some_and(Token::is_terminator)
    }

    pub fn skip_terminators(&mut self) {
        while self.at_terminator() {
            if let Some(token) = self.tokens.pop_front() {
                self.last_position = token.position;
            }
        }
    }

    /// Consume a token of the given kind
    pub fn expect_kind(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        let token = self.pop(expected)?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::unexpected(&token, expected))
        }
    }

    /// Consume the given punctuator
    pub fn expect_punct(
        &mut self,
        ch: char,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        let token = self.pop(expected)?;
        if token.is_punct(ch) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(&token, expected))
        }
    }

    /// Consume the exact token `kind` / `lexeme`
    pub fn expect(
        &mut self,
        kind: TokenKind,
        lexeme: &str,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        let token = self.pop(expected)?;
        if token.is(kind, lexeme) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(&token, expected))
        }
    }

    /// Consume a type name and resolve its symbol
    pub fn expect_type(&mut self) -> Result<Symbol, ParseError> {
        let token = self.expect_kind(TokenKind::Type, "a type")?;
        symbol_for(&token, "a type")
    }
}

/// Symbol of a token's lexeme
pub fn symbol_for(
    token: &Token,
    expected: &'static str,
) -> Result<Symbol, ParseError> {
    symbol_of(&token.lexeme).ok_or_else(|| ParseError::unexpected(token, expected))
}
