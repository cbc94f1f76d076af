//! Token types

use crate::frontend::core::source::SourceError;
use crate::util::span::Position;
use serde::Serialize;
use std::fmt;

/// Lexer error
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error("ambiguous token '{lexeme}' at {position}: both a numeric literal and an identifier")]
    AmbiguousToken { lexeme: String, position: Position },
    #[error("unrecognized token '{lexeme}' at {position}")]
    UnrecognizedToken { lexeme: String, position: Position },
    #[error("unterminated string literal starting at {position}")]
    UnterminatedString { position: Position },
    #[error("invalid character {ch:?} in string literal at {position}")]
    InvalidStringChar { ch: char, position: Position },
    #[error("unterminated char literal starting at {position}")]
    UnterminatedChar { position: Position },
    #[error("invalid char literal {lexeme} at {position}")]
    InvalidCharLiteral { lexeme: String, position: Position },
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl LexError {
    /// Where the offending token starts
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::AmbiguousToken { position, .. }
            | LexError::UnrecognizedToken { position, .. }
            | LexError::UnterminatedString { position }
            | LexError::InvalidStringChar { position, .. }
            | LexError::UnterminatedChar { position }
            | LexError::InvalidCharLiteral { position, .. } => Some(*position),
            LexError::Source(err) => err.position(),
        }
    }
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Identifier,
    Keyword,
    NumericLiteral,
    StringLiteral,
    CharLiteral,
    Punctuator,
    Operator,
    Type,
    CommentSeparator,
    CommentBody,
    StatementTerminator,
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::NumericLiteral => "NUMERIC_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::Punctuator => "PUNCTUATOR",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Type => "TYPE",
            TokenKind::CommentSeparator => "COMMENT_SEPARATOR",
            TokenKind::CommentBody => "COMMENT_BODY",
            TokenKind::StatementTerminator => "STATEMENT_TERMINATOR",
        };
        f.write_str(name)
    }
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Whether this token has the given kind and spelling
    pub fn is(
        &self,
        kind: TokenKind,
        lexeme: &str,
    ) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }

    pub fn is_terminator(&self) -> bool {
        self.kind == TokenKind::StatementTerminator
    }

    /// Whether this is the punctuator `ch`
    pub fn is_punct(
        &self,
        ch: char,
    ) -> bool {
        self.kind == TokenKind::Punctuator && self.lexeme.len() == 1 && self.lexeme.starts_with(ch)
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn col(&self) -> usize {
        self.position.column
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} '{}' @ {}", self.kind, self.lexeme, self.position)
    }
}
