//! Frontend compilation pipeline
//!
//! This module contains the source stream, lexer, and parser.
//! The frontend transforms a `.rat` file into a token stream and then an AST.

use crate::frontend::core::lexer::{LexError, Token};
use crate::frontend::core::parser::{ParseError, Stmt};
use crate::frontend::core::source::{SourceError, SourceStream};
use crate::util::span::Position;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub mod core;

/// Compiler front end
///
/// Stateless between runs; each call owns its stream, tokens and tree.
#[derive(Debug, Default)]
pub struct Compiler;

impl Compiler {
    /// Create a new compiler
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Lex a `.rat` file
    pub fn tokenize_file(
        &self,
        path: &Path,
    ) -> Result<Vec<Token>, CompileError> {
        let source = SourceStream::open(path)?;
        self.tokenize(source)
    }

    /// Lex and parse a `.rat` file
    pub fn parse_file(
        &self,
        path: &Path,
    ) -> Result<Vec<Stmt>, CompileError> {
        let tokens = self.tokenize_file(path)?;
        self.parse_tokens(tokens)
    }

    /// Lex and parse in-memory text
    pub fn parse_source(
        &self,
        name: &str,
        text: &str,
    ) -> Result<Vec<Stmt>, CompileError> {
        debug!("Compiling {} ({} bytes)", name, text.len());
        let tokens = self.tokenize(SourceStream::from_source(name, text))?;
        self.parse_tokens(tokens)
    }

    fn tokenize(
        &self,
        source: SourceStream,
    ) -> Result<Vec<Token>, CompileError> {
        let tokens = core::lexer::tokenize(source)?;
        debug!("Tokenized into {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Parse an already lexed token sequence
    pub fn parse_tokens(
        &self,
        tokens: Vec<Token>,
    ) -> Result<Vec<Stmt>, CompileError> {
        let program = core::parser::parse(tokens)?;
        debug!("Parsing successful, got {} statements", program.len());
        Ok(program)
    }
}

/// Compilation errors
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CompileError {
    /// Where the problem was detected, when it maps to a source location
    pub fn position(&self) -> Option<Position> {
        match self {
            CompileError::Source(err) => err.position(),
            CompileError::Lex(err) => err.position(),
            CompileError::Parse(err) => Some(err.position()),
        }
    }

    /// Pipeline stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            CompileError::Source(_) | CompileError::Lex(LexError::Source(_)) => "source",
            CompileError::Lex(_) => "lexer",
            CompileError::Parse(_) => "parser",
        }
    }
}

#[cfg(test)]
mod tests;
