//! Lexer module
//! Split into classifier tables, literal scanning, and the tokenizer proper

pub mod literals;
pub mod symbols;
pub mod tokenizer;
pub mod tokens;

// Re-export types
pub use symbols::{Symbol, SymbolTable, SYMBOLS};
pub use tokenizer::Lexer;
pub use tokens::{LexError, Token, TokenKind};

use crate::frontend::core::source::SourceStream;

/// Tokenize a whole source stream
pub fn tokenize(source: SourceStream) -> Result<Vec<Token>, LexError> {
    tracing::debug!("lexing {}", source.name());

    let mut lexer = Lexer::new(source);
    lexer.run()?;
    let (tokens, source) = lexer.into_parts();

    tracing::debug!(
        "lexing complete: {} tokens from {} lines",
        tokens.len(),
        source.line_count()
    );
    Ok(tokens)
}

/// Tokenize in-memory text
pub fn tokenize_str(text: &str) -> Result<Vec<Token>, LexError> {
    tokenize(SourceStream::from_source("<input>", text))
}

#[cfg(test)]
mod tests;
