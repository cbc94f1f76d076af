//! Core algorithm layer
//! Source stream, lexer and parser, each in its own module

pub mod lexer;
pub mod parser;
pub mod source;

// Re-export commonly used items
pub use lexer::{tokenize, tokenize_str};
pub use parser::{parse, parse_expression};
pub use source::SourceStream;
