//! ratc - front end for the Rat language
//!
//! Reads a `.rat` source file, splits it into tokens, and builds an abstract
//! syntax tree.
//!
//! # Example
//!
//! ```no_run
//! use ratc::compile_file;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let program = compile_file(Path::new("main.rat"))?;
//!     println!("{} statements", program.len());
//!     Ok(())
//! }
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;

// Utility modules
pub mod util;

// Re-exports
pub use frontend::core::lexer::{Token, TokenKind};
pub use frontend::core::parser::{Expr, Stmt};
pub use frontend::{CompileError, Compiler};

use std::path::Path;
use tracing::debug;

/// Compiler version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compiler name
pub const NAME: &str = "ratc";

/// Lex and parse a `.rat` file into its top-level statements
pub fn compile_file(path: &Path) -> Result<Vec<Stmt>, CompileError> {
    debug!("compile_file: {}", path.display());
    Compiler::new().parse_file(path)
}
