//! JSON output for token and AST dumps

use serde::Serialize;
use std::io::Write;

/// Output error
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("cannot serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Pretty-print `value` as one JSON document followed by a newline.
///
/// Nothing is written unless serialization succeeds.
pub fn write_json<W: Write, T: Serialize>(
    mut out: W,
    value: &T,
) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
