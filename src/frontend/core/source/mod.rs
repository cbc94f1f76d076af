//! Source stream
//!
//! Character-level reader over one `.rat` source file. Tracks line/column,
//! supports exactly one level of pushback (`reverse`), whitespace skipping
//! with newline detection, and line re-seeking for diagnostic snippets.

use crate::util::span::Position;
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized source file extension
pub const SOURCE_EXTENSION: &str = "rat";

/// Source stream error
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid file extension: {} (expected a .rat file)", path.display())]
    InvalidExtension { path: PathBuf },
    #[error("unable to open file {}: {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot reverse at {position}: no character to un-read")]
    InvalidReverse { position: Position },
    #[error("line {requested} out of bounds (file has {available} lines)")]
    LineOutOfBounds { requested: usize, available: usize },
}

impl SourceError {
    /// Position attached to the error, if the error has one
    pub fn position(&self) -> Option<Position> {
        match self {
            SourceError::InvalidReverse { position } => Some(*position),
            _ => None,
        }
    }
}

/// Cursor state captured before a read so it can be undone
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    cursor: usize,
    line: usize,
    column: usize,
}

/// Backtracking character stream over a single source file
#[derive(Debug, Clone)]
pub struct SourceStream {
    name: String,
    chars: Vec<char>,
    cursor: usize,
    line: usize,
    column: usize,
    /// Set by a successful `read_char`, consumed by `reverse`.
    pending: Option<Snapshot>,
}

impl SourceStream {
    /// Open a `.rat` file.
    ///
    /// The extension is checked before the file system is touched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
            return Err(SourceError::InvalidExtension {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| SourceError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Opened {} ({} bytes)", path.display(), content.len());

        Ok(Self::from_source(path.display().to_string(), &content))
    }

    /// Build a stream over in-memory text. No extension check is applied.
    pub fn from_source(
        name: impl Into<String>,
        text: &str,
    ) -> Self {
        Self {
            name: name.into(),
            chars: text.chars().collect(),
            cursor: 0,
            line: 1,
            column: 1,
            pending: None,
        }
    }

    /// Name of the underlying file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the next character, or `None` at end of input
    pub fn read_char(&mut self) -> Option<char> {
        let Some(&ch) = self.chars.get(self.cursor) else {
            self.pending = None;
            return None;
        };

        self.pending = Some(Snapshot {
            cursor: self.cursor,
            line: self.line,
            column: self.column,
        });
        self.cursor += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Look at the next character without consuming it
    pub fn peek_char(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    /// Un-read the most recently read character.
    ///
    /// Only one character can be pushed back between two reads.
    pub fn reverse(&mut self) -> Result<(), SourceError> {
        let snapshot = self.pending.take().ok_or(SourceError::InvalidReverse {
            position: self.position(),
        })?;
        self.cursor = snapshot.cursor;
        self.line = snapshot.line;
        self.column = snapshot.column;
        Ok(())
    }

    /// Consume a run of whitespace, leaving the first non-whitespace
    /// character unread. Returns whether a newline was crossed.
    pub fn advance_whitespace(&mut self) -> bool {
        let mut crossed_newline = false;
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.read_char();
            if ch == '\n' {
                crossed_newline = true;
            }
        }
        crossed_newline
    }

    /// Rewind to the start of input
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.line = 1;
        self.column = 1;
        self.pending = None;
    }

    /// Number of lines in the file; a trailing newline does not open a new line
    pub fn line_count(&self) -> usize {
        if self.chars.is_empty() {
            return 0;
        }
        let newlines = self.chars.iter().filter(|&&c| c == '\n').count();
        if self.chars.last() == Some(&'\n') {
            newlines
        } else {
            newlines + 1
        }
    }

    /// Reset and scan forward to the beginning of line `line` (1-based)
    pub fn seek_line(
        &mut self,
        line: usize,
    ) -> Result<(), SourceError> {
        let available = self.line_count();
        if line == 0 || line > available {
            return Err(SourceError::LineOutOfBounds {
                requested: line,
                available,
            });
        }

        self.reset();
        while self.line < line {
            if self.read_char().is_none() {
                break;
            }
        }
        self.pending = None;
        Ok(())
    }

    /// Read the rest of the current line, consuming its newline
    pub fn read_line(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.read_char() {
            if ch == '\n' {
                break;
            }
            text.push(ch);
        }
        self.pending = None;
        if text.ends_with('\r') {
            text.pop();
        }
        text
    }

    /// Current line (1-based)
    pub fn line_num(&self) -> usize {
        self.line
    }

    /// Current column (1-based)
    pub fn col_num(&self) -> usize {
        self.column
    }

    /// Current position
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
