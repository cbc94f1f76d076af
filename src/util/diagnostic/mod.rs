//! Diagnostic reporting
//!
//! Turns pipeline errors into [`Diagnostic`]s and renders them.
//!
//! # Module layout
//!
//! - [`conversion`] - `CompileError` → `Diagnostic`
//! - [`emitter`] - text (caret snippet) and JSON renderers
//!
//! # Example
//!
//! ```ignore
//! use ratc::util::diagnostic::{Diagnostic, TextEmitter};
//!
//! let diagnostic = Diagnostic::from(&err);
//! let output = TextEmitter::new().render(&diagnostic, &mut source);
//! eprint!("{}", output);
//! ```

pub mod conversion;
pub mod emitter;

pub use emitter::{EmitterConfig, JsonEmitter, TextEmitter};

use crate::util::span::Position;
use serde::Serialize;
use std::fmt;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A rendered-ready report: what went wrong and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub position: Option<Position>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            position: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            position: None,
        }
    }

    /// Attach a source position
    pub fn at(
        mut self,
        position: Position,
    ) -> Self {
        self.position = Some(position);
        self
    }
}
