//! JSON diagnostic renderer

use crate::util::diagnostic::{Diagnostic, Severity};
use serde::Serialize;

/// One diagnostic, flattened for tooling
#[derive(Debug, Clone, Serialize)]
struct JsonDiagnostic<'a> {
    severity: Severity,
    message: &'a str,
    file: &'a str,
    line: Option<usize>,
    column: Option<usize>,
}

/// JSON diagnostic renderer
#[derive(Debug, Clone, Default)]
pub struct JsonEmitter {
    pretty: bool,
}

impl JsonEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-print instead of a single line
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn render(
        &self,
        diagnostic: &Diagnostic,
        file: &str,
    ) -> serde_json::Result<String> {
        let json = JsonDiagnostic {
            severity: diagnostic.severity,
            message: &diagnostic.message,
            file,
            line: diagnostic.position.map(|p| p.line),
            column: diagnostic.position.map(|p| p.column),
        };
        if self.pretty {
            serde_json::to_string_pretty(&json)
        } else {
            serde_json::to_string(&json)
        }
    }
}
