//! Error conversion into diagnostics

use super::Diagnostic;
use crate::frontend::CompileError;

impl From<&CompileError> for Diagnostic {
    fn from(err: &CompileError) -> Self {
        let diagnostic = Diagnostic::error(format!("{} error: {}", err.stage(), err));
        match err.position() {
            Some(position) => diagnostic.at(position),
            None => diagnostic,
        }
    }
}
