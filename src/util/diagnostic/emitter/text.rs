//! Text diagnostic renderer
//!
//! ```text
//! error: parser error: unexpected token '2' at 1:11, expected end of statement
//!  --> main.rat:1:11
//!   |
//! 1 | let x = 1 2
//!   |           ^
//! ```

use super::EmitterConfig;
use crate::frontend::core::source::SourceStream;
use crate::util::diagnostic::{Diagnostic, Severity};
use owo_colors::OwoColorize;

/// Text diagnostic renderer
#[derive(Debug, Clone, Default)]
pub struct TextEmitter {
    config: EmitterConfig,
}

impl TextEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// Render a diagnostic, re-reading the offending line from `source`
    pub fn render(
        &self,
        diagnostic: &Diagnostic,
        source: &mut SourceStream,
    ) -> String {
        let mut output = self.render_header(diagnostic);

        let Some(position) = diagnostic.position else {
            return output;
        };

        let gutter = position.line.to_string().len();
        output.push_str(&format!(
            "{}--> {}:{}\n",
            " ".repeat(gutter),
            source.name(),
            position
        ));

        if self.config.show_source {
            if let Some(line) = Self::source_line(source, position.line) {
                let pad = " ".repeat(gutter);
                let marker = self.paint_indicator(diagnostic.severity);
                output.push_str(&format!("{} |\n", pad));
                output.push_str(&format!("{} | {}\n", position.line, line));
                output.push_str(&format!(
                    "{} | {}{}\n",
                    pad,
                    indent_for(&line, position.column),
                    marker
                ));
            }
        }

        output
    }

    fn render_header(
        &self,
        diagnostic: &Diagnostic,
    ) -> String {
        let severity = diagnostic.severity.to_string();
        let severity = if self.config.use_colors {
            match diagnostic.severity {
                Severity::Error => severity.red().bold().to_string(),
                Severity::Warning => severity.yellow().bold().to_string(),
            }
        } else {
            severity
        };
        format!("{}: {}\n", severity, diagnostic.message)
    }

    fn paint_indicator(
        &self,
        severity: Severity,
    ) -> String {
        let indicator = self.config.indicator.to_string();
        if !self.config.use_colors {
            return indicator;
        }
        match severity {
            Severity::Error => indicator.red().bold().to_string(),
            Severity::Warning => indicator.yellow().bold().to_string(),
        }
    }

    /// The text of line `line`, or `None` if the stream has no such line
    fn source_line(
        source: &mut SourceStream,
        line: usize,
    ) -> Option<String> {
        match source.seek_line(line) {
            Ok(()) => Some(source.read_line()),
            Err(err) => {
                tracing::debug!("no snippet: {}", err);
                None
            }
        }
    }
}

/// Whitespace that lines the indicator up under `column`; tabs are kept
fn indent_for(
    line: &str,
    column: usize,
) -> String {
    line.chars()
        .take(column.saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}
