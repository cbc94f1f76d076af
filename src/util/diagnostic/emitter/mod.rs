//! Diagnostic output

pub mod json;
pub mod text;

pub use json::JsonEmitter;
pub use text::TextEmitter;

use crate::util::config::DiagnosticsConfig;

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Colorize the severity and the indicator
    pub use_colors: bool,
    /// Print the offending source line
    pub show_source: bool,
    /// Indicator character under the offending column
    pub indicator: char,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_source: true,
            indicator: '^',
        }
    }
}

impl From<&DiagnosticsConfig> for EmitterConfig {
    fn from(config: &DiagnosticsConfig) -> Self {
        Self {
            use_colors: config.colors,
            show_source: config.show_source,
            indicator: config.indicator,
        }
    }
}
