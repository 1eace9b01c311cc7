//! Error types for the tab editor
//!
//! Engine mutations are total and never fail. Errors only arise when
//! untrusted input crosses the JavaScript boundary, when configuration is
//! malformed, or when an export step fails.

use thiserror::Error;

/// Errors raised while interpreting input or configuration
#[derive(Debug, Error)]
pub enum TabError {
    /// Fret number beyond the last fret
    #[error("Fret {0} out of range (must be 0-24)")]
    FretOutOfRange(u32),

    /// Single character that is not a technique symbol
    #[error("Unknown technique symbol: '{0}'")]
    UnknownSymbol(char),

    /// Fret text that is neither a number nor a symbol
    #[error("Invalid fret value: '{0}'")]
    InvalidFret(String),

    /// String index outside G..E
    #[error("String index {0} out of range (must be 0-3)")]
    StringOutOfRange(usize),

    /// Configuration rejected after parsing
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Errors raised while capturing or encoding an export
#[derive(Debug, Error)]
pub enum ExportError {
    /// No browser window or document is available
    #[error("No browser document available")]
    NoDocument,

    /// Canvas element or 2D context could not be created
    #[error("Canvas unavailable: {0}")]
    Canvas(String),

    /// Drawing or reading pixels failed
    #[error("Capture failed: {0}")]
    Capture(String),

    /// Artifact encoding failed
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// Snapshot has no pixels to export
    #[error("Snapshot is empty ({width}x{height})")]
    EmptySnapshot { width: u32, height: u32 },

    /// Writing the artifact failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Message shown to the user when an export does not complete
    pub fn user_message(&self) -> String {
        format!("Export failed, please retry ({})", self)
    }
}
