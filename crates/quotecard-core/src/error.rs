//! Error types for quote card generation

use thiserror::Error;

/// Errors raised while assembling runtime configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The rendering service origin could not be parsed as a URL
    #[error("Invalid origin URL '{origin}': {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    /// The origin parsed but cannot carry a path (e.g. `mailto:`)
    #[error("Origin URL cannot be used as a base: {0}")]
    OriginNotBase(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for a quote configuration
    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure to place text on the system clipboard.
///
/// Both variants surface to the user as the same generic toast; the
/// distinction only matters for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is reachable from this process
    #[error("Clipboard not available: {0}")]
    Unavailable(String),

    /// A clipboard exists but refused the write
    #[error("Clipboard write rejected: {0}")]
    Denied(String),
}

/// Result type alias using ConfigError
pub type QuoteResult<T> = Result<T, ConfigError>;
