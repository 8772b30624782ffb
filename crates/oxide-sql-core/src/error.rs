//! Error types for dialect configuration.

use thiserror::Error;

/// Errors raised while selecting or configuring a dialect.
///
/// Identifier wrapping and pagination never fail; only turning names and
/// configuration documents into dialect settings can.
#[derive(Debug, Error)]
pub enum DialectError {
    /// The database product name is not recognized.
    #[error("unknown database type: {0}")]
    UnknownDbType(String),

    /// The pagination strategy name is not recognized.
    #[error("unknown limit/offset strategy: {0}")]
    UnknownLimitOffset(String),

    /// The configuration document could not be parsed.
    #[error("invalid dialect configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
