//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while inspecting a source document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The document is not a JSON object (missing, null, array, scalar).
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// The document carries a schema version other than the supported one.
    #[error("version {found} not supported, try {supported}")]
    UnsupportedVersion {
        /// Version found in the document, rendered as JSON.
        found: String,
        /// The only version this converter reads.
        supported: u64,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
