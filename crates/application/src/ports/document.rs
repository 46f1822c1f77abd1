//! Document source and sink ports.

use std::path::PathBuf;

use porter_domain::InsomniaExport;

/// Error type for loading or storing documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Source document not found.
    #[error("Document not found: {0}")]
    NotFound(PathBuf),

    /// Source document is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Export could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Provides the parsed source document.
pub trait DocumentSource {
    /// Loads and parses the source document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or is not JSON.
    fn load(&self) -> Result<serde_json::Value, DocumentError>;
}

/// Persists the finished export.
pub trait DocumentSink {
    /// Writes the export in one go.
    ///
    /// # Errors
    ///
    /// Returns an error if the export cannot be serialized or written.
    fn store(&self, export: &InsomniaExport) -> Result<(), DocumentError>;
}
