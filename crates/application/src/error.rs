//! Conversion error types

use thiserror::Error;
use porter_domain::DomainError;

/// Structural errors that abort a conversion before anything is written.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The document failed version or shape validation.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The document does not match the dump schema on a field the
    /// conversion needs.
    #[error("invalid dump format: {0}")]
    InvalidFormat(String),

    /// Two folders of one collection share an identifier.
    #[error("duplicate folder id '{folder}' in collection '{collection}'")]
    DuplicateFolder {
        /// Source id of the collection.
        collection: String,
        /// Source id shared by the folders.
        folder: String,
    },

    /// A folder is listed as a child by more than one ordering list.
    #[error("folder '{folder}' is listed under more than one parent")]
    FolderClaimedTwice {
        /// Source id of the folder.
        folder: String,
    },

    /// Folder nesting goes deeper than the converter follows.
    #[error("folder '{folder}' is nested more than {limit} levels deep")]
    FolderTooDeep {
        /// Source id of the first folder past the limit.
        folder: String,
        /// Deepest nesting accepted.
        limit: usize,
    },

    /// Two destination records ended up with the same `_id`.
    #[error("duplicate resource id '{0}'")]
    DuplicateResourceId(String),
}

/// Result type alias for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;
