//! Porter Domain - Core data types
//!
//! This crate defines both sides of the conversion:
//! - the Postman dump (schema version 1) that is read
//! - the Insomnia export (format 4) that is produced
//!
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod id;
pub mod insomnia;
pub mod source;

pub use error::{DomainError, DomainResult};
pub use id::{ID_ALPHABET, PAIR_ID_LENGTH, RESOURCE_ID_LENGTH, ResourceKind, normalize_id};
pub use insomnia::{
    ApiSpecResource, Authentication, EnvironmentResource, InsomniaExport, Pair, RequestBody,
    RequestGroupResource, RequestResource, Resource, WorkspaceResource,
};
pub use source::{
    DumpAuth, DumpAuthParam, DumpCollection, DumpDocument, DumpEnvVariable, DumpEnvironment, DumpFolder,
    DumpKeyValue, DumpQueryParam, DumpRequest, FolderNode, SUPPORTED_VERSION,
    ensure_supported_version,
};
