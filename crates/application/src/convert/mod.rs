//! Postman dump to Insomnia export conversion.
//!
//! The [`Converter`] drives a single pass over the dump: root records first,
//! then each collection's folder tree followed by its requests, then the
//! environments. Every record goes into one [`ResourceList`] owned by the
//! conversion call.

mod converter;
mod environment_mapper;
mod folder_tree;
mod ids;
mod request_mapper;
mod resource_list;
mod warning;

pub use converter::{Conversion, ConversionReport, Converter};
pub use environment_mapper::{map_environment, sanitize_variable_name};
pub use folder_tree::{FolderTree, MAX_FOLDER_DEPTH, build_folder_tree};
pub use ids::IdGenerator;
pub use request_mapper::{PairFactory, map_auth, map_body, map_headers, map_query_params, map_request};
pub use resource_list::ResourceList;
pub use warning::{ConversionWarning, WarningSeverity, WarningStats};

#[cfg(test)]
pub(crate) use ids::tests::SequenceRandom;
