//! Conversion settings.

use porter_domain::{PAIR_ID_LENGTH, RESOURCE_ID_LENGTH};

/// Options for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Random characters in workspace, api-spec and base-environment ids
    /// (default: 20)
    pub id_length: usize,
    /// Random characters in pair ids (default: 10)
    pub pair_id_length: usize,
    /// Workspace name, followed by the conversion timestamp
    /// (default: "Postman Dump")
    pub workspace_name_prefix: String,
    /// Name of the shared parent environment (default: "Base Environment")
    pub base_environment_name: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            id_length: RESOURCE_ID_LENGTH,
            pair_id_length: PAIR_ID_LENGTH,
            workspace_name_prefix: "Postman Dump".to_string(),
            base_environment_name: "Base Environment".to_string(),
        }
    }
}
