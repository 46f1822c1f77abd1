//! Dump environment type definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{default_true, null_as_default, scalar_as_string};

/// Named variable set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpEnvironment {
    /// Environment ID
    pub id: String,
    /// Environment name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Environment variables
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<DumpEnvVariable>,
}

/// Environment variable entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpEnvVariable {
    /// Variable key/name
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub key: String,
    /// Variable value, kept as-is whatever its JSON type
    #[serde(default)]
    pub value: Value,
    /// Whether the variable is enabled
    #[serde(default = "default_true", deserialize_with = "null_as_default")]
    pub enabled: bool,
    /// Variable type (text, secret, any)
    #[serde(rename = "type", default)]
    pub var_type: Option<String>,
}
