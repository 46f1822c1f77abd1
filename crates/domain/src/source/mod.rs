//! Postman Dump v1 Type Definitions
//!
//! These types describe the full-account backup ("dump") file. Collections
//! carry a flat list of every folder they contain; the nesting is expressed
//! through `folders_order` lists on the collection and on each folder.
//!
//! Exports in the wild contain `null` where a list or string is expected, so
//! list fields go through [`null_as_default`] and most scalars are optional.

#![allow(missing_docs)]

mod environment;

pub use environment::{DumpEnvVariable, DumpEnvironment};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// The only dump version this converter reads.
pub const SUPPORTED_VERSION: u64 = 1;

/// Deserializes `null` into the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Renders a JSON scalar as text. `null` gives `None`; objects and arrays
/// are kept as their JSON text.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Deserializes a string, number or boolean into text, `null` into `""`.
pub(crate) fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Like [`scalar_as_string`], keeping `null` as `None`.
pub(crate) fn optional_scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Checks that a parsed document is an object carrying `version: 1`.
///
/// The version may be written as a number or as a numeric string.
///
/// # Errors
///
/// Returns [`DomainError::InvalidDocument`] when the value is not an object
/// and [`DomainError::UnsupportedVersion`] for any other version.
pub fn ensure_supported_version(document: &Value) -> DomainResult<()> {
    let Some(object) = document.as_object() else {
        return Err(DomainError::InvalidDocument(
            "expected a JSON object at the top level".to_string(),
        ));
    };

    let version = object.get("version").unwrap_or(&Value::Null);
    let supported = match version {
        Value::Number(n) => n.as_u64() == Some(SUPPORTED_VERSION),
        Value::String(s) => s.trim().parse::<u64>().ok() == Some(SUPPORTED_VERSION),
        _ => false,
    };

    if supported {
        Ok(())
    } else {
        Err(DomainError::UnsupportedVersion {
            found: version.to_string(),
            supported: SUPPORTED_VERSION,
        })
    }
}

/// Root structure of a Postman dump.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpDocument {
    #[serde(default)]
    pub version: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collections: Vec<DumpCollection>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub environments: Vec<DumpEnvironment>,
}

/// A node of the folder hierarchy: either a collection or one of its folders.
pub trait FolderNode {
    /// Source identifier.
    fn id(&self) -> &str;
    /// Display name.
    fn name(&self) -> &str;
    /// Optional description.
    fn description(&self) -> Option<&str>;
    /// Ids of the folders directly below this node, in display order.
    fn folders_order(&self) -> &[String];
}

/// Top-level collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpCollection {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Every folder of the collection, at any depth.
    #[serde(default, deserialize_with = "null_as_default")]
    pub folders: Vec<DumpFolder>,
    /// Direct child folder ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub folders_order: Vec<String>,
    /// Ids of the requests placed at the collection root.
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: Vec<String>,
    /// Every request of the collection, at any depth.
    #[serde(default, deserialize_with = "null_as_default")]
    pub requests: Vec<DumpRequest>,
}

impl FolderNode for DumpCollection {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn folders_order(&self) -> &[String] {
        &self.folders_order
    }
}

/// Folder inside a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpFolder {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub folders_order: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: Vec<String>,
    #[serde(rename = "collectionId", alias = "collection", default)]
    pub collection_id: Option<String>,
}

impl FolderNode for DumpFolder {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn folders_order(&self) -> &[String] {
        &self.folders_order
    }
}

/// Request definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpRequest {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub header_data: Vec<DumpKeyValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_params: Vec<DumpQueryParam>,
    #[serde(default)]
    pub auth: Option<DumpAuth>,
    /// Body mode: `raw`, `urlencoded`, `params` (form-data), `binary`...
    #[serde(default)]
    pub data_mode: Option<String>,
    /// Form fields for the `urlencoded` and `params` modes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<DumpKeyValue>,
    /// Payload for the `raw` mode.
    #[serde(default)]
    pub raw_mode_data: Option<String>,
    /// Owning folder, absent for requests at the collection root.
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collection_id: String,
}

impl DumpRequest {
    /// Source id of the group that owns this request.
    #[must_use]
    pub fn owner_id(&self) -> &str {
        self.folder
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(&self.collection_id)
    }
}

/// Header or form field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpKeyValue {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub key: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub value_type: Option<String>,
}

/// Query parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpQueryParam {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub key: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Missing means enabled, `null` means disabled.
    #[serde(default = "default_true", deserialize_with = "null_as_default")]
    pub enabled: bool,
}

pub(crate) const fn default_true() -> bool {
    true
}

/// Authentication descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpAuth {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub auth_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bearer: Vec<DumpAuthParam>,
}

impl DumpAuth {
    /// Value of the first bearer entry, if any.
    #[must_use]
    pub fn first_bearer_value(&self) -> Option<&str> {
        self.bearer.first().and_then(|p| p.value.as_deref())
    }
}

/// Auth parameter (key-value pair)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpAuthParam {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "optional_scalar_as_string")]
    pub value: Option<String>,
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,
}
