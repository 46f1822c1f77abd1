//! Request record and its nested blocks.

use serde::{Deserialize, Serialize};

/// HTTP request record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResource {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning request group.
    pub parent_id: String,
    /// Display name.
    pub name: String,
    /// Free-form description, empty when the source has none.
    pub description: String,
    /// Target URL, possibly templated.
    pub url: String,
    /// HTTP method as written in the source.
    pub method: String,
    /// Request headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<Pair>>,
    /// Query parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Pair>>,
    /// Authentication block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
    /// Request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

/// Key/value entry used for headers, parameters and form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// Unique pair identifier.
    pub id: String,
    /// Key.
    pub name: String,
    /// Value.
    pub value: String,
    /// Set only for query parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Authentication block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    /// Scheme name copied from the source (`bearer`, `basic`, `noauth`...).
    #[serde(rename = "type")]
    pub auth_type: String,
    /// Bearer credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Request body block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    /// Content type of the payload.
    pub mime_type: String,
    /// Raw payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Form fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Pair>>,
}
