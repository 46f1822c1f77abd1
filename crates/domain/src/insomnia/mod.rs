//! Insomnia Export (format 4) Type Definitions
//!
//! An export is a flat list of resources. Hierarchy is expressed only through
//! each resource's `parentId`; the `_type` tag selects the record kind.

mod request;

pub use request::{Authentication, Pair, RequestBody, RequestResource};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::id::ResourceKind;

/// Value of the envelope's `_type` field.
pub const EXPORT_TYPE: &str = "export";

/// Value of the envelope's `__export_format` field.
pub const EXPORT_FORMAT: u32 = 4;

/// Export envelope written to the destination file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsomniaExport {
    /// Always [`EXPORT_TYPE`].
    #[serde(rename = "_type")]
    pub export_type: String,
    /// Always [`EXPORT_FORMAT`].
    #[serde(rename = "__export_format")]
    pub export_format: u32,
    /// Every converted record, parents before children.
    pub resources: Vec<Resource>,
}

impl InsomniaExport {
    /// Wraps a resource list in the fixed envelope.
    #[must_use]
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            export_type: EXPORT_TYPE.to_string(),
            export_format: EXPORT_FORMAT,
            resources,
        }
    }
}

/// A destination record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "snake_case")]
pub enum Resource {
    /// Root container.
    Workspace(WorkspaceResource),
    /// Empty design document attached to the workspace.
    ApiSpec(ApiSpecResource),
    /// Base or converted environment.
    Environment(EnvironmentResource),
    /// Folder.
    RequestGroup(RequestGroupResource),
    /// HTTP request.
    Request(RequestResource),
}

impl Resource {
    /// The record's `_id`.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Workspace(r) => &r.id,
            Self::ApiSpec(r) => &r.id,
            Self::Environment(r) => &r.id,
            Self::RequestGroup(r) => &r.id,
            Self::Request(r) => &r.id,
        }
    }

    /// The record's `parentId`, `None` only for the workspace.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        match self {
            Self::Workspace(r) => r.parent_id.as_deref(),
            Self::ApiSpec(r) => Some(&r.parent_id),
            Self::Environment(r) => Some(&r.parent_id),
            Self::RequestGroup(r) => Some(&r.parent_id),
            Self::Request(r) => Some(&r.parent_id),
        }
    }

    /// Kind of the record.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Workspace(_) => ResourceKind::Workspace,
            Self::ApiSpec(_) => ResourceKind::ApiSpec,
            Self::Environment(_) => ResourceKind::Environment,
            Self::RequestGroup(_) => ResourceKind::RequestGroup,
            Self::Request(_) => ResourceKind::Request,
        }
    }
}

/// Root workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceResource {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Always `None`.
    pub parent_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Workspace scope, left unset.
    pub scope: Option<String>,
}

/// Api-specification stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpecResource {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning workspace.
    pub parent_id: String,
    /// File name shown by the destination application.
    pub file_name: String,
    /// Specification body.
    pub contents: String,
    /// Specification syntax.
    pub content_type: String,
}

/// Keeps an explicit `null` apart from a missing field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Environment record.
///
/// The base environment also carries the color, sort and privacy fields;
/// converted environments leave them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentResource {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Workspace for the base environment, base environment otherwise.
    pub parent_id: String,
    /// Display name.
    pub name: String,
    /// Variables, in source order.
    pub data: Map<String, Value>,
    /// Display order of variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_property_order: Option<Map<String, Value>>,
    /// Display color. `Some(None)` is written as `null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Option<String>>,
    /// Whether the environment is kept out of exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// Sort key among siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_sort_key: Option<i64>,
}

/// Folder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestGroupResource {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Workspace or enclosing request group.
    pub parent_id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_resource_type_tags() {
        let group = Resource::RequestGroup(RequestGroupResource {
            id: "fld_1".to_string(),
            parent_id: "wrk_1".to_string(),
            name: "Users".to_string(),
            description: None,
        });

        assert_eq!(
            serde_json::to_value(&group).unwrap(),
            json!({
                "_type": "request_group",
                "_id": "fld_1",
                "parentId": "wrk_1",
                "name": "Users"
            })
        );
        assert_eq!(group.kind(), ResourceKind::RequestGroup);
    }

    #[test]
    fn test_workspace_has_null_parent() {
        let workspace = Resource::Workspace(WorkspaceResource {
            id: "wrk_1".to_string(),
            parent_id: None,
            name: "Dump".to_string(),
            scope: None,
        });

        let value = serde_json::to_value(&workspace).unwrap();
        assert_eq!(value["parentId"], Value::Null);
        assert_eq!(value["scope"], Value::Null);
        assert_eq!(workspace.parent_id(), None);
    }

    #[test]
    fn test_api_spec_tag() {
        let spec = Resource::ApiSpec(ApiSpecResource {
            id: "spc_1".to_string(),
            parent_id: "wrk_1".to_string(),
            file_name: "Insomnia".to_string(),
            contents: String::new(),
            content_type: "yaml".to_string(),
        });

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["_type"], "api_spec");
        assert_eq!(value["fileName"], "Insomnia");
        assert_eq!(value["contentType"], "yaml");
    }

    #[test]
    fn test_export_envelope() {
        let export = InsomniaExport::new(Vec::new());
        assert_eq!(
            serde_json::to_value(&export).unwrap(),
            json!({"_type": "export", "__export_format": 4, "resources": []})
        );
    }

    #[test]
    fn test_environment_roundtrip_from_json() {
        let value = json!({
            "_type": "environment",
            "_id": "env_1",
            "parentId": "env_base",
            "name": "Dev",
            "data": {"base_url": "http://localhost"}
        });

        let resource: Resource = serde_json::from_value(value).unwrap();
        let Resource::Environment(env) = &resource else {
            unreachable!("expected an environment");
        };
        assert_eq!(env.data["base_url"], "http://localhost");
        assert_eq!(resource.parent_id(), Some("env_base"));
    }

    #[test]
    fn test_environment_color_null_is_kept() {
        let base = EnvironmentResource {
            id: "env_base".to_string(),
            parent_id: "wrk_1".to_string(),
            name: "Base Environment".to_string(),
            data: Map::new(),
            data_property_order: None,
            color: Some(None),
            is_private: None,
            meta_sort_key: None,
        };
        let value = serde_json::to_value(Resource::Environment(base.clone())).unwrap();
        assert_eq!(value["color"], Value::Null);
        assert!(value.as_object().unwrap().contains_key("color"));

        let back: Resource = serde_json::from_value(value).unwrap();
        assert_eq!(back, Resource::Environment(base.clone()));

        let plain = EnvironmentResource { color: None, ..base };
        let value = serde_json::to_value(Resource::Environment(plain)).unwrap();
        assert!(!value.as_object().unwrap().contains_key("color"));
    }
}
