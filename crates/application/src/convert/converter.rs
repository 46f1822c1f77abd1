//! Conversion driver.

use chrono::SecondsFormat;
use porter_domain::{
    ApiSpecResource, DumpCollection, DumpDocument, EnvironmentResource, InsomniaExport, Resource,
    ResourceKind, WorkspaceResource, ensure_supported_version,
};
use serde::Deserialize;
use serde_json::Value;

use super::environment_mapper::map_environment;
use super::folder_tree::build_folder_tree;
use super::ids::IdGenerator;
use super::request_mapper::map_request;
use super::resource_list::ResourceList;
use super::warning::{ConversionWarning, WarningStats};
use crate::config::ConvertConfig;
use crate::error::{ConversionError, ConversionResult};
use crate::ports::{Clock, RandomSource};

/// Sort key the destination application gives its base environment.
const BASE_ENVIRONMENT_SORT_KEY: i64 = 1_597_080_078_957;

/// Output of a successful conversion.
#[derive(Debug)]
pub struct Conversion {
    /// Document to hand to the sink.
    pub export: InsomniaExport,
    /// What was converted and what was skipped.
    pub report: ConversionReport,
}

/// Summary of a conversion run.
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Name given to the generated workspace.
    pub workspace_name: String,
    /// Collections converted
    pub collections: usize,
    /// Folders converted, collections excluded
    pub folders: usize,
    /// Requests converted
    pub requests: usize,
    /// Environments converted, base environment excluded
    pub environments: usize,
    /// Total records in the export
    pub resources: usize,
    /// Soft omissions encountered along the way
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionReport {
    /// Warning counts by severity.
    #[must_use]
    pub fn stats(&self) -> WarningStats {
        WarningStats::from_warnings(&self.warnings)
    }
}

/// Converts Postman dumps into Insomnia exports.
pub struct Converter<R, C> {
    config: ConvertConfig,
    ids: IdGenerator<R>,
    clock: C,
}

impl<R: RandomSource, C: Clock> Converter<R, C> {
    /// Creates a converter with default config.
    pub fn new(random: R, clock: C) -> Self {
        Self::with_config(ConvertConfig::default(), random, clock)
    }

    /// Creates a converter with custom config.
    pub const fn with_config(config: ConvertConfig, random: R, clock: C) -> Self {
        Self {
            config,
            ids: IdGenerator::new(random),
            clock,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Converts a parsed dump document.
    ///
    /// Each call creates a new workspace and base environment.
    ///
    /// # Errors
    ///
    /// Fails before producing anything when the document is not an object,
    /// is not version 1, or does not match the dump schema. Fails on the
    /// structural errors described in [`ConversionError`].
    pub fn convert(&mut self, document: &Value) -> ConversionResult<Conversion> {
        ensure_supported_version(document)?;
        let dump = DumpDocument::deserialize(document)
            .map_err(|e| ConversionError::InvalidFormat(e.to_string()))?;

        tracing::info!("Starting conversion");

        let mut resources = ResourceList::new();
        let mut report = ConversionReport::default();

        let workspace_id = self.ids.generate(ResourceKind::Workspace, self.config.id_length);
        let base_environment_id = self
            .ids
            .generate(ResourceKind::Environment, self.config.id_length);
        self.emit_root(&workspace_id, &base_environment_id, &mut resources, &mut report)?;

        if !dump.collections.is_empty() {
            tracing::info!(count = dump.collections.len(), "Converting collections");
        }
        for collection in &dump.collections {
            self.convert_collection(collection, &workspace_id, &mut resources, &mut report)?;
        }

        if !dump.environments.is_empty() {
            tracing::info!(count = dump.environments.len(), "Converting environments");
        }
        for env in &dump.environments {
            tracing::info!(environment = %env.name, "Adding environment");
            let (mapped, warnings) = map_environment(env, &base_environment_id);
            report.warnings.extend(warnings);
            resources.push(Resource::Environment(mapped))?;
            report.environments += 1;
        }

        for warning in &report.warnings {
            warning.log();
        }

        report.resources = resources.len();
        tracing::info!(
            resources = report.resources,
            warnings = report.warnings.len(),
            "Finished conversion"
        );

        Ok(Conversion {
            export: InsomniaExport::new(resources.into_vec()),
            report,
        })
    }

    /// Emits the workspace, its api-spec stub and the base environment.
    fn emit_root(
        &mut self,
        workspace_id: &str,
        base_environment_id: &str,
        resources: &mut ResourceList,
        report: &mut ConversionReport,
    ) -> ConversionResult<()> {
        let timestamp = self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true);
        report.workspace_name = format!("{} {timestamp}", self.config.workspace_name_prefix);

        resources.push(Resource::Workspace(WorkspaceResource {
            id: workspace_id.to_string(),
            parent_id: None,
            name: report.workspace_name.clone(),
            scope: None,
        }))?;

        resources.push(Resource::ApiSpec(ApiSpecResource {
            id: self.ids.generate(ResourceKind::ApiSpec, self.config.id_length),
            parent_id: workspace_id.to_string(),
            file_name: "Insomnia".to_string(),
            contents: String::new(),
            content_type: "yaml".to_string(),
        }))?;

        resources.push(Resource::Environment(EnvironmentResource {
            id: base_environment_id.to_string(),
            parent_id: workspace_id.to_string(),
            name: self.config.base_environment_name.clone(),
            data: Default::default(),
            data_property_order: Some(Default::default()),
            color: Some(None),
            is_private: Some(false),
            meta_sort_key: Some(BASE_ENVIRONMENT_SORT_KEY),
        }))
    }

    fn convert_collection(
        &mut self,
        collection: &DumpCollection,
        workspace_id: &str,
        resources: &mut ResourceList,
        report: &mut ConversionReport,
    ) -> ConversionResult<()> {
        tracing::info!(
            collection = %collection.name,
            folders = collection.folders.len(),
            requests = collection.requests.len(),
            "Converting collection"
        );

        let tree = build_folder_tree(collection, workspace_id, resources, &mut report.warnings)?;
        report.collections += 1;
        report.folders += tree.group_count().saturating_sub(1);

        for request in &collection.requests {
            let path = format!("{}/{}", collection.name, request.name);
            let (mut mapped, warnings) =
                map_request(request, &mut self.ids, self.config.pair_id_length, &path);
            report.warnings.extend(warnings);

            if !tree.contains(request.owner_id()) {
                report.warnings.push(ConversionWarning::warning(
                    &path,
                    format!(
                        "Owner '{}' was not converted, request moved to the collection root",
                        request.owner_id()
                    ),
                ));
                mapped.parent_id = tree.root_group_id().to_string();
            }

            resources.push(Resource::Request(mapped))?;
            report.requests += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::convert::SequenceRandom;
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::{HashMap, HashSet};

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2020, 8, 10, 17, 21, 18).unwrap()
        }
    }

    fn converter() -> Converter<SequenceRandom, FixedClock> {
        Converter::new(SequenceRandom::counting(), FixedClock)
    }

    fn sample_dump() -> Value {
        json!({
            "version": 1,
            "collections": [{
                "id": "c-1",
                "name": "Shop",
                "description": "Shop API",
                "folders_order": ["f-1"],
                "folders": [
                    {"id": "f-2", "name": "Items", "folders_order": []},
                    {"id": "f-1", "name": "Orders", "folders_order": ["f-2"]}
                ],
                "requests": [
                    {
                        "id": "r-1",
                        "name": "Health",
                        "method": "GET",
                        "url": "{{host}}/health",
                        "collectionId": "c-1"
                    },
                    {
                        "id": "r-2",
                        "name": "Add item",
                        "method": "POST",
                        "url": "{{host}}/items",
                        "folder": "f-2",
                        "collectionId": "c-1",
                        "dataMode": "raw",
                        "rawModeData": "{\"sku\":1}"
                    }
                ]
            }],
            "environments": [{
                "id": "e-1",
                "name": "Local",
                "values": [{"key": "api.host", "value": "http://localhost", "enabled": true}]
            }]
        })
    }

    #[test]
    fn test_rejects_unsupported_version() {
        let err = converter()
            .convert(&json!({"version": 2, "collections": []}))
            .unwrap_err();
        assert!(matches!(err, ConversionError::Domain(_)));
        assert_eq!(err.to_string(), "version 2 not supported, try 1");
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(converter().convert(&json!([1, 2])).is_err());
        assert!(converter().convert(&Value::Null).is_err());
    }

    #[test]
    fn test_rejects_schema_mismatch() {
        let err = converter()
            .convert(&json!({"version": 1, "collections": [{"name": "no id"}]}))
            .unwrap_err();
        assert!(matches!(err, ConversionError::InvalidFormat(_)));
    }

    #[test]
    fn test_empty_dump_has_root_records_only() {
        let conversion = converter().convert(&json!({"version": 1})).unwrap();
        let resources = &conversion.export.resources;

        assert_eq!(resources.len(), 3);
        assert_eq!(
            serde_json::to_value(&resources[0]).unwrap(),
            json!({
                "_type": "workspace",
                "_id": "wrk_ABCDEFGHIJKLMNOPQRST",
                "parentId": null,
                "name": "Postman Dump 2020-08-10T17:21:18.000Z",
                "scope": null
            })
        );
        assert_eq!(
            serde_json::to_value(&resources[1]).unwrap(),
            json!({
                "_type": "api_spec",
                "_id": "spc_opqrstuvwxyz01234567",
                "parentId": "wrk_ABCDEFGHIJKLMNOPQRST",
                "fileName": "Insomnia",
                "contents": "",
                "contentType": "yaml"
            })
        );
        assert_eq!(
            serde_json::to_value(&resources[2]).unwrap(),
            json!({
                "_type": "environment",
                "_id": "env_UVWXYZabcdefghijklmn",
                "parentId": "wrk_ABCDEFGHIJKLMNOPQRST",
                "name": "Base Environment",
                "data": {},
                "dataPropertyOrder": {},
                "color": null,
                "isPrivate": false,
                "metaSortKey": 1_597_080_078_957_i64
            })
        );
        assert_eq!(conversion.report.workspace_name, "Postman Dump 2020-08-10T17:21:18.000Z");
    }

    #[test]
    fn test_full_conversion_structure() {
        let conversion = converter().convert(&sample_dump()).unwrap();
        let resources = &conversion.export.resources;

        let ids: Vec<&str> = resources.iter().map(Resource::id).collect();
        assert_eq!(&ids[3..], &["fld_c1", "fld_f1", "fld_f2", "req_r1", "req_r2", "env_e1"]);

        let by_id: HashMap<&str, &Resource> = resources.iter().map(|r| (r.id(), r)).collect();
        assert_eq!(by_id["fld_c1"].parent_id(), Some(ids[0]));
        assert_eq!(by_id["fld_f1"].parent_id(), Some("fld_c1"));
        assert_eq!(by_id["fld_f2"].parent_id(), Some("fld_f1"));
        assert_eq!(by_id["req_r1"].parent_id(), Some("fld_c1"));
        assert_eq!(by_id["req_r2"].parent_id(), Some("fld_f2"));
        assert_eq!(by_id["env_e1"].parent_id(), Some(ids[2]));

        let Resource::Request(add_item) = by_id["req_r2"] else {
            panic!("expected a request");
        };
        let body = add_item.body.as_ref().unwrap();
        assert_eq!(body.mime_type, "application/json");
        assert_eq!(body.text.as_deref(), Some("{\"sku\":1}"));

        let Resource::Environment(local) = by_id["env_e1"] else {
            panic!("expected an environment");
        };
        assert_eq!(local.data["api_host"], json!("http://localhost"));

        let report = &conversion.report;
        assert_eq!(report.collections, 1);
        assert_eq!(report.folders, 2);
        assert_eq!(report.requests, 2);
        assert_eq!(report.environments, 1);
        assert_eq!(report.resources, 9);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_every_parent_exists_and_ids_are_unique() {
        let conversion = converter().convert(&sample_dump()).unwrap();
        let resources = &conversion.export.resources;

        let ids: HashSet<&str> = resources.iter().map(Resource::id).collect();
        assert_eq!(ids.len(), resources.len());

        let roots: Vec<_> = resources.iter().filter(|r| r.parent_id().is_none()).collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].kind(), ResourceKind::Workspace);

        for (index, resource) in resources.iter().enumerate() {
            if let Some(parent) = resource.parent_id() {
                let parent_index = resources
                    .iter()
                    .position(|r| r.id() == parent)
                    .unwrap_or_else(|| panic!("missing parent {parent}"));
                assert!(parent_index < index, "{} emitted before its parent", resource.id());
            }
        }
    }

    #[test]
    fn test_request_in_orphan_folder_moves_to_collection() {
        let dump = json!({
            "version": 1,
            "collections": [{
                "id": "c-1",
                "name": "Shop",
                "folders": [{"id": "f-lost", "name": "Lost"}],
                "requests": [{
                    "id": "r-1",
                    "name": "Stray",
                    "method": "GET",
                    "folder": "f-lost",
                    "collectionId": "c-1"
                }]
            }]
        });

        let conversion = converter().convert(&dump).unwrap();
        let request = conversion
            .export
            .resources
            .iter()
            .find(|r| r.id() == "req_r1")
            .unwrap();
        assert_eq!(request.parent_id(), Some("fld_c1"));

        let stats = conversion.report.stats();
        assert_eq!(stats.warning_count, 2);
        assert_eq!(conversion.report.folders, 0);
    }

    #[test]
    fn test_non_string_pair_values_do_not_abort() {
        let dump = json!({
            "version": 1,
            "collections": [{
                "id": "c-1",
                "name": "Shop",
                "requests": [{
                    "id": "r-1",
                    "name": "Search",
                    "method": "POST",
                    "headerData": [{"key": "X-Retry", "value": 5}],
                    "queryParams": [{"key": "page", "value": 1, "enabled": null}],
                    "dataMode": "urlencoded",
                    "data": [{"key": "active", "value": true}],
                    "collectionId": "c-1"
                }]
            }]
        });

        let conversion = converter().convert(&dump).unwrap();
        let Some(Resource::Request(request)) =
            conversion.export.resources.iter().find(|r| r.id() == "req_r1")
        else {
            panic!("expected a request");
        };

        let headers = request.headers.as_ref().unwrap();
        assert_eq!(headers[0].value, "5");
        let parameters = request.parameters.as_ref().unwrap();
        assert_eq!(parameters[0].value, "1");
        assert_eq!(parameters[0].disabled, Some(true));
        let params = request.body.as_ref().unwrap().params.as_ref().unwrap();
        assert_eq!(params[0].value, "true");
    }

    #[test]
    fn test_duplicate_collections_fail() {
        let dump = json!({
            "version": 1,
            "collections": [
                {"id": "c-1", "name": "A"},
                {"id": "c-1", "name": "B"}
            ]
        });
        let err = converter().convert(&dump).unwrap_err();
        assert!(matches!(err, ConversionError::DuplicateResourceId(id) if id == "fld_c1"));
    }

    #[test]
    fn test_custom_config() {
        let config = ConvertConfig {
            id_length: 4,
            workspace_name_prefix: "Backup".to_string(),
            ..Default::default()
        };
        let mut converter = Converter::with_config(config, SequenceRandom::counting(), FixedClock);
        let conversion = converter.convert(&json!({"version": "1"})).unwrap();

        assert_eq!(conversion.export.resources[0].id(), "wrk_ABCD");
        assert_eq!(conversion.report.workspace_name, "Backup 2020-08-10T17:21:18.000Z");
        assert_eq!(converter.config().pair_id_length, 10);
    }
}
