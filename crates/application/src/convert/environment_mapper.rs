//! Dump environment to Insomnia environment mapping.

use porter_domain::{DumpEnvironment, EnvironmentResource, ResourceKind};
use serde_json::Map;

use super::warning::ConversionWarning;

/// Rewrites a variable name for the destination, which does not accept dots.
///
/// Hyphens and dots both become underscores. Other characters the
/// destination may reject are left alone, and references to the old name
/// inside URLs or bodies are not rewritten.
#[must_use]
pub fn sanitize_variable_name(key: &str) -> String {
    key.replace(['-', '.'], "_")
}

/// Map one environment as a child of the base environment.
///
/// Variables keep their source order. When two source keys sanitize to the
/// same name the later value wins, in the earlier key's position, and a
/// warning is produced.
pub fn map_environment(
    env: &DumpEnvironment,
    base_environment_id: &str,
) -> (EnvironmentResource, Vec<ConversionWarning>) {
    let mut warnings = Vec::new();
    let mut data = Map::new();

    for variable in &env.values {
        let key = sanitize_variable_name(&variable.key);
        if data.insert(key.clone(), variable.value.clone()).is_some() {
            warnings.push(ConversionWarning::warning(
                &env.name,
                format!("Variable '{}' overwrites an earlier value of '{key}'", variable.key),
            ));
        }
    }

    let mapped = EnvironmentResource {
        id: ResourceKind::Environment.id_for(&env.id),
        parent_id: base_environment_id.to_string(),
        name: env.name.clone(),
        data,
        data_property_order: None,
        color: None,
        is_private: None,
        meta_sort_key: None,
    };

    (mapped, warnings)
}
