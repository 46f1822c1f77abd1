//! Request-group hierarchy reconstruction.
//!
//! A dump collection lists all of its folders flat. Nesting is only visible
//! through the `folders_order` lists, so the tree is rebuilt by walking those
//! lists from the collection downwards and emitting one request group per
//! visited node, parent first.

use std::collections::{HashMap, HashSet};

use porter_domain::{DumpCollection, DumpFolder, FolderNode, RequestGroupResource, Resource, ResourceKind};

use super::resource_list::ResourceList;
use super::warning::ConversionWarning;
use crate::error::{ConversionError, ConversionResult};

/// Deepest folder nesting followed below a collection.
pub const MAX_FOLDER_DEPTH: usize = 256;

/// Groups emitted for one collection.
#[derive(Debug)]
pub struct FolderTree {
    root_group_id: String,
    emitted: HashSet<String>,
}

impl FolderTree {
    /// Id of the request group standing for the collection itself.
    #[must_use]
    pub fn root_group_id(&self) -> &str {
        &self.root_group_id
    }

    /// Whether a group was emitted for this source collection or folder id.
    #[must_use]
    pub fn contains(&self, source_id: &str) -> bool {
        self.emitted.contains(source_id)
    }

    /// Number of groups emitted, the collection's own group included.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.emitted.len()
    }
}

/// Folders of one collection keyed by id. Each folder can be claimed by one
/// parent only.
struct FolderIndex<'a> {
    by_id: HashMap<&'a str, &'a DumpFolder>,
    claimed: HashSet<&'a str>,
}

impl<'a> FolderIndex<'a> {
    fn new(collection: &'a DumpCollection) -> ConversionResult<Self> {
        let mut by_id = HashMap::with_capacity(collection.folders.len());
        for folder in &collection.folders {
            if by_id.insert(folder.id.as_str(), folder).is_some() {
                return Err(ConversionError::DuplicateFolder {
                    collection: collection.id.clone(),
                    folder: folder.id.clone(),
                });
            }
        }

        Ok(Self {
            by_id,
            claimed: HashSet::new(),
        })
    }

    /// Looks a folder up and marks it as placed. `Ok(None)` means no folder
    /// has this id.
    fn claim(&mut self, id: &str) -> ConversionResult<Option<&'a DumpFolder>> {
        let Some(folder) = self.by_id.get(id).copied() else {
            return Ok(None);
        };
        if !self.claimed.insert(folder.id.as_str()) {
            return Err(ConversionError::FolderClaimedTwice {
                folder: folder.id.clone(),
            });
        }
        Ok(Some(folder))
    }

    fn is_claimed(&self, id: &str) -> bool {
        self.claimed.contains(id)
    }
}

struct TreeBuilder<'a, 'r> {
    index: FolderIndex<'a>,
    resources: &'r mut ResourceList,
    warnings: &'r mut Vec<ConversionWarning>,
    emitted: HashSet<String>,
}

impl TreeBuilder<'_, '_> {
    fn visit<N: FolderNode>(
        &mut self,
        node: &N,
        parent_id: &str,
        path: &str,
        depth: usize,
    ) -> ConversionResult<()> {
        if depth > MAX_FOLDER_DEPTH {
            return Err(ConversionError::FolderTooDeep {
                folder: node.id().to_string(),
                limit: MAX_FOLDER_DEPTH,
            });
        }

        let group_id = ResourceKind::RequestGroup.id_for(node.id());
        self.resources.push(Resource::RequestGroup(RequestGroupResource {
            id: group_id.clone(),
            parent_id: parent_id.to_string(),
            name: node.name().to_string(),
            description: node.description().map(str::to_string),
        }))?;
        self.emitted.insert(node.id().to_string());

        for child_id in node.folders_order() {
            match self.index.claim(child_id)? {
                Some(folder) => {
                    tracing::debug!(parent = %group_id, folder = %folder.id, "Attaching folder");
                    let child_path = format!("{path}/{}", folder.name);
                    self.visit(folder, &group_id, &child_path, depth + 1)?;
                }
                None => self.warnings.push(ConversionWarning::warning(
                    path,
                    format!("Ordering list references unknown folder '{child_id}', skipped"),
                )),
            }
        }

        Ok(())
    }
}

/// Emits the request groups of `collection`, rooted under `parent_id`.
///
/// Folders that no ordering list reaches are not emitted and each produces a
/// warning.
///
/// # Errors
///
/// - [`ConversionError::DuplicateFolder`] if two folders share an id
/// - [`ConversionError::FolderClaimedTwice`] if a folder is listed by two
///   parents, or is listed below itself
/// - [`ConversionError::FolderTooDeep`] if folders nest deeper than
///   [`MAX_FOLDER_DEPTH`]
/// - [`ConversionError::DuplicateResourceId`] if a group id was already emitted
pub fn build_folder_tree(
    collection: &DumpCollection,
    parent_id: &str,
    resources: &mut ResourceList,
    warnings: &mut Vec<ConversionWarning>,
) -> ConversionResult<FolderTree> {
    let mut builder = TreeBuilder {
        index: FolderIndex::new(collection)?,
        resources,
        warnings,
        emitted: HashSet::new(),
    };

    builder.visit(collection, parent_id, &collection.name, 0)?;

    for folder in &collection.folders {
        if !builder.index.is_claimed(&folder.id) {
            builder.warnings.push(ConversionWarning::warning(
                format!("{}/{}", collection.name, folder.name),
                format!(
                    "Folder '{}' is not listed in any ordering list and was skipped",
                    folder.id
                ),
            ));
        }
    }

    Ok(FolderTree {
        root_group_id: ResourceKind::RequestGroup.id_for(&collection.id),
        emitted: builder.emitted,
    })
}
