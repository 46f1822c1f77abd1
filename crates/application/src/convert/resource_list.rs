//! Append-only accumulator for destination records.

use std::collections::HashSet;

use porter_domain::{Resource, ResourceKind};

use crate::error::{ConversionError, ConversionResult};

/// Records emitted so far, in emission order.
///
/// Rejects a second record with an `_id` that is already present, so every
/// id in the finished list is unique.
#[derive(Debug, Default)]
pub struct ResourceList {
    resources: Vec<Resource>,
    ids: HashSet<String>,
}

impl ResourceList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::DuplicateResourceId`] if the id was already
    /// emitted.
    pub fn push(&mut self, resource: Resource) -> ConversionResult<()> {
        if !self.ids.insert(resource.id().to_string()) {
            return Err(ConversionError::DuplicateResourceId(
                resource.id().to_string(),
            ));
        }
        self.resources.push(resource);
        Ok(())
    }

    /// Whether a record with this id was emitted.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of records of one kind.
    #[must_use]
    pub fn count(&self, kind: ResourceKind) -> usize {
        self.resources.iter().filter(|r| r.kind() == kind).count()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Consumes the list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Resource> {
        self.resources
    }
}
