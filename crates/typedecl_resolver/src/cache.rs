//! Identity-keyed store of fully initialized declarations.

use std::collections::HashMap;

use typedecl_foundation::{QualifiedName, ResourceId};
use typedecl_model::DeclRef;

/// Cache of initialized declarations, keyed by class name.
#[derive(Clone, Debug, Default)]
pub struct TypeCache {
    entries: HashMap<QualifiedName, DeclRef>,
}

impl TypeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a declaration.
    #[must_use]
    pub fn get(&self, name: &QualifiedName) -> Option<DeclRef> {
        self.entries.get(name).cloned()
    }

    /// Returns true if `name` is cached.
    #[must_use]
    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.entries.contains_key(name)
    }

    /// Stores a declaration, replacing any previous entry.
    pub fn insert(&mut self, name: QualifiedName, decl: DeclRef) {
        self.entries.insert(name, decl);
    }

    /// Removes one entry.
    pub fn remove(&mut self, name: &QualifiedName) -> Option<DeclRef> {
        self.entries.remove(name)
    }

    /// Removes every entry whose declaration originated from `resource`.
    /// Returns the number removed.
    pub fn remove_types_from_resource(&mut self, resource: &ResourceId) -> usize {
        let stale: Vec<QualifiedName> = self
            .entries
            .iter()
            .filter(|(_, decl)| decl.borrow().resource() == Some(resource))
            .map(|(name, _)| name.clone())
            .collect();
        for name in &stale {
            self.entries.remove(name);
        }
        stale.len()
    }

    /// Number of cached declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
