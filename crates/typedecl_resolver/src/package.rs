//! Package-scoped declaration tables.
//!
//! Each package keeps the declarations filed under it, keyed by simple type
//! name. The resolver reads them to find user-declared types and ancestors,
//! and files discovered declarations into them on registration.

use std::collections::HashMap;

use typedecl_foundation::ResourceId;
use typedecl_model::DeclRef;

// =============================================================================
// PackageRegistry
// =============================================================================

/// Access to the per-package declaration tables of a compilation.
pub trait PackageRegistry {
    /// Returns true if a table exists for `package`.
    fn has_package(&self, package: &str) -> bool;

    /// Creates an empty table for `package` if none exists.
    fn new_package(&mut self, package: &str);

    /// Looks up a declaration by simple name within `package`.
    fn type_declaration(&self, package: &str, simple_name: &str) -> Option<DeclRef>;

    /// Files a declaration under `package`, keyed by its simple name.
    fn add_type_declaration(&mut self, package: &str, decl: DeclRef);

    /// Removes every filed declaration that originated from `resource`, in
    /// any package. Returns the number removed.
    fn remove_types_generated_from_resource(&mut self, resource: &ResourceId) -> usize;
}

// =============================================================================
// Package
// =============================================================================

/// Declaration table of a single package.
#[derive(Clone, Debug, Default)]
pub struct Package {
    name: String,
    types: HashMap<String, DeclRef>,
}

impl Package {
    /// Creates an empty package.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: HashMap::new(),
        }
    }

    /// Package name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Files a declaration, replacing any with the same simple name.
    pub fn add_type_declaration(&mut self, decl: DeclRef) {
        let simple_name = decl.type_name().simple_name().to_string();
        self.types.insert(simple_name, decl);
    }

    /// Looks up a declaration by simple name.
    #[must_use]
    pub fn type_declaration(&self, simple_name: &str) -> Option<DeclRef> {
        self.types.get(simple_name).cloned()
    }

    /// Removes a declaration by simple name.
    pub fn remove_type_declaration(&mut self, simple_name: &str) -> Option<DeclRef> {
        self.types.remove(simple_name)
    }

    /// Removes the declarations that originated from `resource`. Returns the
    /// number removed.
    pub fn remove_types_generated_from_resource(&mut self, resource: &ResourceId) -> usize {
        let stale: Vec<String> = self
            .types
            .iter()
            .filter(|(_, decl)| decl.borrow().resource() == Some(resource))
            .map(|(name, _)| name.clone())
            .collect();
        for name in &stale {
            self.remove_type_declaration(name);
        }
        stale.len()
    }

    /// Iterates over the filed declarations.
    pub fn type_declarations(&self) -> impl Iterator<Item = &DeclRef> {
        self.types.values()
    }

    /// Number of filed declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing is filed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

// =============================================================================
// Packages
// =============================================================================

/// In-memory [`PackageRegistry`].
#[derive(Clone, Debug, Default)]
pub struct Packages {
    packages: HashMap<String, Package>,
}

impl Packages {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for `package`.
    #[must_use]
    pub fn package(&self, package: &str) -> Option<&Package> {
        self.packages.get(package)
    }

    /// Returns the mutable table for `package`.
    pub fn package_mut(&mut self, package: &str) -> Option<&mut Package> {
        self.packages.get_mut(package)
    }

    /// Files a declaration under the package of its own type name.
    pub fn declare(&mut self, decl: DeclRef) {
        let package = decl.type_name().package().to_string();
        self.add_type_declaration(&package, decl);
    }

    /// Number of packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if no package exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PackageRegistry for Packages {
    fn has_package(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    fn new_package(&mut self, package: &str) {
        self.packages
            .entry(package.to_string())
            .or_insert_with(|| Package::new(package));
    }

    fn type_declaration(&self, package: &str, simple_name: &str) -> Option<DeclRef> {
        self.packages
            .get(package)
            .and_then(|p| p.type_declaration(simple_name))
    }

    fn add_type_declaration(&mut self, package: &str, decl: DeclRef) {
        self.packages
            .entry(package.to_string())
            .or_insert_with(|| Package::new(package))
            .add_type_declaration(decl);
    }

    fn remove_types_generated_from_resource(&mut self, resource: &ResourceId) -> usize {
        self.packages
            .values_mut()
            .map(|p| p.remove_types_generated_from_resource(resource))
            .sum()
    }
}
