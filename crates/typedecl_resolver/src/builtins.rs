//! Declarations for engine-internal pseudo-types.
//!
//! Seeded once when the resolver is constructed and looked up by exact
//! identity before any package table.

use std::collections::HashMap;

use typedecl_foundation::QualifiedName;
use typedecl_model::{DeclRef, Kind, TypeDeclaration};

/// Generic collection type.
pub const COLLECTION: &str = "lang.util.Collection";
/// Generic mapping type.
pub const MAP: &str = "lang.util.Map";
/// Rule match (activation) type.
pub const MATCH: &str = "engine.rule.Match";
/// Root of all traits.
pub const THING: &str = "engine.traits.Thing";

/// Fixed table of builtin declarations.
#[derive(Clone, Debug)]
pub struct BuiltinRegistry {
    types: HashMap<QualifiedName, DeclRef>,
}

impl BuiltinRegistry {
    /// Creates the registry with every builtin seeded.
    #[must_use]
    pub fn new() -> Self {
        let mut types = HashMap::new();

        for name in [COLLECTION, MAP, MATCH] {
            let name = QualifiedName::new(name);
            let decl = TypeDeclaration::declared(name.clone())
                .with_type_class(name.clone())
                .with_kind(Kind::Builtin)
                .with_typesafe(false);
            types.insert(name, decl.into_ref());
        }

        let thing = QualifiedName::new(THING);
        let decl = TypeDeclaration::declared(thing.clone())
            .with_type_class(thing.clone())
            .with_kind(Kind::Trait);
        types.insert(thing, decl.into_ref());

        Self { types }
    }

    /// Looks up a builtin by identity.
    #[must_use]
    pub fn get(&self, name: &QualifiedName) -> Option<DeclRef> {
        self.types.get(name).cloned()
    }

    /// Returns true if `decl` is one of the builtin declarations.
    #[must_use]
    pub fn is_builtin(&self, decl: &DeclRef) -> bool {
        self.types.values().any(|b| b.ptr_eq(decl))
    }

    /// Builtin identities.
    pub fn names(&self) -> impl Iterator<Item = &QualifiedName> {
        self.types.keys()
    }

    /// Number of builtins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false once seeded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}
