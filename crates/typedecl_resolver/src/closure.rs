//! Ancestor closure: the declarations reachable from a class's superclass
//! chain and interface lattice, used for property inheritance only.
//!
//! The walk is asymmetric. Interfaces implemented directly by the
//! class are always all explored, whatever each exploration reports. Within an
//! interface exploration, meeting a declaration already in the closure ends
//! that exploration (and its remaining siblings) with "no further work". The
//! superclass ascent stops entirely as soon as a superclass exploration
//! reports "no further work".

use typedecl_foundation::QualifiedName;
use typedecl_model::{ClassIntrospector, DeclRef, HostClass, superclasses};

use crate::builtins::BuiltinRegistry;
use crate::package::PackageRegistry;

// =============================================================================
// AncestorClosure
// =============================================================================

/// Ordered, identity-deduplicated set of declarations, nearest first.
#[derive(Clone, Debug)]
pub struct AncestorClosure {
    members: Vec<DeclRef>,
}

impl AncestorClosure {
    /// Creates a closure whose first member is `subject`.
    #[must_use]
    pub fn new(subject: DeclRef) -> Self {
        Self {
            members: vec![subject],
        }
    }

    /// Adds a declaration unless the same declaration is already present.
    /// Returns true if it was added.
    pub fn insert(&mut self, decl: DeclRef) -> bool {
        if self.contains(&decl) {
            return false;
        }
        self.members.push(decl);
        true
    }

    /// Returns true if the same declaration is present.
    #[must_use]
    pub fn contains(&self, decl: &DeclRef) -> bool {
        self.members.iter().any(|m| m.ptr_eq(decl))
    }

    /// The subject the closure was built for.
    #[must_use]
    pub fn subject(&self) -> &DeclRef {
        &self.members[0]
    }

    /// Members in discovery order, subject first.
    #[must_use]
    pub fn members(&self) -> &[DeclRef] {
        &self.members
    }

    /// Members farthest first, subject last.
    pub fn farthest_first(&self) -> impl Iterator<Item = &DeclRef> {
        self.members.iter().rev()
    }

    /// Number of members, subject included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Never true: the subject is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Finds the declaration for a type: builtins first, then the table of the
/// type's own package by simple name.
#[must_use]
pub fn lookup_declaration(
    builtins: &BuiltinRegistry,
    packages: &dyn PackageRegistry,
    name: &QualifiedName,
) -> Option<DeclRef> {
    builtins
        .get(name)
        .or_else(|| packages.type_declaration(name.package(), name.simple_name()))
}

// =============================================================================
// ClosureBuilder
// =============================================================================

/// Walks an inheritance lattice collecting ancestor declarations.
pub struct ClosureBuilder<'a> {
    builtins: &'a BuiltinRegistry,
    packages: &'a dyn PackageRegistry,
    classes: &'a dyn ClassIntrospector,
}

struct Walk {
    closure: AncestorClosure,
    // Interfaces currently being explored; guards malformed cyclic tables.
    path: Vec<QualifiedName>,
}

impl<'a> ClosureBuilder<'a> {
    /// Creates a builder over the given lookup sources.
    #[must_use]
    pub fn new(
        builtins: &'a BuiltinRegistry,
        packages: &'a dyn PackageRegistry,
        classes: &'a dyn ClassIntrospector,
    ) -> Self {
        Self {
            builtins,
            packages,
            classes,
        }
    }

    /// Builds the closure of `class`, with `subject` as its nearest member.
    #[must_use]
    pub fn build(&self, class: &HostClass, subject: DeclRef) -> AncestorClosure {
        let mut walk = Walk {
            closure: AncestorClosure::new(subject),
            path: Vec::new(),
        };

        for interface in &class.interfaces {
            self.explore(interface, &mut walk);
        }

        for superclass in superclasses(self.classes, class) {
            if !self.explore(&superclass.name, &mut walk) {
                tracing::trace!(class = %class.name, at = %superclass.name, "closure: superclass ascent stopped");
                break;
            }
        }

        walk.closure
    }

    /// Explores one ancestor and its interfaces. Returns false when a
    /// declaration already in the closure was met.
    fn explore(&self, name: &QualifiedName, walk: &mut Walk) -> bool {
        if walk.path.contains(name) {
            return true;
        }

        if let Some(decl) = lookup_declaration(self.builtins, self.packages, name) {
            if !walk.closure.insert(decl) {
                tracing::trace!(ancestor = %name, "closure: revisit");
                return false;
            }
            tracing::trace!(ancestor = %name, "closure: added");
        }

        let Some(class) = self.classes.class(name) else {
            return true;
        };

        // One level of the ancestor's own interfaces, from package tables.
        for interface in &class.interfaces {
            if let Some(decl) = self
                .packages
                .type_declaration(interface.package(), interface.simple_name())
            {
                walk.closure.insert(decl);
            }
        }

        walk.path.push(name.clone());
        let mut more = true;
        for interface in &class.interfaces {
            if !self.explore(interface, walk) {
                more = false;
                break;
            }
        }
        walk.path.pop();
        more
    }
}
