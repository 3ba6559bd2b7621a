//! Type declarations: the cached metadata record for a fact type.
//!
//! A [`TypeDeclaration`] pairs a type identity with its structural definition
//! and three mergeable properties (role, format, typesafe). Each mergeable
//! property is a [`Setting`] that remembers whether it was authored on this
//! declaration or inherited from an ancestor.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use typedecl_foundation::{Error, QualifiedName, ResourceId, Result};

use crate::class_def::ClassDefinition;

// =============================================================================
// Enumerations
// =============================================================================

/// What sort of type a declaration describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Kind {
    /// An ordinary fact type.
    #[default]
    Class,
    /// A trait type.
    Trait,
    /// An engine-internal pseudo-type.
    Builtin,
}

/// Where a declaration came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Nature {
    /// Explicitly declared in rule source.
    #[default]
    Declared,
    /// Discovered by introspecting an existing host class.
    Discovered,
}

/// Whether a type represents a plain fact or a temporal event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// A plain fact.
    #[default]
    Fact,
    /// A temporal event.
    Event,
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fact" => Ok(Self::Fact),
            "event" => Ok(Self::Event),
            _ => Err(Error::invalid_option("role", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fact => write!(f, "fact"),
            Self::Event => write!(f, "event"),
        }
    }
}

/// Representation format of a type's instances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Plain host objects.
    #[default]
    Pojo,
    /// Trait proxies.
    Trait,
}

/// Change-tracking granularity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Reactivity {
    /// Any modification is a whole-object change.
    #[default]
    Class,
    /// Individual property changes are tracked.
    Property,
}

// =============================================================================
// Setting
// =============================================================================

/// A mergeable property value and how it was obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Setting<T> {
    /// Never assigned.
    #[default]
    Unset,
    /// Copied from an ancestor; a nearer ancestor may still replace it.
    Inherited(T),
    /// Assigned directly on this declaration; never replaced by a merge.
    Explicit(T),
}

impl<T: Copy> Setting<T> {
    /// Returns true only if the value was assigned on this declaration.
    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }

    /// Returns the value, whether explicit or inherited.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Inherited(v) | Self::Explicit(v) => Some(*v),
        }
    }

    /// Returns the value or `default` when unset.
    #[must_use]
    pub fn value_or(&self, default: T) -> T {
        self.value().unwrap_or(default)
    }

    /// Copies an ancestor's explicit value onto an unset or inherited
    /// setting. Returns true if the value changed hands.
    pub fn inherit_from(&mut self, ancestor: &Self) -> bool {
        if self.is_set() {
            return false;
        }
        if let Self::Explicit(v) = ancestor {
            *self = Self::Inherited(*v);
            true
        } else {
            false
        }
    }
}

/// The three mergeable properties of a declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropertySettings {
    /// Fact or event.
    pub role: Setting<Role>,
    /// Instance format.
    pub format: Setting<Format>,
    /// Whether the type is typesafe.
    pub typesafe: Setting<bool>,
}

impl PropertySettings {
    /// Fills every non-explicit property the ancestor sets explicitly.
    pub fn inherit_from(&mut self, ancestor: &PropertySettings) {
        self.role.inherit_from(&ancestor.role);
        self.format.inherit_from(&ancestor.format);
        self.typesafe.inherit_from(&ancestor.typesafe);
    }
}

// =============================================================================
// TypeDeclaration
// =============================================================================

/// Canonical metadata record for one type identity.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDeclaration {
    type_name: QualifiedName,
    kind: Kind,
    nature: Nature,
    type_class: Option<QualifiedName>,
    class_def: Option<ClassDefinition>,
    settings: PropertySettings,
    reactivity: Reactivity,
    resource: Option<ResourceId>,
}

impl TypeDeclaration {
    /// Creates a declaration authored in rule source.
    #[must_use]
    pub fn declared(type_name: QualifiedName) -> Self {
        Self {
            type_name,
            kind: Kind::Class,
            nature: Nature::Declared,
            type_class: None,
            class_def: None,
            settings: PropertySettings::default(),
            reactivity: Reactivity::Class,
            resource: None,
        }
    }

    /// Creates a declaration discovered from a host class.
    #[must_use]
    pub fn discovered(class_name: QualifiedName) -> Self {
        Self {
            type_class: Some(class_name.clone()),
            nature: Nature::Discovered,
            ..Self::declared(class_name)
        }
    }

    /// Binds the backing host class.
    #[must_use]
    pub fn with_type_class(mut self, class_name: QualifiedName) -> Self {
        self.type_class = Some(class_name);
        self
    }

    /// Sets the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the structural definition.
    #[must_use]
    pub fn with_class_def(mut self, class_def: ClassDefinition) -> Self {
        self.class_def = Some(class_def);
        self
    }

    /// Explicitly sets the role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.set_role(role);
        self
    }

    /// Explicitly sets the format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.set_format(format);
        self
    }

    /// Explicitly sets typesafety.
    #[must_use]
    pub fn with_typesafe(mut self, typesafe: bool) -> Self {
        self.set_typesafe(typesafe);
        self
    }

    /// Sets the reactivity mode.
    #[must_use]
    pub fn with_reactivity(mut self, reactivity: Reactivity) -> Self {
        self.reactivity = reactivity;
        self
    }

    /// Records the resource this declaration was produced from.
    #[must_use]
    pub fn with_resource(mut self, resource: ResourceId) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Wraps the declaration in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> DeclRef {
        DeclRef::new(self)
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    /// Fully qualified type name.
    #[must_use]
    pub fn type_name(&self) -> &QualifiedName {
        &self.type_name
    }

    /// Kind of type.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Origin of the declaration.
    #[must_use]
    pub fn nature(&self) -> Nature {
        self.nature
    }

    /// Backing host class, if any.
    #[must_use]
    pub fn type_class(&self) -> Option<&QualifiedName> {
        self.type_class.as_ref()
    }

    /// Resource the declaration was produced from.
    #[must_use]
    pub fn resource(&self) -> Option<&ResourceId> {
        self.resource.as_ref()
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Structural definition, once built.
    #[must_use]
    pub fn class_def(&self) -> Option<&ClassDefinition> {
        self.class_def.as_ref()
    }

    /// Mutable structural definition, once built.
    pub fn class_def_mut(&mut self) -> Option<&mut ClassDefinition> {
        self.class_def.as_mut()
    }

    /// Installs the structural definition.
    pub fn set_class_def(&mut self, class_def: ClassDefinition) {
        self.class_def = Some(class_def);
    }

    // -------------------------------------------------------------------------
    // Mergeable properties
    // -------------------------------------------------------------------------

    /// All mergeable properties with their provenance.
    #[must_use]
    pub fn settings(&self) -> &PropertySettings {
        &self.settings
    }

    /// Merges inheritable values from an ancestor's settings.
    pub fn inherit_from(&mut self, ancestor: &PropertySettings) {
        self.settings.inherit_from(ancestor);
    }

    /// Effective role (defaults to fact).
    #[must_use]
    pub fn role(&self) -> Role {
        self.settings.role.value_or(Role::Fact)
    }

    /// Explicitly sets the role.
    pub fn set_role(&mut self, role: Role) {
        self.settings.role = Setting::Explicit(role);
    }

    /// Effective format (defaults to pojo).
    #[must_use]
    pub fn format(&self) -> Format {
        self.settings.format.value_or(Format::Pojo)
    }

    /// Explicitly sets the format.
    pub fn set_format(&mut self, format: Format) {
        self.settings.format = Setting::Explicit(format);
    }

    /// Effective typesafety (defaults to true).
    #[must_use]
    pub fn is_typesafe(&self) -> bool {
        self.settings.typesafe.value_or(true)
    }

    /// Explicitly sets typesafety.
    pub fn set_typesafe(&mut self, typesafe: bool) {
        self.settings.typesafe = Setting::Explicit(typesafe);
    }

    /// Change-tracking granularity.
    #[must_use]
    pub fn reactivity(&self) -> Reactivity {
        self.reactivity
    }

    /// Returns true if individual property changes are tracked.
    #[must_use]
    pub fn is_property_reactive(&self) -> bool {
        self.reactivity == Reactivity::Property
    }

    /// Sets property-level or class-level reactivity.
    pub fn set_property_reactive(&mut self, property_reactive: bool) {
        self.reactivity = if property_reactive {
            Reactivity::Property
        } else {
            Reactivity::Class
        };
    }
}

// =============================================================================
// DeclRef
// =============================================================================

/// Shared handle to a declaration.
///
/// The cache, package tables, and builtin registry all hold the same
/// declaration; identity is pointer identity. Not thread-safe.
#[derive(Clone)]
pub struct DeclRef(Rc<RefCell<TypeDeclaration>>);

impl DeclRef {
    /// Wraps a declaration.
    #[must_use]
    pub fn new(decl: TypeDeclaration) -> Self {
        Self(Rc::new(RefCell::new(decl)))
    }

    /// Borrows the declaration.
    ///
    /// # Panics
    /// Panics if the declaration is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, TypeDeclaration> {
        self.0.borrow()
    }

    /// Mutably borrows the declaration.
    ///
    /// # Panics
    /// Panics if the declaration is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, TypeDeclaration> {
        self.0.borrow_mut()
    }

    /// Returns true if both handles point at the same declaration.
    #[must_use]
    pub fn ptr_eq(&self, other: &DeclRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns a detached copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TypeDeclaration {
        self.0.borrow().clone()
    }

    /// Fully qualified type name.
    #[must_use]
    pub fn type_name(&self) -> QualifiedName {
        self.0.borrow().type_name.clone()
    }
}

impl fmt::Debug for DeclRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclRef({})", self.0.borrow().type_name)
    }
}
