//! Host class descriptors and the introspection capability.
//!
//! The resolver never reflects over host types directly. Instead each class is
//! described by a [`HostClass`] (fields, declared methods, markers, inheritance
//! edges) and looked up through a [`ClassIntrospector`]. [`ClassPath`] is the
//! in-memory descriptor table used by compilers and tests.

use std::collections::{HashMap, HashSet};

use typedecl_foundation::{QualifiedName, ResourceId};

use crate::declaration::Role;

// =============================================================================
// Descriptors
// =============================================================================

/// Shape of a host type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClassShape {
    /// A concrete or abstract class.
    #[default]
    Class,
    /// An interface.
    Interface,
    /// A primitive value type such as `int`.
    Primitive,
    /// An array type.
    Array,
}

/// A field declared directly on a host class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostField {
    /// Field name.
    pub name: String,
    /// Declared type name.
    pub type_name: String,
    /// Value of the position marker, if present.
    pub position: Option<i32>,
}

impl HostField {
    /// Creates an unannotated field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            position: None,
        }
    }

    /// Adds a position marker.
    #[must_use]
    pub fn at_position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }
}

/// A method declared directly on a host class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostMethod {
    /// Method name.
    pub name: String,
    /// Parameter type names.
    pub parameter_types: Vec<String>,
    /// Value of the "modifies" marker, if present.
    pub modifies: Option<Vec<String>>,
}

impl HostMethod {
    /// Creates an unannotated method with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter_types: Vec::new(),
            modifies: None,
        }
    }

    /// Sets the parameter types.
    #[must_use]
    pub fn with_params(mut self, params: &[&str]) -> Self {
        self.parameter_types = params.iter().map(|p| (*p).to_string()).collect();
        self
    }

    /// Adds a "modifies" marker.
    #[must_use]
    pub fn modifying(mut self, properties: &[&str]) -> Self {
        self.modifies = Some(properties.iter().map(|p| (*p).to_string()).collect());
        self
    }
}

/// Class-level markers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassMarkers {
    /// Role marker value.
    pub role: Option<Role>,
    /// Property-reactive marker present.
    pub property_reactive: bool,
    /// Class-reactive marker present.
    pub class_reactive: bool,
    /// Trait marker present.
    pub is_trait: bool,
}

/// Descriptor of a host class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostClass {
    /// Fully qualified name.
    pub name: QualifiedName,
    /// Class, interface, primitive, or array.
    pub shape: ClassShape,
    /// Direct superclass; `None` means the universal root.
    pub superclass: Option<QualifiedName>,
    /// Directly implemented (or, for interfaces, extended) interfaces.
    pub interfaces: Vec<QualifiedName>,
    /// Fields declared on this class only.
    pub fields: Vec<HostField>,
    /// Methods declared on this class only.
    pub methods: Vec<HostMethod>,
    /// Class-level markers.
    pub markers: ClassMarkers,
    /// Resource the class was generated from, if any.
    pub resource: Option<ResourceId>,
}

impl HostClass {
    fn with_shape(name: impl Into<QualifiedName>, shape: ClassShape) -> Self {
        Self {
            name: name.into(),
            shape,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            markers: ClassMarkers::default(),
            resource: None,
        }
    }

    /// Creates a class descriptor.
    #[must_use]
    pub fn class(name: impl Into<QualifiedName>) -> Self {
        Self::with_shape(name, ClassShape::Class)
    }

    /// Creates an interface descriptor.
    #[must_use]
    pub fn interface(name: impl Into<QualifiedName>) -> Self {
        Self::with_shape(name, ClassShape::Interface)
    }

    /// Creates a primitive type descriptor.
    #[must_use]
    pub fn primitive(name: impl Into<QualifiedName>) -> Self {
        Self::with_shape(name, ClassShape::Primitive)
    }

    /// Creates an array type descriptor.
    #[must_use]
    pub fn array(name: impl Into<QualifiedName>) -> Self {
        Self::with_shape(name, ClassShape::Array)
    }

    /// Sets the superclass.
    #[must_use]
    pub fn extends(mut self, superclass: impl Into<QualifiedName>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Adds an implemented interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<QualifiedName>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Adds a declared field.
    #[must_use]
    pub fn with_field(mut self, field: HostField) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a declared method.
    #[must_use]
    pub fn with_method(mut self, method: HostMethod) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds a role marker.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.markers.role = Some(role);
        self
    }

    /// Adds the property-reactive marker.
    #[must_use]
    pub fn property_reactive(mut self) -> Self {
        self.markers.property_reactive = true;
        self
    }

    /// Adds the class-reactive marker.
    #[must_use]
    pub fn class_reactive(mut self) -> Self {
        self.markers.class_reactive = true;
        self
    }

    /// Adds the trait marker.
    #[must_use]
    pub fn as_trait(mut self) -> Self {
        self.markers.is_trait = true;
        self
    }

    /// Records the originating resource.
    #[must_use]
    pub fn from_resource(mut self, resource: ResourceId) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Returns true for primitive and array types, which never get a
    /// declaration.
    #[must_use]
    pub fn is_primitive_or_array(&self) -> bool {
        matches!(self.shape, ClassShape::Primitive | ClassShape::Array)
    }

    /// Returns true for interfaces.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.shape == ClassShape::Interface
    }

    /// Superclass name, excluding the universal root. Interfaces have none.
    #[must_use]
    pub fn effective_superclass(&self) -> Option<&QualifiedName> {
        if self.is_interface() {
            return None;
        }
        self.superclass.as_ref().filter(|s| !s.is_root())
    }

    /// Package the class lives in.
    #[must_use]
    pub fn package(&self) -> &str {
        self.name.package()
    }
}

// =============================================================================
// Introspection
// =============================================================================

/// Capability to look up class descriptors by name.
pub trait ClassIntrospector {
    /// Returns the descriptor for `name`, if known.
    fn class(&self, name: &QualifiedName) -> Option<&HostClass>;
}

/// Iterates over a class's superclasses, nearest first, stopping at the
/// universal root or the first unknown class.
pub struct Superclasses<'a> {
    classes: &'a dyn ClassIntrospector,
    next: Option<QualifiedName>,
    seen: HashSet<QualifiedName>,
}

impl<'a> Iterator for Superclasses<'a> {
    type Item = &'a HostClass;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.next.take()?;
        if !self.seen.insert(name.clone()) {
            return None;
        }
        let class = self.classes.class(&name)?;
        self.next = class.effective_superclass().cloned();
        Some(class)
    }
}

/// Returns an iterator over the superclasses of `class`, excluding the root.
#[must_use]
pub fn superclasses<'a>(classes: &'a dyn ClassIntrospector, class: &HostClass) -> Superclasses<'a> {
    let mut seen = HashSet::new();
    seen.insert(class.name.clone());
    Superclasses {
        classes,
        next: class.effective_superclass().cloned(),
        seen,
    }
}

/// In-memory descriptor table.
#[derive(Clone, Debug, Default)]
pub struct ClassPath {
    classes: HashMap<QualifiedName, HostClass>,
}

impl ClassPath {
    /// Creates an empty class path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class, replacing any descriptor with the same name.
    pub fn add(&mut self, class: HostClass) {
        self.classes.insert(class.name.clone(), class);
    }

    /// Builder-style [`ClassPath::add`].
    #[must_use]
    pub fn with(mut self, class: HostClass) -> Self {
        self.add(class);
        self
    }

    /// Returns the descriptor for a dotted name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HostClass> {
        self.classes.get(&QualifiedName::new(name))
    }

    /// Number of known classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no classes are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassIntrospector for ClassPath {
    fn class(&self, name: &QualifiedName) -> Option<&HostClass> {
        self.classes.get(name)
    }
}
