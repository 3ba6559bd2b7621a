//! Structural definitions: the field-level shape of a type.
//!
//! A [`ClassDefinition`] is a flat, ordered record of a type's fields plus the
//! per-method sets of properties each method declares it modifies. It is
//! independent of inheritance metadata (role, format, typesafe).

use std::fmt;

use im::{OrdMap, Vector};

// =============================================================================
// FieldDefinition
// =============================================================================

/// A single field of a structural definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Field name (unique within its definition).
    pub name: String,
    /// Name of the field's declared type.
    pub type_name: String,
    /// Fixed position, if one was assigned.
    pub index: Option<usize>,
}

impl FieldDefinition {
    /// Creates an unpositioned field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            index: None,
        }
    }

    /// Sets a fixed position.
    #[must_use]
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

// =============================================================================
// MethodId
// =============================================================================

/// Identity of a method: its name and parameter type names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId {
    /// Method name.
    pub name: String,
    /// Parameter type names, in order.
    pub parameter_types: Vec<String>,
}

impl MethodId {
    /// Creates a method identity.
    #[must_use]
    pub fn new(name: impl Into<String>, parameter_types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            parameter_types,
        }
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.parameter_types.join(", "))
    }
}

// =============================================================================
// ClassDefinition
// =============================================================================

/// Structural definition of a type.
///
/// Cloning is cheap: fields and the modified-property map are persistent
/// collections that share structure with the original.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassDefinition {
    class_name: String,
    superclass: Option<String>,
    interfaces: Vec<String>,
    is_trait: bool,
    fields: Vector<FieldDefinition>,
    modified_props: OrdMap<MethodId, Vec<String>>,
}

impl ClassDefinition {
    /// Creates an empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty definition for the named class.
    #[must_use]
    pub fn named(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    /// Returns the class name this definition describes.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Sets the class name.
    pub fn set_class_name(&mut self, class_name: impl Into<String>) {
        self.class_name = class_name.into();
    }

    /// Returns the superclass name, if any.
    #[must_use]
    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    /// Sets the superclass name.
    pub fn set_superclass(&mut self, superclass: Option<String>) {
        self.superclass = superclass;
    }

    /// Returns the names of directly implemented interfaces.
    #[must_use]
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// Sets the implemented interface names.
    pub fn set_interfaces(&mut self, interfaces: Vec<String>) {
        self.interfaces = interfaces;
    }

    /// Returns true if the definition was built with trait semantics.
    #[must_use]
    pub fn is_trait(&self) -> bool {
        self.is_trait
    }

    /// Marks the definition as a trait.
    pub fn set_trait(&mut self, is_trait: bool) {
        self.is_trait = is_trait;
    }

    // -------------------------------------------------------------------------
    // Fields
    // -------------------------------------------------------------------------

    /// Adds a field, replacing an existing field of the same name in place.
    ///
    /// If the field carries an index, any other field holding that index
    /// loses it.
    pub fn add_field(&mut self, field: FieldDefinition) {
        if let Some(index) = field.index {
            self.release_index(index, &field.name);
        }
        match self.fields.iter().position(|f| f.name == field.name) {
            Some(pos) => self.fields[pos] = field,
            None => self.fields.push_back(field),
        }
    }

    /// Returns the field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if a field with the given name exists.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns the field fixed at `index`.
    #[must_use]
    pub fn field_at(&self, index: usize) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.index == Some(index))
    }

    /// Fixes an existing field at `index`, clearing that index from any other
    /// field. Returns false if no field has that name.
    pub fn set_field_index(&mut self, name: &str, index: usize) -> bool {
        if !self.has_field(name) {
            return false;
        }
        self.release_index(index, name);
        for field in self.fields.iter_mut() {
            if field.name == name {
                field.index = Some(index);
            }
        }
        true
    }

    fn release_index(&mut self, index: usize, keep: &str) {
        for field in self.fields.iter_mut() {
            if field.index == Some(index) && field.name != keep {
                field.index = None;
            }
        }
    }

    /// Returns the fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter()
    }

    /// Returns positioned fields by ascending index, then the rest in
    /// insertion order.
    #[must_use]
    pub fn fields_in_position_order(&self) -> Vec<&FieldDefinition> {
        let mut positioned: Vec<_> = self.fields.iter().filter(|f| f.index.is_some()).collect();
        positioned.sort_by_key(|f| f.index);
        positioned.extend(self.fields.iter().filter(|f| f.index.is_none()));
        positioned
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    // -------------------------------------------------------------------------
    // Modified properties
    // -------------------------------------------------------------------------

    /// Records the properties a method declares it modifies.
    pub fn add_modified_props_by_method(&mut self, method: MethodId, properties: Vec<String>) {
        self.modified_props.insert(method, properties);
    }

    /// Returns the properties recorded for a method.
    #[must_use]
    pub fn modified_props_by_method(&self, method: &MethodId) -> Option<&[String]> {
        self.modified_props.get(method).map(Vec::as_slice)
    }

    /// Iterates over all recorded methods and their modified properties.
    pub fn modified_props(&self) -> impl Iterator<Item = (&MethodId, &Vec<String>)> {
        self.modified_props.iter()
    }
}
