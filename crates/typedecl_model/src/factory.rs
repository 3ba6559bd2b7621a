//! Builds structural definitions from host class descriptors.

use std::collections::HashSet;

use crate::class_def::{ClassDefinition, FieldDefinition};
use crate::host::{ClassIntrospector, HostClass, HostField, superclasses};

/// Populates [`ClassDefinition`]s from host classes.
pub struct ClassDefinitionFactory;

impl ClassDefinitionFactory {
    /// Fills `def` from `class`: name, superclass, interfaces, trait flag and
    /// the flattened fields of the class and its superclasses (root
    /// excluded). Fields are added unpositioned; a field shadowed by a nearer
    /// class keeps the nearer declaration.
    pub fn populate_from_class(
        def: &mut ClassDefinition,
        class: &HostClass,
        classes: &dyn ClassIntrospector,
        as_trait: bool,
    ) {
        def.set_class_name(class.name.as_str());
        def.set_superclass(class.effective_superclass().map(ToString::to_string));
        def.set_interfaces(class.interfaces.iter().map(ToString::to_string).collect());
        def.set_trait(as_trait);

        let mut seen = HashSet::new();
        for field in Self::flatten_fields(class, classes) {
            if seen.insert(field.name.as_str()) {
                def.add_field(FieldDefinition::new(&field.name, &field.type_name));
            }
        }
    }

    /// Returns the fields declared on `class` followed by those of each
    /// superclass, nearest first, up to but excluding the root.
    #[must_use]
    pub fn flatten_fields<'a>(
        class: &'a HostClass,
        classes: &'a dyn ClassIntrospector,
    ) -> Vec<&'a HostField> {
        let mut fields: Vec<&HostField> = class.fields.iter().collect();
        for superclass in superclasses(classes, class) {
            fields.extend(superclass.fields.iter());
        }
        fields
    }
}
