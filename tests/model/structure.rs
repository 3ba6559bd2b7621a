//! Integration tests for structural definitions and host class descriptors

use typedecl_foundation::QualifiedName;
use typedecl_model::{
    ClassDefinition, ClassDefinitionFactory, ClassIntrospector, ClassPath, FieldDefinition,
    HostClass, HostField, superclasses,
};

fn vehicles() -> ClassPath {
    ClassPath::new()
        .with(HostClass::class(QualifiedName::ROOT).with_field(HostField::new("hidden", "int")))
        .with(
            HostClass::class("com.acme.Vehicle")
                .extends(QualifiedName::ROOT)
                .with_field(HostField::new("wheels", "int")),
        )
        .with(
            HostClass::class("com.acme.Car")
                .extends("com.acme.Vehicle")
                .with_field(HostField::new("doors", "int").at_position(0)),
        )
}

#[test]
fn root_contributes_no_fields() {
    let classes = vehicles();
    let car = classes.get("com.acme.Car").unwrap();
    let fields = ClassDefinitionFactory::flatten_fields(car, &classes);
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["doors", "wheels"]);
}

#[test]
fn populated_fields_start_unpositioned() {
    let classes = vehicles();
    let car = classes.get("com.acme.Car").unwrap();
    let mut def = ClassDefinition::new();
    ClassDefinitionFactory::populate_from_class(&mut def, car, &classes, false);

    assert_eq!(def.field_count(), 2);
    assert!(def.field_at(0).is_none());
    assert_eq!(def.superclass(), Some("com.acme.Vehicle"));
}

#[test]
fn unknown_superclass_ends_chain() {
    let classes = ClassPath::new().with(HostClass::class("a.A").extends("a.Missing"));
    let a = classes.get("a.A").unwrap();
    assert_eq!(superclasses(&classes, a).count(), 0);
}

#[test]
fn introspector_lookup_by_name() {
    let classes = vehicles();
    assert!(classes.class(&QualifiedName::new("com.acme.Car")).is_some());
    assert!(classes.class(&QualifiedName::new("com.acme.Boat")).is_none());
    assert_eq!(classes.len(), 3);
}

#[test]
fn explicit_index_displaces_authored_order() {
    let mut def = ClassDefinition::named("com.acme.Car");
    def.add_field(FieldDefinition::new("make", "String").at(0));
    def.add_field(FieldDefinition::new("model", "String").at(1));

    def.set_field_index("model", 0);

    let ordered: Vec<_> = def
        .fields_in_position_order()
        .into_iter()
        .map(|f| (f.name.as_str(), f.index))
        .collect();
    assert_eq!(ordered, vec![("model", Some(0)), ("make", None)]);
}
