//! Integration tests for the three resolution tiers

use typedecl_foundation::QualifiedName;
use typedecl_model::{
    ClassDefinition, ClassPath, FieldDefinition, HostClass, HostField, Nature, TypeDeclaration,
};
use typedecl_resolver::PackageRegistry;

use crate::common::Compilation;

fn shop() -> ClassPath {
    ClassPath::new()
        .with(HostClass::primitive("int"))
        .with(HostClass::array("int[]"))
        .with(HostClass::array("com.acme.Order[]"))
        .with(
            HostClass::class("com.acme.Order")
                .with_field(HostField::new("id", "long"))
                .with_field(HostField::new("total", "double")),
        )
}

// =============================================================================
// Inapplicable input
// =============================================================================

#[test]
fn primitives_and_arrays_resolve_to_nothing() {
    let mut c = Compilation::new(shop());
    for name in ["int", "int[]", "com.acme.Order[]"] {
        assert!(c.resolve(name).is_none(), "{name}");
        assert!(c.resolve_and_register(name, "com.acme").is_none(), "{name}");
    }
    assert_eq!(c.resolver.cache_len(), 0);
    assert!(c.packages.is_empty());
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn repeated_resolution_returns_same_declaration() {
    let mut c = Compilation::new(shop());

    let first = c.resolve_and_register("com.acme.Order", "com.acme").unwrap();
    let snapshot = first.snapshot();
    let second = c.resolve_and_register("com.acme.Order", "com.acme").unwrap();
    let third = c.resolve("com.acme.Order").unwrap();

    assert!(first.ptr_eq(&second));
    assert!(first.ptr_eq(&third));
    assert_eq!(snapshot, third.snapshot());
    assert_eq!(c.packages.package("com.acme").unwrap().len(), 1);
}

// =============================================================================
// Existing declarations
// =============================================================================

#[test]
fn rule_declared_structure_is_kept() {
    let classes = ClassPath::new().with(
        HostClass::class("com.acme.Order")
            .with_field(HostField::new("id", "long").at_position(1))
            .with_field(HostField::new("total", "double"))
            .with_field(HostField::new("note", "String").at_position(0)),
    );
    let mut c = Compilation::new(classes);

    let mut authored = ClassDefinition::named("com.acme.Order");
    authored.add_field(FieldDefinition::new("id", "long").at(0));
    authored.add_field(FieldDefinition::new("total", "double").at(1));
    let declared = TypeDeclaration::declared(QualifiedName::new("com.acme.Order"))
        .with_type_class(QualifiedName::new("com.acme.Order"))
        .with_class_def(authored)
        .into_ref();
    c.packages.declare(declared.clone());

    let decl = c.resolve("com.acme.Order").unwrap();
    assert!(decl.ptr_eq(&declared));

    let d = decl.borrow();
    let def = d.class_def().unwrap();
    // Annotated fields take their positions, the authored field that lost its
    // index keeps its slot in the field list.
    assert_eq!(def.field_at(1).unwrap().name, "id");
    assert_eq!(def.field_at(0).unwrap().name, "note");
    assert_eq!(def.field("total").unwrap().index, None);
    assert_eq!(def.field_count(), 3);
    assert!(c.diagnostics.is_empty());
}

#[test]
fn existing_declaration_is_not_refiled() {
    let mut c = Compilation::new(shop());
    let declared = TypeDeclaration::declared(QualifiedName::new("com.acme.Order")).into_ref();
    c.packages.declare(declared);

    c.resolve_and_register("com.acme.Order", "org.reports");

    assert!(!c.packages.has_package("org.reports"));
}

#[test]
fn synthesized_declaration_is_filed_in_own_package_only() {
    let mut c = Compilation::new(shop());

    let decl = c.resolve_and_register("com.acme.Order", "com.acme").unwrap();
    assert_eq!(decl.borrow().nature(), Nature::Discovered);

    let filed = c.packages.type_declaration("com.acme", "Order").unwrap();
    assert!(filed.ptr_eq(&decl));

    c.resolve_and_register("com.acme.Order", "org.reports");
    assert!(c.packages.type_declaration("org.reports", "Order").is_none());
}
