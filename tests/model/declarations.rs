//! Integration tests for type declarations and property settings

use typedecl_foundation::{QualifiedName, ResourceId};
use typedecl_model::{
    ClassDefinition, FieldDefinition, Format, Kind, Nature, PropertySettings, Reactivity, Role,
    Setting, TypeDeclaration,
};

fn order() -> QualifiedName {
    QualifiedName::new("com.acme.Order")
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn declared_type_builder() {
    let decl = TypeDeclaration::declared(order())
        .with_kind(Kind::Trait)
        .with_role(Role::Event)
        .with_format(Format::Trait)
        .with_typesafe(false)
        .with_reactivity(Reactivity::Property)
        .with_resource(ResourceId::new("orders.drl"))
        .with_class_def(ClassDefinition::named("com.acme.Order"));

    assert_eq!(decl.nature(), Nature::Declared);
    assert_eq!(decl.kind(), Kind::Trait);
    assert_eq!(decl.role(), Role::Event);
    assert_eq!(decl.format(), Format::Trait);
    assert!(!decl.is_typesafe());
    assert!(decl.is_property_reactive());
    assert_eq!(decl.resource(), Some(&ResourceId::new("orders.drl")));
    assert!(decl.type_class().is_none());
    assert!(decl.class_def().is_some());
}

#[test]
fn every_builder_setter_is_explicit() {
    let decl = TypeDeclaration::declared(order())
        .with_role(Role::Fact)
        .with_format(Format::Pojo)
        .with_typesafe(true);
    let settings = decl.settings();
    assert!(settings.role.is_set());
    assert!(settings.format.is_set());
    assert!(settings.typesafe.is_set());
}

// =============================================================================
// Merging
// =============================================================================

#[test]
fn merge_fills_only_unset_properties() {
    let mut decl = TypeDeclaration::discovered(order()).with_role(Role::Fact);
    let ancestor = PropertySettings {
        role: Setting::Explicit(Role::Event),
        format: Setting::Explicit(Format::Trait),
        typesafe: Setting::Unset,
    };

    decl.inherit_from(&ancestor);

    assert_eq!(decl.settings().role, Setting::Explicit(Role::Fact));
    assert_eq!(decl.settings().format, Setting::Inherited(Format::Trait));
    assert_eq!(decl.settings().typesafe, Setting::Unset);
    assert_eq!(decl.format(), Format::Trait);
}

#[test]
fn nearer_merge_replaces_inherited_value() {
    let mut decl = TypeDeclaration::discovered(order());
    let far = PropertySettings {
        role: Setting::Explicit(Role::Event),
        ..PropertySettings::default()
    };
    let near = PropertySettings {
        role: Setting::Explicit(Role::Fact),
        ..PropertySettings::default()
    };

    decl.inherit_from(&far);
    decl.inherit_from(&near);

    assert_eq!(decl.settings().role, Setting::Inherited(Role::Fact));
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn snapshot_is_detached() {
    let mut def = ClassDefinition::named("com.acme.Order");
    def.add_field(FieldDefinition::new("id", "long"));
    let shared = TypeDeclaration::declared(order()).with_class_def(def).into_ref();

    let snapshot = shared.snapshot();
    if let Some(def) = shared.borrow_mut().class_def_mut() {
        def.add_field(FieldDefinition::new("total", "double"));
    }

    assert_eq!(snapshot.class_def().unwrap().field_count(), 1);
    assert_eq!(shared.borrow().class_def().unwrap().field_count(), 2);
}

#[test]
fn debug_shows_type_name() {
    let shared = TypeDeclaration::declared(order()).into_ref();
    assert_eq!(format!("{shared:?}"), "DeclRef(com.acme.Order)");
}
