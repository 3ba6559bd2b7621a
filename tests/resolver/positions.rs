//! Integration tests for field position processing

use typedecl_foundation::{ErrorKind, ResourceId};
use typedecl_model::{ClassPath, HostClass, HostField};

use crate::common::Compilation;

fn five_fields(positions: [Option<i32>; 5]) -> ClassPath {
    let mut class = HostClass::class("com.acme.Reading");
    for (i, position) in positions.into_iter().enumerate() {
        let mut field = HostField::new(format!("f{i}"), "int");
        if let Some(p) = position {
            field = field.at_position(p);
        }
        class = class.with_field(field);
    }
    ClassPath::new().with(class)
}

#[test]
fn distinct_positions_are_applied() {
    let mut c = Compilation::new(five_fields([Some(2), None, Some(0), Some(1), None]));

    let decl = c.resolve("com.acme.Reading").unwrap();
    let d = decl.borrow();
    let def = d.class_def().unwrap();

    assert_eq!(def.field("f0").unwrap().index, Some(2));
    assert_eq!(def.field("f2").unwrap().index, Some(0));
    assert_eq!(def.field("f3").unwrap().index, Some(1));
    assert_eq!(def.field("f1").unwrap().index, None);
    assert_eq!(def.field("f4").unwrap().index, None);
    assert!(c.diagnostics.is_empty());
}

#[test]
fn out_of_range_position_is_diagnosed() {
    let mut c = Compilation::new(five_fields([None, None, None, Some(5), None]));

    let decl = c.resolve("com.acme.Reading").unwrap();

    assert_eq!(c.diagnostics.len(), 1);
    let diagnostic = c.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.type_name.as_str(), "com.acme.Reading");
    assert_eq!(
        diagnostic.error.kind,
        ErrorKind::OutOfRangePosition {
            position: 5,
            field: "f3".to_string(),
            class: "com.acme.Reading".to_string(),
        }
    );
    let context = diagnostic.error.context.as_ref().unwrap();
    assert_eq!(context.stack, vec!["com.acme.Reading".to_string()]);
    assert_eq!(context.resource, None);
    assert_eq!(decl.borrow().class_def().unwrap().field("f3").unwrap().index, None);
}

#[test]
fn diagnostics_carry_origin_resource() {
    let classes = ClassPath::new().with(
        HostClass::class("com.acme.Pair")
            .with_field(HostField::new("left", "int").at_position(-1))
            .from_resource(ResourceId::new("rules/pairs.drl")),
    );
    let mut c = Compilation::new(classes);

    c.resolve("com.acme.Pair");

    let diagnostic = c.diagnostics.iter().next().unwrap();
    let context = diagnostic.error.context.as_ref().unwrap();
    assert_eq!(context.resource.as_deref(), Some("rules/pairs.drl"));
}

#[test]
fn duplicate_position_keeps_first_assignment() {
    let mut c = Compilation::new(five_fields([None, Some(1), None, Some(1), None]));

    let decl = c.resolve("com.acme.Reading").unwrap();

    assert_eq!(c.diagnostics.len(), 1);
    let diagnostic = c.diagnostics.iter().next().unwrap();
    assert!(matches!(
        &diagnostic.error.kind,
        ErrorKind::DuplicatePosition { position: 1, field, .. } if field == "f3"
    ));

    let d = decl.borrow();
    let def = d.class_def().unwrap();
    assert_eq!(def.field("f1").unwrap().index, Some(1));
    assert_eq!(def.field("f3").unwrap().index, None);
}

#[test]
fn inherited_fields_count_toward_the_range() {
    let classes = ClassPath::new()
        .with(
            HostClass::class("com.acme.Base")
                .with_field(HostField::new("id", "long"))
                .with_field(HostField::new("stamp", "long")),
        )
        .with(
            HostClass::class("com.acme.Child")
                .extends("com.acme.Base")
                .with_field(HostField::new("value", "int").at_position(2)),
        );
    let mut c = Compilation::new(classes);

    let decl = c.resolve("com.acme.Child").unwrap();

    assert!(c.diagnostics.is_empty());
    let d = decl.borrow();
    let def = d.class_def().unwrap();
    assert_eq!(def.field_count(), 3);
    assert_eq!(def.field_at(2).unwrap().name, "value");
}

#[test]
fn diagnostics_are_reported_once_per_initialization() {
    let mut c = Compilation::new(five_fields([Some(7), None, None, None, None]));

    c.resolve("com.acme.Reading");
    c.resolve("com.acme.Reading");
    c.resolve_and_register("com.acme.Reading", "com.acme");

    assert_eq!(c.diagnostics.len(), 1);
}
