//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use typedecl_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_out_of_range_position() {
    let err = Error::out_of_range_position(7, "age", "com.acme.Person");
    assert!(matches!(err.kind, ErrorKind::OutOfRangePosition { position: 7, .. }));
    let msg = format!("{err}");
    assert!(msg.contains("7"));
    assert!(msg.contains("'age'"));
    assert!(msg.contains("com.acme.Person"));
}

#[test]
fn error_duplicate_position() {
    let err = Error::duplicate_position(1, "name", "com.acme.Person");
    if let ErrorKind::DuplicatePosition {
        position,
        field,
        class,
    } = &err.kind
    {
        assert_eq!(*position, 1);
        assert_eq!(field, "name");
        assert_eq!(class, "com.acme.Person");
    } else {
        panic!("Expected DuplicatePosition");
    }
}

#[test]
fn error_invalid_option() {
    let err = Error::invalid_option("typedecl.propertySpecific", "maybe");
    let msg = format!("{err}");
    assert!(msg.contains("typedecl.propertySpecific"));
    assert!(msg.contains("maybe"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display_lists_frames() {
    let ctx = ErrorContext::new()
        .with_resource("rules/orders.drl")
        .with_frame("com.acme.Order")
        .with_frame("com.acme.LineItem");
    let display = ctx.to_string();

    assert!(display.starts_with("in rules/orders.drl"));
    assert!(display.contains("resolving com.acme.Order"));
    assert!(display.contains("resolving com.acme.LineItem"));
}

#[test]
fn context_does_not_change_message() {
    let plain = Error::invalid_name("a..b");
    let with_ctx = plain.clone().with_context(ErrorContext::new().with_resource("x"));
    assert_eq!(plain.to_string(), with_ctx.to_string());
}

// =============================================================================
// Kind Coverage
// =============================================================================

#[test]
fn every_kind_has_a_constructor() {
    let errors = [
        Error::out_of_range_position(5, "f", "a.B"),
        Error::duplicate_position(1, "f", "a.B"),
        Error::invalid_option("typedecl.propertySpecific", "sometimes"),
        Error::invalid_name("a..B"),
    ];
    for err in &errors {
        let constructed = match &err.kind {
            ErrorKind::OutOfRangePosition { .. }
            | ErrorKind::DuplicatePosition { .. }
            | ErrorKind::InvalidOption { .. }
            | ErrorKind::InvalidName(_) => true,
        };
        assert!(constructed);
        assert!(err.context.is_none());
    }
}
