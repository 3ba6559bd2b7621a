//! Structural definitions, type declarations, and host class descriptors.
//!
//! This crate provides:
//! - [`ClassDefinition`] / [`FieldDefinition`] - Field-level shape of a type
//! - [`TypeDeclaration`] / [`DeclRef`] - Cached metadata per type identity
//! - [`HostClass`] / [`ClassIntrospector`] - Descriptors of host classes
//! - [`ClassDefinitionFactory`] - Builds structural definitions from classes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod class_def;
pub mod declaration;
pub mod factory;
pub mod host;

pub use class_def::{ClassDefinition, FieldDefinition, MethodId};
pub use declaration::{
    DeclRef, Format, Kind, Nature, PropertySettings, Reactivity, Role, Setting, TypeDeclaration,
};
pub use factory::ClassDefinitionFactory;
pub use host::{
    ClassIntrospector, ClassMarkers, ClassPath, ClassShape, HostClass, HostField, HostMethod,
    Superclasses, superclasses,
};
