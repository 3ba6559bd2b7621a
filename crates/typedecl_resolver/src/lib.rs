//! Type declaration resolver, ancestor closure, and cache.
//!
//! This crate provides:
//! - [`TypeDeclarationCache`] - Three-tier resolution and initialization
//! - [`ClosureBuilder`] - Ancestor closure over superclasses and interfaces
//! - [`BuiltinRegistry`] - Engine pseudo-type declarations
//! - [`PackageRegistry`] / [`Packages`] - Per-package declaration tables
//! - [`BuilderConfig`] - Reactivity policy and other builder options
//! - [`Diagnostics`] - Non-fatal structural errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtins;
pub mod cache;
pub mod closure;
pub mod config;
pub mod diagnostics;
pub mod package;
pub mod resolver;

pub use builtins::BuiltinRegistry;
pub use cache::TypeCache;
pub use closure::{AncestorClosure, ClosureBuilder, lookup_declaration};
pub use config::{BuilderConfig, PropertySpecificOption};
pub use diagnostics::{DiagnosticSink, Diagnostics, TypeDeclarationError};
pub use package::{Package, PackageRegistry, Packages};
pub use resolver::{BuildContext, TypeDeclarationCache};
