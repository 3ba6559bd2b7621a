//! typedecl - Type declaration resolution for a rule-language compiler
//!
//! This crate re-exports all layers of the typedecl system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: typedecl_resolver   — Resolver, ancestor closure, builtins, cache
//! Layer 1: typedecl_model      — Declarations, structural definitions, host classes
//! Layer 0: typedecl_foundation — Core types (QualifiedName, ResourceId, Error)
//! ```

pub use typedecl_foundation as foundation;
pub use typedecl_model as model;
pub use typedecl_resolver as resolver;
