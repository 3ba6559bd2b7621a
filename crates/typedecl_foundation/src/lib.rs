//! Core names, resource handles, and error types for typedecl.
//!
//! This crate provides:
//! - [`QualifiedName`] - Dotted type identities with package/simple-name views
//! - [`ResourceId`] - Opaque handles to the source unit a declaration came from
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod name;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use name::{QualifiedName, ResourceId};
