//! Non-fatal builder diagnostics.

use thiserror::Error;

use typedecl_foundation::{Error, QualifiedName};

/// A structural problem found while initializing a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{type_name}: {error}")]
pub struct TypeDeclarationError {
    /// The declaration being initialized.
    pub type_name: QualifiedName,
    /// What went wrong.
    #[source]
    pub error: Error,
}

impl TypeDeclarationError {
    /// Creates a diagnostic for a declaration.
    #[must_use]
    pub fn new(type_name: QualifiedName, error: Error) -> Self {
        Self { type_name, error }
    }
}

/// Receives diagnostics reported during resolution.
pub trait DiagnosticSink {
    /// Records a diagnostic.
    fn report(&mut self, error: TypeDeclarationError);
}

/// Ordered accumulator of diagnostics.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    errors: Vec<TypeDeclarationError>,
}

impl Diagnostics {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates in report order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDeclarationError> {
        self.errors.iter()
    }

    /// Diagnostics attached to one declaration.
    pub fn for_type<'a>(
        &'a self,
        type_name: &'a QualifiedName,
    ) -> impl Iterator<Item = &'a TypeDeclarationError> {
        self.errors.iter().filter(move |e| &e.type_name == type_name)
    }

    /// Drains all recorded diagnostics.
    pub fn take(&mut self) -> Vec<TypeDeclarationError> {
        std::mem::take(&mut self.errors)
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, error: TypeDeclarationError) {
        self.errors.push(error);
    }
}

impl DiagnosticSink for Vec<TypeDeclarationError> {
    fn report(&mut self, error: TypeDeclarationError) {
        self.push(error);
    }
}
