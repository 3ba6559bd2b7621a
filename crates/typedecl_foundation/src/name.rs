//! Qualified type names and resource handles.
//!
//! Type identities are dotted names like `com.acme.Person`. The package is
//! everything before the last dot and the simple name everything after it.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};

// =============================================================================
// QualifiedName
// =============================================================================

/// A fully qualified type name like `com.acme.Person`.
///
/// Cheap to clone; the text is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName(Arc<str>);

impl QualifiedName {
    /// Name of the universal root class every host class ultimately extends.
    pub const ROOT: &'static str = "lang.Object";

    /// Creates a qualified name without validation.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().into())
    }

    /// Parses a dotted name, rejecting empty names and empty segments.
    ///
    /// # Errors
    /// Returns `InvalidName` if the name is empty or has an empty segment.
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() || name.split('.').any(str::is_empty) {
            return Err(Error::invalid_name(name));
        }
        Ok(Self::new(name))
    }

    /// Joins a package and a simple name.
    #[must_use]
    pub fn from_parts(package: &str, simple_name: &str) -> Self {
        if package.is_empty() {
            Self::new(simple_name)
        } else {
            Self::new(format!("{package}.{simple_name}"))
        }
    }

    /// The universal root class name.
    #[must_use]
    pub fn root() -> Self {
        Self::new(Self::ROOT)
    }

    /// Returns true if this is the universal root class.
    #[must_use]
    pub fn is_root(&self) -> bool {
        &*self.0 == Self::ROOT
    }

    /// Returns the full dotted name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the package part (empty for the default package).
    #[must_use]
    pub fn package(&self) -> &str {
        self.0.rfind('.').map_or("", |idx| &self.0[..idx])
    }

    /// Returns the simple name (last segment).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rfind('.').map_or(&*self.0, |idx| &self.0[idx + 1..])
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({})", self.0)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QualifiedName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// ResourceId
// =============================================================================

/// Opaque handle to the source unit (rule file, descriptor table) that
/// produced a declaration. Only compared for equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(Arc<str>);

impl ResourceId {
    /// Creates a resource handle from its path or identifier.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({})", self.0)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
