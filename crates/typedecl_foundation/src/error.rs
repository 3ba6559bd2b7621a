//! Error types for the typedecl system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for typedecl operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an out-of-range field position error.
    #[must_use]
    pub fn out_of_range_position(
        position: i32,
        field: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::OutOfRangePosition {
            position,
            field: field.into(),
            class: class.into(),
        })
    }

    /// Creates a duplicated field position error.
    #[must_use]
    pub fn duplicate_position(
        position: i32,
        field: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::DuplicatePosition {
            position,
            field: field.into(),
            class: class.into(),
        })
    }

    /// Creates an invalid configuration option error.
    #[must_use]
    pub fn invalid_option(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOption {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Creates an invalid name error.
    #[must_use]
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidName(name.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A field position annotation lies outside `[0, field_count)`.
    #[error("Out of range position {position} for field '{field}' on class {class}")]
    OutOfRangePosition {
        /// The annotated position.
        position: i32,
        /// The annotated field.
        field: String,
        /// The class declaring the field.
        class: String,
    },

    /// Two fields claim the same position.
    #[error("Duplicated position {position} for field '{field}' on class {class}")]
    DuplicatePosition {
        /// The contested position.
        position: i32,
        /// The field that lost the position.
        field: String,
        /// The class declaring the field.
        class: String,
    },

    /// A configuration option had an unrecognized value.
    #[error("invalid value '{value}' for option {key}")]
    InvalidOption {
        /// The option key.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// A type or package name was malformed.
    #[error("invalid name: '{0}'")]
    InvalidName(String),
}

/// Context about where an error occurred.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Resource (rule file or class descriptor table) being compiled.
    pub resource: Option<String>,
    /// Chain of type names being resolved, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resource.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Adds a resolution frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(resource) = &self.resource {
            write!(f, "in {resource}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  resolving {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result alias used throughout typedecl.
pub type Result<T> = std::result::Result<T, Error>;
