//! Builder configuration.

use std::fmt;
use std::str::FromStr;

use typedecl_foundation::{Error, Result};

/// Policy deciding whether a class gets property-level reactivity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PropertySpecificOption {
    /// Never property-reactive.
    Disabled,
    /// Property-reactive only when the class opts in.
    Allowed,
    /// Property-reactive unless the class opts out.
    #[default]
    Always,
}

impl PropertySpecificOption {
    /// Configuration key this option is read from.
    pub const KEY: &'static str = "typedecl.propertySpecific";

    /// Resolves reactivity from the class's two markers.
    #[must_use]
    pub fn is_prop_specific(self, has_property_reactive: bool, has_class_reactive: bool) -> bool {
        match self {
            Self::Disabled => false,
            Self::Allowed => has_property_reactive,
            Self::Always => !has_class_reactive,
        }
    }
}

impl FromStr for PropertySpecificOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disabled" => Ok(Self::Disabled),
            "allowed" => Ok(Self::Allowed),
            "always" => Ok(Self::Always),
            _ => Err(Error::invalid_option(Self::KEY, s)),
        }
    }
}

impl fmt::Display for PropertySpecificOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Allowed => write!(f, "allowed"),
            Self::Always => write!(f, "always"),
        }
    }
}

/// Options consulted while building type declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Property reactivity policy.
    pub property_specific: PropertySpecificOption,
}

impl BuilderConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the property reactivity policy.
    #[must_use]
    pub fn with_property_specific(mut self, option: PropertySpecificOption) -> Self {
        self.property_specific = option;
        self
    }

    /// Reads options from key/value pairs. Unknown keys are ignored.
    ///
    /// # Errors
    /// Returns `InvalidOption` if a known key has an unrecognized value.
    pub fn from_properties<I, K, V>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in properties {
            if key.as_ref() == PropertySpecificOption::KEY {
                config.property_specific = value.as_ref().parse()?;
            }
        }
        Ok(config)
    }
}
