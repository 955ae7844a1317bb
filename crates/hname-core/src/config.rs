//! Name construction settings
//!
//! [`NameConfig`] bundles the delimiter and storage representation so that
//! callers building many names do not repeat them.

use crate::any::{AnyName, Representation};
use crate::delimiter::Delimiter;
use crate::error::NameError;
use serde::{Deserialize, Serialize};

/// Settings for building [`AnyName`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NameConfig {
    /// Component delimiter
    pub delimiter: Delimiter,
    /// Storage variant
    pub representation: Representation,
}

impl NameConfig {
    /// Create default configuration (`.`, array-backed)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With delimiter
    #[inline]
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// With representation
    #[inline]
    #[must_use]
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Load from JSON
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns error if the JSON is malformed or the delimiter is invalid
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse an encoded string with these settings
    ///
    /// # Errors
    /// See [`AnyName::parse`]
    pub fn parse(&self, encoded: &str) -> Result<AnyName, NameError> {
        AnyName::parse(encoded, self.delimiter, self.representation)
    }

    /// Build from masked components with these settings
    ///
    /// # Errors
    /// See [`AnyName::from_components`]
    pub fn from_components<I, S>(&self, components: I) -> Result<AnyName, NameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnyName::from_components(components, self.delimiter, self.representation)
    }

    /// Rebuild from a canonical data string with these settings
    ///
    /// # Errors
    /// See [`AnyName::from_data_string`]
    pub fn from_data_string(&self, data: &str) -> Result<AnyName, NameError> {
        AnyName::from_data_string(data, self.delimiter, self.representation)
    }

    /// Empty name with these settings
    #[must_use]
    pub fn empty(&self) -> AnyName {
        AnyName::empty(self.delimiter, self.representation)
    }
}
