//! Array-backed names
//!
//! Provides [`ArrayName`], which stores each masked component as its own
//! `String`.

use crate::delimiter::Delimiter;
use crate::error::NameError;
use crate::mask;
use crate::name::{self, private, Components, Name};
use crate::EncodedName;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Name stored as a vector of masked components
///
/// # Examples
/// - `["oss", "cs", "fau", "de"]` with `.` → `oss.cs.fau.de`
/// - `["", "", "", ""]` with `/` → `///`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "NameParts", into = "NameParts")]
pub struct ArrayName {
    delimiter: Delimiter,
    components: Vec<String>,
}

impl ArrayName {
    /// Create from masked components with the default delimiter
    ///
    /// # Errors
    /// Returns `InvalidArgument` if any component is malformed
    pub fn new<I, S>(components: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_delimiter(components, Delimiter::DEFAULT)
    }

    /// Create from masked components with an explicit delimiter
    ///
    /// # Errors
    /// Returns `InvalidArgument` if any component is malformed
    pub fn with_delimiter<I, S>(components: I, delimiter: Delimiter) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        for c in &components {
            mask::validate_component(c, delimiter)?;
        }
        Ok(Self {
            delimiter,
            components,
        })
    }

    /// Create from raw (unmasked) values, masking each one
    #[must_use]
    pub fn from_raw<I, S>(raw: I, delimiter: Delimiter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            delimiter,
            components: raw
                .into_iter()
                .map(|r| mask::mask(r.as_ref(), delimiter))
                .collect(),
        }
    }

    /// Name with no components
    #[inline]
    #[must_use]
    pub fn empty(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            components: Vec::new(),
        }
    }

    /// Parse an encoded string
    ///
    /// Always yields at least one component; `""` is one empty component.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `encoded` ends with a dangling escape
    pub fn parse(encoded: &str, delimiter: Delimiter) -> Result<Self, NameError> {
        Ok(Self {
            delimiter,
            components: mask::split_masked(encoded, delimiter)?,
        })
    }

    /// Get masked components
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.components
    }

    /// Convert into masked components
    #[inline]
    #[must_use]
    pub fn into_components(self) -> Vec<String> {
        self.components
    }
}

impl private::Sealed for ArrayName {}

impl Name for ArrayName {
    #[inline]
    fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    #[inline]
    fn len(&self) -> usize {
        self.components.len()
    }

    fn component(&self, index: usize) -> Result<Cow<'_, str>, NameError> {
        NameError::check_index(index, self.components.len())?;
        Ok(Cow::Borrowed(&self.components[index]))
    }

    fn components(&self) -> Components<'_> {
        Components::from_slice(&self.components)
    }

    fn set_component(&mut self, index: usize, masked: &str) -> Result<(), NameError> {
        NameError::check_index(index, self.components.len())?;
        mask::validate_component(masked, self.delimiter)?;
        self.components[index] = masked.to_string();
        Ok(())
    }

    fn insert(&mut self, index: usize, masked: &str) -> Result<(), NameError> {
        NameError::check_insert_index(index, self.components.len())?;
        mask::validate_component(masked, self.delimiter)?;
        self.components.insert(index, masked.to_string());
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<(), NameError> {
        NameError::check_index(index, self.components.len())?;
        self.components.remove(index);
        Ok(())
    }
}

impl PartialEq for ArrayName {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for ArrayName {}

impl PartialEq<EncodedName> for ArrayName {
    fn eq(&self, other: &EncodedName) -> bool {
        self.is_equal(other)
    }
}

impl Hash for ArrayName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        name::hash_name(self, state);
    }
}

impl Display for ArrayName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let data = self.as_data_string().map_err(|_| fmt::Error)?;
        f.write_str(&data)
    }
}

impl FromStr for ArrayName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Delimiter::DEFAULT)
    }
}

impl From<&EncodedName> for ArrayName {
    fn from(name: &EncodedName) -> Self {
        Self {
            delimiter: name.delimiter(),
            components: name.components().map(str::to_string).collect(),
        }
    }
}

/// Serialized shape shared by every name type
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub(crate) struct NameParts {
    pub(crate) delimiter: Delimiter,
    pub(crate) components: Vec<String>,
}

impl From<ArrayName> for NameParts {
    fn from(name: ArrayName) -> Self {
        Self {
            delimiter: name.delimiter,
            components: name.components,
        }
    }
}

impl TryFrom<NameParts> for ArrayName {
    type Error = NameError;

    fn try_from(parts: NameParts) -> Result<Self, Self::Error> {
        Self::with_delimiter(parts.components, parts.delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slash() -> Delimiter {
        Delimiter::new('/').unwrap()
    }

    #[test]
    fn array_new_and_components() {
        let name = ArrayName::new(["oss", "cs", "fau", "de"]).unwrap();
        assert_eq!(name.len(), 4);
        assert_eq!(name.component(2).unwrap(), "fau");
        assert_eq!(name.as_slice(), &["oss", "cs", "fau", "de"]);
    }

    #[test]
    fn array_rejects_malformed_components() {
        assert!(matches!(
            ArrayName::new(["a.b"]),
            Err(NameError::UnescapedDelimiter { .. })
        ));
        assert!(matches!(
            ArrayName::new(["ok", "bad\\"]),
            Err(NameError::DanglingEscape { .. })
        ));
        // a dot is ordinary text when the delimiter is '/'
        assert!(ArrayName::with_delimiter(["a.b"], slash()).is_ok());
    }

    #[test]
    fn array_from_raw_masks() {
        let name = ArrayName::from_raw(["Oh..."], Delimiter::DEFAULT);
        assert_eq!(name.component(0).unwrap(), "Oh\\.\\.\\.");
        assert_eq!(name.len(), 1);
        assert_eq!(name.as_string().unwrap(), "Oh...");
    }

    #[test]
    fn array_empty_vs_single_empty_component() {
        let empty = ArrayName::empty(Delimiter::DEFAULT);
        assert!(empty.is_empty());

        let one = ArrayName::parse("", Delimiter::DEFAULT).unwrap();
        assert!(!one.is_empty());
        assert_eq!(one.len(), 1);
        assert_ne!(empty, one);
    }

    #[test]
    fn array_insert_bounds() {
        let mut name = ArrayName::new(["a", "c"]).unwrap();
        name.insert(1, "b").unwrap();
        name.insert(3, "d").unwrap();
        assert_eq!(name.as_slice(), &["a", "b", "c", "d"]);

        let err = name.insert(5, "x").unwrap_err();
        assert!(matches!(
            err,
            NameError::IndexOutOfRange {
                index: 5,
                len: 4,
                allow_end: true
            }
        ));
    }

    #[test]
    fn array_failed_edit_leaves_name_unchanged() {
        let mut name = ArrayName::new(["a", "b", "c"]).unwrap();
        let before = name.clone();
        assert!(name.remove(3).is_err());
        assert!(name.set_component(0, "x.y").is_err());
        assert!(name.insert(1, "tail\\").is_err());
        assert_eq!(name, before);
    }

    #[test]
    fn array_parse_and_display() {
        let name: ArrayName = "oss.cs.fau.de".parse().unwrap();
        assert_eq!(name.len(), 4);
        assert_eq!(name.to_string(), "oss.cs.fau.de");
    }

    #[test]
    fn array_display_remasks_for_canonical_delimiter() {
        let name = ArrayName::from_raw(["a.b", "c/d"], slash());
        // stored under '/': ["a.b", "c\/d"]
        assert_eq!(name.as_slice(), &["a.b", "c\\/d"]);
        assert_eq!(name.to_string(), "a\\.b.c/d");
    }

    #[test]
    fn array_serde_roundtrip() {
        let name = ArrayName::with_delimiter(["a", "b\\/c"], slash()).unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#"{"delimiter":"/","components":["a","b\\/c"]}"#);
        let back: ArrayName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn array_serde_rejects_malformed() {
        let json = r#"{"delimiter":".","components":["a.b"]}"#;
        assert!(serde_json::from_str::<ArrayName>(json).is_err());
    }
}
