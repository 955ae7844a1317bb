//! Encoded-string-backed names
//!
//! Provides [`EncodedName`], which keeps all components in one string joined
//! by the name's delimiter and caches the component count.

use crate::array::NameParts;
use crate::delimiter::Delimiter;
use crate::error::NameError;
use crate::mask;
use crate::name::{self, private, Components, Name};
use crate::ArrayName;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Name stored as a single encoded string
///
/// Components are found by scanning the string for unescaped delimiters.
/// Edits parse the string, change the component list, and re-encode it;
/// each edit is O(n) in the encoded length.
///
/// # Invariants
/// - `len` equals the component count of `encoded`, except that the
///   zero-component name is stored as `("", 0)`
/// - `encoded` never ends with a dangling escape
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "NameParts", into = "NameParts")]
pub struct EncodedName {
    delimiter: Delimiter,
    encoded: String,
    len: usize,
}

impl EncodedName {
    /// Parse an encoded string
    ///
    /// Always yields at least one component; `""` is one empty component.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `encoded` ends with a dangling escape
    pub fn parse(encoded: impl Into<String>, delimiter: Delimiter) -> Result<Self, NameError> {
        let encoded = encoded.into();
        let len = mask::count_components(&encoded, delimiter)?;
        Ok(Self {
            delimiter,
            encoded,
            len,
        })
    }

    /// Create from masked components
    ///
    /// # Errors
    /// Returns `InvalidArgument` if any component is malformed
    pub fn from_components<I, S>(components: I, delimiter: Delimiter) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parts: Vec<S> = components.into_iter().collect();
        for c in &parts {
            mask::validate_component(c.as_ref(), delimiter)?;
        }
        let mut name = Self::empty(delimiter);
        name.store(&parts)?;
        Ok(name)
    }

    /// Name with no components
    #[inline]
    #[must_use]
    pub fn empty(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            encoded: String::new(),
            len: 0,
        }
    }

    /// The backing string
    #[inline]
    #[must_use]
    pub fn as_encoded(&self) -> &str {
        &self.encoded
    }

    /// Masked components parsed from the backing string
    fn parts(&self) -> Vec<String> {
        self.components().map(str::to_string).collect()
    }

    /// Re-encode `parts` into the backing string
    ///
    /// Re-scans the new encoding and fails without touching `self` if the
    /// count disagrees.
    fn store<S: AsRef<str>>(&mut self, parts: &[S]) -> Result<(), NameError> {
        let encoded = mask::join_masked(parts, self.delimiter);
        let len = parts.len();
        if len > 0 {
            let rescanned =
                mask::count_components(&encoded, self.delimiter).map_err(NameError::corrupted)?;
            if rescanned != len {
                return Err(NameError::InvalidState(format!(
                    "encoded name {encoded:?} has {rescanned} component(s), expected {len}"
                )));
            }
        }
        tracing::trace!(encoded = %encoded, len, "re-encoded name");
        self.encoded = encoded;
        self.len = len;
        Ok(())
    }
}

impl private::Sealed for EncodedName {}

impl Name for EncodedName {
    #[inline]
    fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn component(&self, index: usize) -> Result<Cow<'_, str>, NameError> {
        NameError::check_index(index, self.len)?;
        mask::split_components(&self.encoded, self.delimiter)
            .nth(index)
            .map(Cow::Borrowed)
            .ok_or_else(|| {
                NameError::InvalidState(format!(
                    "component {index} missing from {:?}",
                    self.encoded
                ))
            })
    }

    fn components(&self) -> Components<'_> {
        Components::from_encoded(&self.encoded, self.delimiter, self.len)
    }

    fn set_component(&mut self, index: usize, masked: &str) -> Result<(), NameError> {
        NameError::check_index(index, self.len)?;
        mask::validate_component(masked, self.delimiter)?;
        let mut parts = self.parts();
        parts[index] = masked.to_string();
        self.store(&parts)
    }

    fn insert(&mut self, index: usize, masked: &str) -> Result<(), NameError> {
        NameError::check_insert_index(index, self.len)?;
        mask::validate_component(masked, self.delimiter)?;
        let mut parts = self.parts();
        parts.insert(index, masked.to_string());
        self.store(&parts)
    }

    fn remove(&mut self, index: usize) -> Result<(), NameError> {
        NameError::check_index(index, self.len)?;
        let mut parts = self.parts();
        parts.remove(index);
        self.store(&parts)
    }
}

impl PartialEq for EncodedName {
    fn eq(&self, other: &Self) -> bool {
        self.delimiter == other.delimiter && self.len == other.len && self.encoded == other.encoded
    }
}

impl Eq for EncodedName {}

impl PartialEq<ArrayName> for EncodedName {
    fn eq(&self, other: &ArrayName) -> bool {
        self.is_equal(other)
    }
}

impl Hash for EncodedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        name::hash_name(self, state);
    }
}

impl Display for EncodedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let data = self.as_data_string().map_err(|_| fmt::Error)?;
        f.write_str(&data)
    }
}

impl FromStr for EncodedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Delimiter::DEFAULT)
    }
}

impl From<&ArrayName> for EncodedName {
    fn from(name: &ArrayName) -> Self {
        Self {
            delimiter: name.delimiter(),
            encoded: mask::join_masked(name.as_slice(), name.delimiter()),
            len: name.len(),
        }
    }
}

impl From<EncodedName> for NameParts {
    fn from(name: EncodedName) -> Self {
        Self {
            delimiter: name.delimiter,
            components: name.parts(),
        }
    }
}

impl TryFrom<NameParts> for EncodedName {
    type Error = NameError;

    fn try_from(parts: NameParts) -> Result<Self, Self::Error> {
        Self::from_components(parts.components, parts.delimiter)
    }
}
