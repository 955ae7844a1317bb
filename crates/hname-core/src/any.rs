//! Representation-agnostic names
//!
//! [`AnyName`] is the closed set of storage variants behind one type. The
//! variant is chosen at construction time with [`Representation`].

use crate::array::NameParts;
use crate::delimiter::Delimiter;
use crate::error::NameError;
use crate::mask;
use crate::name::{self, private, Components, Name};
use crate::{ArrayName, EncodedName};
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

/// Storage strategy for a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// One `String` per component
    #[default]
    Array,
    /// One encoded `String` for the whole name
    Encoded,
}

/// A name in either representation
///
/// Behaves identically whichever variant it holds; equality and hashing
/// ignore the representation.
#[derive(Debug, Clone)]
pub enum AnyName {
    /// Array-backed storage
    Array(ArrayName),
    /// Encoded-string storage
    Encoded(EncodedName),
}

macro_rules! dispatch {
    ($self:expr, $n:ident => $body:expr) => {
        match $self {
            AnyName::Array($n) => $body,
            AnyName::Encoded($n) => $body,
        }
    };
}

impl AnyName {
    /// Create from masked components
    ///
    /// # Errors
    /// Returns `InvalidArgument` if any component is malformed
    pub fn from_components<I, S>(
        components: I,
        delimiter: Delimiter,
        representation: Representation,
    ) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let array = ArrayName::with_delimiter(components, delimiter)?;
        Ok(Self::from(array).into_representation(representation))
    }

    /// Parse an encoded string joined with `delimiter`
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `encoded` ends with a dangling escape
    pub fn parse(
        encoded: &str,
        delimiter: Delimiter,
        representation: Representation,
    ) -> Result<Self, NameError> {
        Ok(match representation {
            Representation::Array => Self::Array(ArrayName::parse(encoded, delimiter)?),
            Representation::Encoded => Self::Encoded(EncodedName::parse(encoded, delimiter)?),
        })
    }

    /// Rebuild a name from its canonical data string
    ///
    /// Parses `data` with the canonical delimiter and re-masks every
    /// component for `delimiter`. Inverse of [`Name::as_data_string`].
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `data` ends with a dangling escape
    pub fn from_data_string(
        data: &str,
        delimiter: Delimiter,
        representation: Representation,
    ) -> Result<Self, NameError> {
        let components = mask::split_masked(data, Delimiter::CANONICAL)?
            .iter()
            .map(|c| mask::remask(c, Delimiter::CANONICAL, delimiter))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_components(components, delimiter, representation)
    }

    /// Name with no components
    #[must_use]
    pub fn empty(delimiter: Delimiter, representation: Representation) -> Self {
        match representation {
            Representation::Array => Self::Array(ArrayName::empty(delimiter)),
            Representation::Encoded => Self::Encoded(EncodedName::empty(delimiter)),
        }
    }

    /// Which storage variant is in use
    #[inline]
    #[must_use]
    pub fn representation(&self) -> Representation {
        match self {
            Self::Array(_) => Representation::Array,
            Self::Encoded(_) => Representation::Encoded,
        }
    }

    /// Convert to the given storage variant
    #[must_use]
    pub fn into_representation(self, representation: Representation) -> Self {
        match (self, representation) {
            (Self::Array(a), Representation::Encoded) => Self::Encoded(EncodedName::from(&a)),
            (Self::Encoded(e), Representation::Array) => Self::Array(ArrayName::from(&e)),
            (same, _) => same,
        }
    }
}

impl private::Sealed for AnyName {}

impl Name for AnyName {
    fn delimiter(&self) -> Delimiter {
        dispatch!(self, n => n.delimiter())
    }

    fn len(&self) -> usize {
        dispatch!(self, n => n.len())
    }

    fn component(&self, index: usize) -> Result<Cow<'_, str>, NameError> {
        dispatch!(self, n => n.component(index))
    }

    fn components(&self) -> Components<'_> {
        dispatch!(self, n => n.components())
    }

    fn set_component(&mut self, index: usize, masked: &str) -> Result<(), NameError> {
        dispatch!(self, n => n.set_component(index, masked))
    }

    fn insert(&mut self, index: usize, masked: &str) -> Result<(), NameError> {
        dispatch!(self, n => n.insert(index, masked))
    }

    fn remove(&mut self, index: usize) -> Result<(), NameError> {
        dispatch!(self, n => n.remove(index))
    }
}

impl PartialEq for AnyName {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for AnyName {}

impl Hash for AnyName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        name::hash_name(self, state);
    }
}

impl Display for AnyName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        dispatch!(self, n => Display::fmt(n, f))
    }
}

impl From<ArrayName> for AnyName {
    fn from(name: ArrayName) -> Self {
        Self::Array(name)
    }
}

impl From<EncodedName> for AnyName {
    fn from(name: EncodedName) -> Self {
        Self::Encoded(name)
    }
}

impl serde::Serialize for AnyName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        NameParts {
            delimiter: self.delimiter(),
            components: self.components().map(str::to_string).collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for AnyName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let parts = NameParts::deserialize(deserializer)?;
        ArrayName::try_from(parts)
            .map(Self::Array)
            .map_err(serde::de::Error::custom)
    }
}
