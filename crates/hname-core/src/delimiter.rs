//! Delimiter and escape characters
//!
//! Provides [`Delimiter`], a single character that separates name components.
//! The escape character is fixed and can never be used as a delimiter.

use crate::error::NameError;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Character that masks the delimiter or itself inside a component
pub const ESCAPE_CHARACTER: char = '\\';

/// Delimiter used when none is given
pub const DEFAULT_DELIMITER: char = '.';

/// Delimiter of the canonical data string
pub const CANONICAL_DELIMITER: char = '.';

/// Component separator
///
/// Always exactly one character and never [`ESCAPE_CHARACTER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delimiter(char);

impl Delimiter {
    /// The default (and canonical) delimiter `.`
    pub const DEFAULT: Self = Self(DEFAULT_DELIMITER);

    /// The delimiter of canonical data strings
    pub const CANONICAL: Self = Self(CANONICAL_DELIMITER);

    /// Create a delimiter from a character
    ///
    /// # Errors
    /// Returns error if `c` is the escape character
    #[inline]
    pub fn new(c: char) -> Result<Self, NameError> {
        if c == ESCAPE_CHARACTER {
            return Err(NameError::InvalidDelimiter {
                value: c.to_string(),
                reason: "the escape character cannot be a delimiter",
            });
        }
        Ok(Self(c))
    }

    /// Get the underlying character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Check if this is the canonical delimiter
    #[inline]
    #[must_use]
    pub const fn is_canonical(self) -> bool {
        self.0 == CANONICAL_DELIMITER
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Delimiter {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => {
                tracing::debug!(value = s, "rejecting delimiter that is not one character");
                Err(NameError::InvalidDelimiter {
                    value: s.to_string(),
                    reason: "delimiter must be exactly one character",
                })
            }
        }
    }
}

impl TryFrom<char> for Delimiter {
    type Error = NameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = NameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Delimiter> for char {
    fn from(d: Delimiter) -> char {
        d.0
    }
}

impl serde::Serialize for Delimiter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Delimiter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_default_is_dot() {
        assert_eq!(Delimiter::default().as_char(), '.');
        assert!(Delimiter::default().is_canonical());
    }

    #[test]
    fn delimiter_rejects_escape_character() {
        let result = Delimiter::new('\\');
        assert!(matches!(result, Err(NameError::InvalidDelimiter { .. })));
    }

    #[test]
    fn delimiter_from_str_single_char() {
        let d: Delimiter = "/".parse().unwrap();
        assert_eq!(d.as_char(), '/');
        assert!(!d.is_canonical());
    }

    #[test]
    fn delimiter_from_str_wrong_length() {
        assert!(matches!(
            "".parse::<Delimiter>(),
            Err(NameError::InvalidDelimiter { .. })
        ));
        assert!(matches!(
            "::".parse::<Delimiter>(),
            Err(NameError::InvalidDelimiter { .. })
        ));
    }

    #[test]
    fn delimiter_multibyte_char_is_one_character() {
        let d = Delimiter::try_from("→").unwrap();
        assert_eq!(d.as_char(), '→');
    }

    #[test]
    fn delimiter_serde_json() {
        let d = Delimiter::new('#').unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"#\"");
        let back: Delimiter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);

        assert!(serde_json::from_str::<Delimiter>("\"ab\"").is_err());
        assert!(serde_json::from_str::<Delimiter>("\"\\\\\"").is_err());
    }
}
