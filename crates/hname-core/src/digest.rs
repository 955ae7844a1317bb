//! Content digests for names
//!
//! Provides [`NameDigest`], a 32-byte Blake3 digest that identifies a name by
//! its delimiter, component count and canonical data string.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 32-byte name digest (Blake3)
///
/// Equal names always have equal digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameDigest([u8; 32]);

impl NameDigest {
    /// Create a digest from raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Digest a delimiter, a component count and a canonical data string
    ///
    /// The count separates the empty name from a single empty component,
    /// which share the data string `""`.
    #[must_use]
    pub fn compute(delimiter: char, len: usize, data_string: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        let mut buf = [0u8; 4];
        hasher.update(delimiter.encode_utf8(&mut buf).as_bytes());
        // separator byte that never occurs in UTF-8 text
        hasher.update(&[0xff]);
        hasher.update(&(len as u64).to_le_bytes());
        hasher.update(data_string.as_bytes());
        Self::new(*hasher.finalize().as_bytes())
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for NameDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for NameDigest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| DigestError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

impl serde::Serialize for NameDigest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for NameDigest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors when parsing a [`NameDigest`] from hex
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// Decoded digest has the wrong length
    #[error("invalid digest length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Hex encoding error
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_deterministic() {
        let a = NameDigest::compute('.', 4, "oss.cs.fau.de");
        let b = NameDigest::compute('.', 4, "oss.cs.fau.de");
        assert_eq!(a, b);
    }

    #[test]
    fn digest_includes_delimiter() {
        let a = NameDigest::compute('.', 2, "a.b");
        let b = NameDigest::compute('/', 2, "a.b");
        assert_ne!(a, b);
    }

    #[test]
    fn digest_includes_component_count() {
        let none = NameDigest::compute('.', 0, "");
        let one = NameDigest::compute('.', 1, "");
        assert_ne!(none, one);
    }

    #[test]
    fn digest_display_and_parse() {
        let digest = NameDigest::compute('.', 1, "x");
        let s = digest.to_string();
        assert_eq!(s.len(), 64);
        assert!(s.starts_with(&digest.short()));
        let parsed: NameDigest = s.parse().unwrap();
        assert_eq!(parsed, digest);
    }

    #[test]
    fn digest_parse_wrong_length() {
        let result = "abcd".parse::<NameDigest>();
        assert!(matches!(
            result,
            Err(DigestError::InvalidLength {
                expected: 32,
                actual: 2
            })
        ));
    }

    #[test]
    fn digest_serde_json() {
        let digest = NameDigest::compute('.', 1, "a");
        let json = serde_json::to_string(&digest).unwrap();
        let back: NameDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
