//! Hierarchical names
//!
//! A name is a sequence of string components joined by a single delimiter
//! character. The delimiter and the escape character `\` may appear inside a
//! component only when escaped ("masked").
//!
//! # Core Concepts
//!
//! - [`Name`]: Sealed contract shared by every representation
//! - [`ArrayName`]: One `String` per masked component
//! - [`EncodedName`]: All components in one encoded `String`
//! - [`AnyName`]: Either representation, chosen at construction
//! - [`Delimiter`]: A single non-escape character
//! - [`mask`]: Masking, unmasking and parsing helpers
//!
//! # Textual forms
//!
//! - [`Name::as_string_with`]: human-readable, unmasked, any delimiter; lossy
//! - [`Name::as_data_string`]: canonical, masked for `.` and joined with `.`;
//!   parse it back with [`AnyName::from_data_string`]
//!
//! # Example
//!
//! ```rust
//! use hname_core::{ArrayName, Delimiter, Name};
//!
//! let name = ArrayName::from_raw(["oss", "cs", "fau", "de"], Delimiter::DEFAULT);
//! assert_eq!(name.as_string().unwrap(), "oss.cs.fau.de");
//!
//! let longer = name.appended("www").unwrap();
//! assert_eq!(longer.len(), 5);
//! assert_eq!(name.len(), 4);
//! ```

#![warn(unreachable_pub)]

mod any;
mod array;
mod config;
mod delimiter;
mod digest;
mod encoded;
mod error;
pub mod mask;
mod name;

// Re-exports
pub use any::{AnyName, Representation};
pub use array::ArrayName;
pub use config::NameConfig;
pub use delimiter::{Delimiter, CANONICAL_DELIMITER, DEFAULT_DELIMITER, ESCAPE_CHARACTER};
pub use digest::{DigestError, NameDigest};
pub use encoded::EncodedName;
pub use error::{ErrorKind, NameError};
pub use name::{Components, Name};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with names
    pub use crate::{AnyName, ArrayName, Delimiter, EncodedName, Name, NameError, Representation};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
