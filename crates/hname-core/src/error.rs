//! Error types for name operations
//!
//! Every fallible operation in this crate returns [`NameError`]. Each variant
//! belongs to one of three [`ErrorKind`]s: malformed input, an index outside
//! the legal bound, or a violated internal invariant.

use std::fmt::{self, Display, Formatter};

/// Coarse classification of a [`NameError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input to a public operation
    InvalidArgument,
    /// Index outside the legal bound for the operation
    IndexOutOfRange,
    /// Internal invariant violated
    InvalidState,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidArgument => "invalid argument",
            Self::IndexOutOfRange => "index out of range",
            Self::InvalidState => "invalid state",
        };
        f.write_str(s)
    }
}

/// Errors raised by masking, parsing and editing names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Delimiter is not exactly one character, or is the escape character
    #[error("invalid delimiter {value:?}: {reason}")]
    InvalidDelimiter { value: String, reason: &'static str },

    /// Masked text ends with a lone escape character
    #[error("dangling escape character at end of {component:?}")]
    DanglingEscape { component: String },

    /// Masked component contains the delimiter without an escape
    #[error("component {component:?} contains unescaped delimiter '{delimiter}'")]
    UnescapedDelimiter { component: String, delimiter: char },

    /// Required argument was absent
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// Index outside `[0, len)` (or `[0, len]` for insertion)
    #[error("index {index} out of range for {len} component(s)")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        allow_end: bool,
    },

    /// Internal invariant violated
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl NameError {
    /// Classify this error
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDelimiter { .. }
            | Self::DanglingEscape { .. }
            | Self::UnescapedDelimiter { .. }
            | Self::MissingArgument(_) => ErrorKind::InvalidArgument,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::InvalidState(_) => ErrorKind::InvalidState,
        }
    }

    /// Whether the caller can fix the input and try again
    ///
    /// `InvalidState` points at a library bug and is never recoverable.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::InvalidState
    }

    /// A stored component failed to parse: the name's invariants are broken
    pub(crate) fn corrupted(err: Self) -> Self {
        Self::InvalidState(format!("stored component is malformed: {err}"))
    }

    /// Check `index < len`
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange {
                index,
                len,
                allow_end: false,
            })
        }
    }

    /// Check `index <= len`
    pub(crate) fn check_insert_index(index: usize, len: usize) -> Result<(), Self> {
        if index <= len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange {
                index,
                len,
                allow_end: true,
            })
        }
    }
}
