//! The name contract
//!
//! Defines the sealed [`Name`] trait. Implementors provide the primitives
//! (delimiter, length, component access and iteration, set, insert, remove);
//! everything else, including stringification, equality, hashing and
//! concatenation, is implemented once here on top of those primitives.

use crate::delimiter::Delimiter;
use crate::digest::NameDigest;
use crate::error::NameError;
use crate::mask;
use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hasher;

/// A hierarchical name: masked components joined by a delimiter
///
/// This trait is **sealed**: the set of storage variants is closed. See
/// [`ArrayName`](crate::ArrayName), [`EncodedName`](crate::EncodedName) and
/// [`AnyName`](crate::AnyName).
///
/// Components passed in and returned are always *masked* for the name's own
/// delimiter. Edits validate eagerly: a component with a dangling escape or
/// an unescaped delimiter is rejected before anything changes.
///
/// Two families of edits are offered. The in-place methods (`set_component`,
/// `insert`, `append`, `remove`, `concat`) take `&mut self` and leave the
/// receiver untouched on error. The functional methods (`with_component`,
/// `inserted`, `appended`, `removed`, `concatenated`) return a new name.
pub trait Name: Clone + Debug + private::Sealed {
    /// Delimiter of this name
    fn delimiter(&self) -> Delimiter;

    /// Number of components
    fn len(&self) -> usize;

    /// Masked component at `index`
    ///
    /// # Errors
    /// Returns [`NameError::IndexOutOfRange`] unless `index < len()`
    fn component(&self, index: usize) -> Result<Cow<'_, str>, NameError>;

    /// Replace the component at `index`
    ///
    /// # Errors
    /// - [`NameError::IndexOutOfRange`] unless `index < len()`
    /// - `InvalidArgument` if `masked` is not a well-formed component
    fn set_component(&mut self, index: usize, masked: &str) -> Result<(), NameError>;

    /// Insert a component before `index` (`index == len()` appends)
    ///
    /// # Errors
    /// - [`NameError::IndexOutOfRange`] unless `index <= len()`
    /// - `InvalidArgument` if `masked` is not a well-formed component
    fn insert(&mut self, index: usize, masked: &str) -> Result<(), NameError>;

    /// Remove the component at `index`
    ///
    /// # Errors
    /// Returns [`NameError::IndexOutOfRange`] unless `index < len()`
    fn remove(&mut self, index: usize) -> Result<(), NameError>;

    /// Append a component
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `masked` is not a well-formed component
    fn append(&mut self, masked: &str) -> Result<(), NameError> {
        self.insert(self.len(), masked)
    }

    /// True iff there are no components
    ///
    /// A single empty component is not empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over masked components in order
    fn components(&self) -> Components<'_>;

    /// Human-readable form using this name's own delimiter
    ///
    /// # Errors
    /// Returns `InvalidState` if a stored component is malformed
    fn as_string(&self) -> Result<String, NameError> {
        self.as_string_with(self.delimiter())
    }

    /// Human-readable form: components unmasked and joined with `delimiter`
    ///
    /// Not guaranteed to be parseable; components may contain `delimiter`.
    ///
    /// # Errors
    /// Returns `InvalidState` if a stored component is malformed
    fn as_string_with(&self, delimiter: Delimiter) -> Result<String, NameError> {
        let mut out = String::new();
        for (i, component) in self.components().enumerate() {
            if i > 0 {
                out.push(delimiter.as_char());
            }
            out.push_str(&mask::unmask(component).map_err(NameError::corrupted)?);
        }
        Ok(out)
    }

    /// Like [`as_string_with`](Self::as_string_with), taking the delimiter as text
    ///
    /// # Errors
    /// Returns `InvalidArgument` unless `delimiter` is exactly one character
    fn as_string_using(&self, delimiter: &str) -> Result<String, NameError> {
        self.as_string_with(delimiter.parse()?)
    }

    /// Canonical data string
    ///
    /// Every component is re-masked for [`Delimiter::CANONICAL`] and the
    /// results are joined with it, so parsing the output with the canonical
    /// delimiter reconstructs the same component sequence.
    ///
    /// # Errors
    /// Returns `InvalidState` if a stored component is malformed
    fn as_data_string(&self) -> Result<String, NameError> {
        let own = self.delimiter();
        let mut parts = Vec::with_capacity(self.len());
        for component in self.components() {
            parts.push(
                mask::remask(component, own, Delimiter::CANONICAL)
                    .map_err(NameError::corrupted)?,
            );
        }
        Ok(mask::join_masked(&parts, Delimiter::CANONICAL))
    }

    /// Structural equality
    ///
    /// Same delimiter, same number of components, and pairwise-equal masked
    /// components. Works across storage variants.
    fn is_equal<N: Name>(&self, other: &N) -> bool {
        self.delimiter() == other.delimiter()
            && self.len() == other.len()
            && self.components().eq(other.components())
    }

    /// 32-bit hash consistent with [`is_equal`](Self::is_equal)
    ///
    /// Mixes the delimiter and the UTF-16 code units of every masked
    /// component, separated by the delimiter.
    fn hash_code(&self) -> i32 {
        let d = self.delimiter().as_char();
        let mut buf = [0u16; 2];
        let mut hash = mix_units(0, d.encode_utf16(&mut buf).iter().copied());
        for (i, component) in self.components().enumerate() {
            if i > 0 {
                hash = mix_units(hash, d.encode_utf16(&mut buf).iter().copied());
            }
            hash = mix_units(hash, component.encode_utf16());
        }
        hash
    }

    /// Blake3 digest of the delimiter, component count and canonical data string
    ///
    /// # Errors
    /// Returns `InvalidState` if a stored component is malformed
    fn digest(&self) -> Result<NameDigest, NameError> {
        Ok(NameDigest::compute(
            self.delimiter().as_char(),
            self.len(),
            &self.as_data_string()?,
        ))
    }

    /// Append every component of `other`, in order
    ///
    /// Components are re-masked from `other`'s delimiter to this one.
    /// `other` is not modified. On error `self` is unchanged.
    ///
    /// # Errors
    /// Returns `InvalidState` if a component of `other` is malformed
    fn concat<N: Name>(&mut self, other: &N) -> Result<(), NameError> {
        let mut next = self.clone();
        let (from, to) = (other.delimiter(), self.delimiter());
        for component in other.components() {
            let masked = mask::remask(component, from, to).map_err(NameError::corrupted)?;
            next.append(&masked)?;
        }
        *self = next;
        Ok(())
    }

    /// [`concat`](Self::concat) with an optional argument
    ///
    /// # Errors
    /// Returns [`NameError::MissingArgument`] if `other` is `None`
    fn concat_opt<N: Name>(&mut self, other: Option<&N>) -> Result<(), NameError> {
        let other = other.ok_or(NameError::MissingArgument("other"))?;
        self.concat(other)
    }

    /// Copy of this name with the component at `index` replaced
    ///
    /// # Errors
    /// Same as [`set_component`](Self::set_component)
    fn with_component(&self, index: usize, masked: &str) -> Result<Self, NameError> {
        let mut next = self.clone();
        next.set_component(index, masked)?;
        Ok(next)
    }

    /// Copy of this name with a component inserted before `index`
    ///
    /// # Errors
    /// Same as [`insert`](Self::insert)
    fn inserted(&self, index: usize, masked: &str) -> Result<Self, NameError> {
        let mut next = self.clone();
        next.insert(index, masked)?;
        Ok(next)
    }

    /// Copy of this name with a component appended
    ///
    /// # Errors
    /// Same as [`append`](Self::append)
    fn appended(&self, masked: &str) -> Result<Self, NameError> {
        let mut next = self.clone();
        next.append(masked)?;
        Ok(next)
    }

    /// Copy of this name with the component at `index` removed
    ///
    /// # Errors
    /// Same as [`remove`](Self::remove)
    fn removed(&self, index: usize) -> Result<Self, NameError> {
        let mut next = self.clone();
        next.remove(index)?;
        Ok(next)
    }

    /// Copy of this name followed by every component of `other`
    ///
    /// # Errors
    /// Same as [`concat`](Self::concat)
    fn concatenated<N: Name>(&self, other: &N) -> Result<Self, NameError> {
        let mut next = self.clone();
        next.concat(other)?;
        Ok(next)
    }
}

/// Iterator over the masked components of a [`Name`]
///
/// Borrows straight from the variant's storage, so a full pass is linear in
/// the size of the name for every variant.
#[derive(Debug, Clone)]
pub struct Components<'a> {
    inner: ComponentsInner<'a>,
}

#[derive(Debug, Clone)]
enum ComponentsInner<'a> {
    Slice(std::slice::Iter<'a, String>),
    Encoded {
        split: mask::MaskedSplit<'a>,
        remaining: usize,
    },
}

impl<'a> Components<'a> {
    pub(crate) fn from_slice(components: &'a [String]) -> Self {
        Self {
            inner: ComponentsInner::Slice(components.iter()),
        }
    }

    /// `len` bounds the scan: the zero-component name is stored as `""`,
    /// which would otherwise split into one empty component.
    pub(crate) fn from_encoded(encoded: &'a str, delimiter: Delimiter, len: usize) -> Self {
        Self {
            inner: ComponentsInner::Encoded {
                split: mask::split_components(encoded, delimiter),
                remaining: len,
            },
        }
    }
}

impl<'a> Iterator for Components<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ComponentsInner::Slice(iter) => iter.next().map(String::as_str),
            ComponentsInner::Encoded { split, remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                split.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ComponentsInner::Slice(iter) => iter.size_hint(),
            ComponentsInner::Encoded { remaining, .. } => (*remaining, Some(*remaining)),
        }
    }
}

impl ExactSizeIterator for Components<'_> {}

/// `h = 31 * h + unit`, wrapping
fn mix_units(hash: i32, units: impl IntoIterator<Item = u16>) -> i32 {
    units.into_iter().fold(hash, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    })
}

/// Feed a name into a [`Hasher`] consistently with [`Name::is_equal`]
pub(crate) fn hash_name<N: Name, H: Hasher>(name: &N, state: &mut H) {
    use std::hash::Hash;
    name.delimiter().hash(state);
    state.write_usize(name.len());
    for component in name.components() {
        component.hash(state);
    }
}

/// Sealed trait - prevents implementations outside this crate
#[doc(hidden)]
pub mod private {
    /// Sealed trait marker
    pub trait Sealed {}
}
