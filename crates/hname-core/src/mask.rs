//! Masking and parsing of name components
//!
//! A *masked* component has every delimiter and every escape character
//! preceded by [`ESCAPE_CHARACTER`]. These functions are shared by all name
//! representations.
//!
//! A lone escape character at the end of masked text is always rejected with
//! [`NameError::DanglingEscape`]; no function here treats it as a literal.

use crate::delimiter::{Delimiter, ESCAPE_CHARACTER};
use crate::error::NameError;

/// Escape every delimiter and escape character in `raw`
#[must_use]
pub fn mask(raw: &str, delimiter: Delimiter) -> String {
    let d = delimiter.as_char();
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == ESCAPE_CHARACTER || c == d {
            out.push(ESCAPE_CHARACTER);
        }
        out.push(c);
    }
    out
}

/// Remove masking from a component
///
/// Whatever follows an escape character is emitted literally, even when it
/// is neither the delimiter nor the escape character.
///
/// # Errors
/// Returns [`NameError::DanglingEscape`] if `masked` ends with a lone escape
pub fn unmask(masked: &str) -> Result<String, NameError> {
    let mut out = String::with_capacity(masked.len());
    let mut chars = masked.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            match chars.next() {
                Some(next) => out.push(next),
                None => return Err(dangling(masked)),
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Re-mask a component from one delimiter to another
///
/// # Errors
/// Returns error if `masked` ends with a dangling escape
pub fn remask(masked: &str, from: Delimiter, to: Delimiter) -> Result<String, NameError> {
    if from == to {
        validate_component(masked, from)?;
        return Ok(masked.to_string());
    }
    Ok(mask(&unmask(masked)?, to))
}

/// Check that `masked` is a well-formed component for `delimiter`
///
/// # Errors
/// - [`NameError::DanglingEscape`] if it ends with a lone escape
/// - [`NameError::UnescapedDelimiter`] if the delimiter appears unescaped
pub fn validate_component(masked: &str, delimiter: Delimiter) -> Result<(), NameError> {
    let d = delimiter.as_char();
    let mut chars = masked.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            if chars.next().is_none() {
                return Err(dangling(masked));
            }
        } else if c == d {
            tracing::debug!(component = masked, delimiter = %delimiter, "unescaped delimiter");
            return Err(NameError::UnescapedDelimiter {
                component: masked.to_string(),
                delimiter: d,
            });
        }
    }
    Ok(())
}

/// Iterator over the masked components of an encoded string
///
/// Yields borrowed slices; escape pairs are skipped over without being
/// interpreted. Does not validate: a dangling escape stays in the last slice.
/// Use [`split_masked`] for untrusted input.
#[derive(Debug, Clone)]
pub struct MaskedSplit<'a> {
    rest: Option<&'a str>,
    delimiter: char,
}

impl<'a> Iterator for MaskedSplit<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let mut chars = rest.char_indices();
        while let Some((i, c)) = chars.next() {
            if c == ESCAPE_CHARACTER {
                chars.next();
            } else if c == self.delimiter {
                self.rest = Some(&rest[i + c.len_utf8()..]);
                return Some(&rest[..i]);
            }
        }
        self.rest = None;
        Some(rest)
    }
}

/// Split an encoded string into borrowed masked components
///
/// Empty input yields exactly one empty component.
#[inline]
#[must_use]
pub fn split_components(encoded: &str, delimiter: Delimiter) -> MaskedSplit<'_> {
    MaskedSplit {
        rest: Some(encoded),
        delimiter: delimiter.as_char(),
    }
}

/// Split an encoded string into masked components
///
/// An unescaped delimiter closes the current component. Escape pairs are
/// copied verbatim, so every returned component stays masked. Empty input
/// yields exactly one empty component.
///
/// # Errors
/// Returns [`NameError::DanglingEscape`] if `encoded` ends with a lone escape
pub fn split_masked(encoded: &str, delimiter: Delimiter) -> Result<Vec<String>, NameError> {
    let count = count_components(encoded, delimiter)?;
    let mut components = Vec::with_capacity(count);
    components.extend(split_components(encoded, delimiter).map(str::to_string));
    Ok(components)
}

/// Count the components [`split_masked`] would produce, without allocating
///
/// # Errors
/// Returns [`NameError::DanglingEscape`] if `encoded` ends with a lone escape
pub fn count_components(encoded: &str, delimiter: Delimiter) -> Result<usize, NameError> {
    let d = delimiter.as_char();
    let mut count = 1;
    let mut chars = encoded.chars();

    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            if chars.next().is_none() {
                return Err(dangling(encoded));
            }
        } else if c == d {
            count += 1;
        }
    }

    Ok(count)
}

/// Join masked components with a delimiter
#[must_use]
pub fn join_masked<S: AsRef<str>>(components: &[S], delimiter: Delimiter) -> String {
    let mut out = String::new();
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            out.push(delimiter.as_char());
        }
        out.push_str(c.as_ref());
    }
    out
}

fn dangling(text: &str) -> NameError {
    tracing::debug!(text, "dangling escape character");
    NameError::DanglingEscape {
        component: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(c: char) -> Delimiter {
        Delimiter::new(c).unwrap()
    }

    #[test]
    fn mask_escapes_delimiter_and_escape() {
        assert_eq!(mask("Oh...", d('.')), "Oh\\.\\.\\.");
        assert_eq!(mask("a\\b", d('.')), "a\\\\b");
        assert_eq!(mask("a.b/c", d('/')), "a.b\\/c");
        assert_eq!(mask("", d('.')), "");
    }

    #[test]
    fn mask_component_equal_to_delimiter() {
        assert_eq!(mask(".", d('.')), "\\.");
        assert_eq!(unmask("\\.").unwrap(), ".");
    }

    #[test]
    fn unmask_emits_next_char_literally() {
        assert_eq!(unmask("Oh\\.\\.\\.").unwrap(), "Oh...");
        assert_eq!(unmask("\\x").unwrap(), "x");
        assert_eq!(unmask("\\\\").unwrap(), "\\");
    }

    #[test]
    fn unmask_rejects_dangling_escape() {
        let result = unmask("abc\\");
        assert!(matches!(result, Err(NameError::DanglingEscape { .. })));
        // an escaped escape at the end is fine
        assert_eq!(unmask("abc\\\\").unwrap(), "abc\\");
    }

    #[test]
    fn mask_unmask_roundtrip() {
        for raw in ["", "plain", "a.b", "a\\b", "\\", ".", "\\.\\", "x/y.z"] {
            for delim in ['.', '/', '#'] {
                assert_eq!(unmask(&mask(raw, d(delim))).unwrap(), raw);
            }
        }
    }

    #[test]
    fn remask_between_delimiters() {
        // "a/b" under '/' is "a\/b"; under '.' the slash needs no escape
        assert_eq!(remask("a\\/b", d('/'), d('.')).unwrap(), "a/b");
        assert_eq!(remask("a.b", d('/'), d('.')).unwrap(), "a\\.b");
        assert_eq!(remask("a\\.b", d('.'), d('.')).unwrap(), "a\\.b");
    }

    #[test]
    fn validate_component_rules() {
        assert!(validate_component("a\\.b", d('.')).is_ok());
        assert!(validate_component("", d('.')).is_ok());
        assert!(matches!(
            validate_component("a.b", d('.')),
            Err(NameError::UnescapedDelimiter { delimiter: '.', .. })
        ));
        assert!(matches!(
            validate_component("ab\\", d('.')),
            Err(NameError::DanglingEscape { .. })
        ));
        assert!(validate_component("a.b", d('/')).is_ok());
    }

    #[test]
    fn split_basic() {
        assert_eq!(
            split_masked("oss.cs.fau.de", d('.')).unwrap(),
            vec!["oss", "cs", "fau", "de"]
        );
    }

    #[test]
    fn split_keeps_masking() {
        assert_eq!(split_masked("Oh\\.\\.\\.", d('.')).unwrap(), vec!["Oh\\.\\.\\."]);
        assert_eq!(
            split_masked("a\\\\.b", d('.')).unwrap(),
            vec!["a\\\\", "b"]
        );
    }

    #[test]
    fn split_empty_components() {
        assert_eq!(split_masked("///", d('/')).unwrap(), vec!["", "", "", ""]);
        assert_eq!(split_masked("", d('.')).unwrap(), vec![""]);
    }

    #[test]
    fn split_components_borrows() {
        let encoded = String::from("a\\/b/c/");
        let parts: Vec<&str> = split_components(&encoded, d('/')).collect();
        assert_eq!(parts, vec!["a\\/b", "c", ""]);
        assert_eq!(split_components("", d('/')).count(), 1);
        assert_eq!(split_components("x→y", d('→')).collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn split_rejects_dangling_escape() {
        assert!(matches!(
            split_masked("a.b\\", d('.')),
            Err(NameError::DanglingEscape { .. })
        ));
    }

    #[test]
    fn count_agrees_with_split() {
        for s in ["", "a", "a.b", "///", "a\\.b", "\\\\.x", "..", "Oh\\.\\.\\."] {
            for delim in ['.', '/'] {
                assert_eq!(
                    count_components(s, d(delim)).unwrap(),
                    split_masked(s, d(delim)).unwrap().len(),
                    "input {s:?} delimiter {delim:?}"
                );
            }
        }
        assert!(count_components("x\\", d('.')).is_err());
    }

    #[test]
    fn join_then_split_roundtrip() {
        let raw = ["a.b", "", "c\\d", "/"];
        for delim in ['.', '/'] {
            let masked: Vec<String> = raw.iter().map(|r| mask(r, d(delim))).collect();
            let joined = join_masked(&masked, d(delim));
            assert_eq!(split_masked(&joined, d(delim)).unwrap(), masked);
        }
    }

    #[test]
    fn join_masked_empty_slice() {
        let empty: [&str; 0] = [];
        assert_eq!(join_masked(&empty, d('.')), "");
        assert_eq!(join_masked(&["", "", "", ""], d('/')), "///");
    }
}
