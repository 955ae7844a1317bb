//! Testing utilities for the hname workspace
//!
//! Shared fixtures, proptest strategies, and tracing setup.

#![allow(missing_docs)]

use hname_core::{AnyName, ArrayName, Delimiter, EncodedName, Representation, ESCAPE_CHARACTER};
use proptest::prelude::*;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a `RUST_LOG`-driven subscriber once per test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn delimiter(c: char) -> Delimiter {
    Delimiter::new(c).unwrap()
}

/// `oss.cs.fau.de`
pub fn oss_name(representation: Representation) -> AnyName {
    AnyName::from_components(["oss", "cs", "fau", "de"], Delimiter::DEFAULT, representation)
        .unwrap()
}

/// Four empty components under `/`
pub fn empty_components_name(representation: Representation) -> AnyName {
    AnyName::from_components(["", "", "", ""], delimiter('/'), representation).unwrap()
}

/// One component holding the raw value `Oh...`
pub fn oh_dots_name(representation: Representation) -> AnyName {
    AnyName::parse("Oh\\.\\.\\.", Delimiter::DEFAULT, representation).unwrap()
}

/// Both representations of the same masked components
pub fn both(components: &[&str], delim: Delimiter) -> (ArrayName, EncodedName) {
    let array = ArrayName::with_delimiter(components.iter().copied(), delim).unwrap();
    let encoded = EncodedName::from_components(components, delim).unwrap();
    (array, encoded)
}

pub const REPRESENTATIONS: [Representation; 2] = [Representation::Array, Representation::Encoded];

/// Any delimiter other than the escape character, biased toward common ones
pub fn arb_delimiter() -> impl Strategy<Value = Delimiter> {
    prop_oneof![
        3 => prop_oneof![Just('.'), Just('/'), Just('#'), Just(':')],
        1 => any::<char>().prop_filter("not the escape character", |c| *c != ESCAPE_CHARACTER),
    ]
    .prop_map(|c| Delimiter::new(c).unwrap())
}

/// Raw component text, rich in delimiters and escapes
pub fn arb_raw_component() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => proptest::char::range('a', 'z'),
            1 => Just('.'),
            1 => Just('/'),
            1 => Just('#'),
            1 => Just(ESCAPE_CHARACTER),
            1 => any::<char>(),
        ],
        0..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

pub fn arb_raw_components() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_raw_component(), 0..6)
}

pub fn arb_representation() -> impl Strategy<Value = Representation> {
    prop_oneof![Just(Representation::Array), Just(Representation::Encoded)]
}

/// A name built from raw components
pub fn arb_name() -> impl Strategy<Value = AnyName> {
    (arb_raw_components(), arb_delimiter(), arb_representation()).prop_map(
        |(raw, delim, repr)| AnyName::from(ArrayName::from_raw(raw, delim)).into_representation(repr),
    )
}
