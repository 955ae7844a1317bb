//! Edit cost: array-backed vs encoded-string names
//!
//! Encoded names re-parse and re-encode on every edit, so their cost grows
//! with the encoded length. This measures both representations on the same
//! workload of appends, component reads and removals.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hname_core::{AnyName, Delimiter, Name, Representation};
use std::hint::black_box;

fn build(components: usize, representation: Representation) -> AnyName {
    let mut name = AnyName::empty(Delimiter::DEFAULT, representation);
    for i in 0..components {
        name.append(&format!("segment\\.{i}")).unwrap();
    }
    name
}

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_edits");
    for size in [4usize, 16, 64] {
        for repr in [Representation::Array, Representation::Encoded] {
            group.bench_with_input(
                BenchmarkId::new(format!("{repr:?}"), size),
                &size,
                |b, &size| {
                    b.iter(|| {
                        let mut name = build(size, repr);
                        for i in 0..name.len() {
                            black_box(name.component(i).unwrap());
                        }
                        while !name.is_empty() {
                            name.remove(0).unwrap();
                        }
                        name
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_data_string(c: &mut Criterion) {
    let name = build(32, Representation::Array);
    c.bench_function("as_data_string_32", |b| {
        b.iter(|| black_box(&name).as_data_string().unwrap());
    });
}

criterion_group!(benches, bench_edits, bench_data_string);
criterion_main!(benches);
