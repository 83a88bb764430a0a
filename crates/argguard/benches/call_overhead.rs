// Call overhead benchmarks.
//
// Compares a wrapped call against the skipped original, for a trivial body,
// so the numbers isolate binding and validator dispatch.

use std::hint::black_box;

use argguard::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};

fn body(args: &Arguments) -> usize {
    args.len()
}

fn mixed_signature() -> Signature {
    Signature::builder()
        .positional("a", no_whitespaces().of(non_blank().of(TypeTag::String)))
        .positional("b", Annotation::None)
        .keyword_only("c", non_empty().of(TypeTag::Object))
        .keyword_only_with_default("d", non_negative().of(TypeTag::Integer), 0)
        .build()
        .expect("benchmark signature is valid")
}

fn wrapped_vs_skipped(c: &mut Criterion) {
    let f = validate_parameters(mixed_signature(), body);
    let args = arguments!["value", 1; c = json!({"k": 1})];

    let mut group = c.benchmark_group("call");
    group.bench_function("wrapped", |b| {
        b.iter(|| black_box(f.call(black_box(&args))));
    });
    group.bench_function("skipped", |b| {
        b.iter(|| black_box(f.skip_validations()(black_box(&args))));
    });
    group.bench_function("rejected", |b| {
        let bad = arguments!["two words", 1; c = json!({"k": 1})];
        b.iter(|| black_box(f.call(black_box(&bad))));
    });
    group.finish();
}

fn chain_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_depth");

    for depth in [1usize, 2, 4, 8] {
        let leaf = non_null().of(TypeTag::String);
        let chain = (1..depth).fold(leaf, |inner, _| no_whitespaces().of(inner));
        let signature = Signature::builder()
            .positional("s", chain)
            .build()
            .expect("benchmark signature is valid");
        let f = validate_parameters(signature, body);
        let args = arguments![Value::from("value")];

        group.bench_with_input(BenchmarkId::from_parameter(depth), &args, |b, args| {
            b.iter(|| black_box(f.call(black_box(args))));
        });
    }

    group.finish();
}

criterion_group!(benches, wrapped_vs_skipped, chain_depth);
criterion_main!(benches);
