use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use exprtree_benchmarks::{flat_expression, nested_expression};
use exprtree_lexer::Lexer;
use exprtree_parser::{reduce, scan, to_postfix, to_postfix_lexemes, validate};
use std::time::Duration;

fn bench_term_strategy(c: &mut Criterion) {
    let source = nested_expression(200);

    let mut group = c.benchmark_group("terms");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(1));

    group.bench_function("scan", |b| b.iter(|| scan(black_box(&source))));
    group.bench_function("scan_validate", |b| {
        b.iter(|| {
            let root = scan(black_box(&source)).ok()?;
            validate(&root).ok()
        })
    });
    group.finish();
}

fn bench_postfix_strategy(c: &mut Criterion) {
    let source = flat_expression(2_000);

    let mut group = c.benchmark_group("postfix");
    group.sample_size(20);

    group.bench_function("char_wise", |b| b.iter(|| to_postfix(black_box(&source))));
    group.bench_function("lexemes", |b| {
        b.iter(|| to_postfix_lexemes(black_box(&source)))
    });
    group.bench_function("lexer_only", |b| {
        b.iter(|| Lexer::new(black_box(&source)).count())
    });
    group.bench_function("reduce", |b| {
        b.iter_batched(
            || to_postfix(&source),
            |tokens| reduce(tokens),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_term_strategy, bench_postfix_strategy);
criterion_main!(benches);
