// benches/resolve.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bin_lookup::{Table, normalize, resolve};

fn sample_table(n: usize) -> Table {
    Table::from_pairs((0..n).map(|i| (format!("SKU{i:06}"), format!("Bin {}", i % 97))))
}

fn bench_resolve(c: &mut Criterion) {
    let table = sample_table(10_000);

    c.bench_function("normalize_scanned", |b| {
        b.iter(|| normalize(black_box("]Q1sku004321\r\n")))
    });

    c.bench_function("resolve_first", |b| {
        b.iter(|| resolve(black_box(&table), black_box("sku000000")))
    });

    c.bench_function("resolve_last", |b| {
        b.iter(|| resolve(black_box(&table), black_box("sku009999")))
    });

    c.bench_function("resolve_miss", |b| {
        b.iter(|| resolve(black_box(&table), black_box("nope")))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
