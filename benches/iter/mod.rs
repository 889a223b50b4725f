use std::hint::black_box;

use avlmap::AvlMap;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::shuffled_keys;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");
    let keys = shuffled_keys();

    for n_values in [1, 100, 1_000, 10_000] {
        let t = keys[..n_values]
            .iter()
            .map(|&k| (k, 42_usize))
            .collect::<AvlMap<_, _>>();

        bench_walks(&mut g, &t);
    }
}

/// Compare the lazy borrowing walk with the materialised snapshot.
fn bench_walks<M>(g: &mut BenchmarkGroup<'_, M>, t: &AvlMap<u16, usize>)
where
    M: Measurement,
{
    let n_values = t.len();

    // Values per second
    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::new("iter/n_values", n_values), |b| {
        b.iter(|| {
            for v in t.iter() {
                black_box(v);
            }
        })
    });

    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(
        BenchmarkId::new("traverse_in_order/n_values", n_values),
        |b| b.iter(|| black_box(t.traverse_in_order())),
    );
}
