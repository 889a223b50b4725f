use avlmap::AvlMap;
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::shuffled_keys;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");
    let random = shuffled_keys();

    for n_values in [1, 100, 1_000, 10_000] {
        let sequential = (0..n_values as u16).collect::<Vec<_>>();

        bench_keys(&mut g, "random", &random[..n_values]);
        bench_keys(&mut g, "sequential", &sequential);
    }
}

/// Measure the time needed to insert `keys` in order into an empty map.
///
/// Sequential keys rotate on the right spine for every other insert.
fn bench_keys<M>(g: &mut BenchmarkGroup<'_, M>, order: &str, keys: &[u16])
where
    M: Measurement,
{
    g.throughput(Throughput::Elements(keys.len() as _)); // Keys inserted per second
    g.bench_function(
        BenchmarkId::new(format!("{order}/n_values"), keys.len()),
        |b| {
            b.iter_batched(
                AvlMap::default,
                |mut t| {
                    for &k in keys {
                        t.put(k, 42_usize);
                    }
                    t
                },
                BatchSize::PerIteration,
            );
        },
    );
}
