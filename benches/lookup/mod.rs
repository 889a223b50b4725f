use avlmap::AvlMap;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::shuffled_keys;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("lookup");
    let keys = shuffled_keys();

    // Map size
    for n_values in [1_000, 10_000] {
        let t = keys[..n_values]
            .iter()
            .map(|&k| (k, 42_usize))
            .collect::<AvlMap<_, _>>();

        // Number of key lookups
        for n_lookups in [100, 1_000] {
            let hits = &keys[..n_lookups];
            let misses = &keys[n_values..n_values + n_lookups];

            bench_get(&mut g, &t, hits, misses);
            bench_contains_key(&mut g, &t, hits, misses);
        }
    }
}

/// Generate a benchmark function performing the named lookup method for every
/// key in `hits` (all present in the map) and then in `misses` (all absent).
macro_rules! lookup_bench {
    (
        $name:ident
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(
                g: &mut BenchmarkGroup<'_, M>,
                t: &AvlMap<u16, usize>,
                hits: &[u16],
                misses: &[u16],
            )
            where
                M: Measurement,
            {
                let n_values = t.len();

                for (kind, keys, want) in [("hits", hits, true), ("misses", misses, false)] {
                    g.throughput(Throughput::Elements(keys.len() as _)); // Lookups per second
                    g.bench_function(
                        BenchmarkId::new(
                            format!("{}/{}_values_{}_n_lookups", stringify!($name), n_values, kind),
                            keys.len(),
                        ),
                        |b| {
                            b.iter(|| {
                                for k in keys {
                                    assert_eq!(found(t.$name(k)), want);
                                }
                            })
                        },
                    );
                }
            }
        }
    };
}

/// Normalise the result of a lookup into "was the key found".
trait Found {
    fn found(self) -> bool;
}

impl Found for bool {
    fn found(self) -> bool {
        self
    }
}

impl<T> Found for Option<T> {
    fn found(self) -> bool {
        self.is_some()
    }
}

fn found(v: impl Found) -> bool {
    v.found()
}

lookup_bench!(get);
lookup_bench!(contains_key);
