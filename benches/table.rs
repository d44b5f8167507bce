use std::hint::black_box;
use std::rc::{Rc, Weak};

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use weak_collections::{WeakHashSet, WeakKeyHashMap};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn keys(n: usize) -> Vec<Rc<String>> {
    lcg(1)
        .take(n)
        .map(|x| Rc::new(format!("k{:016x}", x)))
        .collect()
}

fn bench_set_insert_10k(c: &mut Criterion) {
    c.bench_function("weak_set::insert_10k", |b| {
        b.iter_batched(
            || keys(10_000),
            |keys| {
                let mut set: WeakHashSet<Weak<String>> = WeakHashSet::new();
                for key in &keys {
                    set.insert(Rc::clone(key));
                }
                // Keep the referents alive until after timing.
                black_box((set, keys))
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_map_lookup_hit_10k(c: &mut Criterion) {
    c.bench_function("weak_key_map::lookup_hit_10k", |b| {
        b.iter_batched(
            || {
                let keys = keys(10_000);
                let mut map: WeakKeyHashMap<Weak<String>, u64> = WeakKeyHashMap::new();
                for (i, key) in keys.iter().enumerate() {
                    map.insert(Rc::clone(key), i as u64);
                }
                (map, keys)
            },
            |(map, keys)| {
                let mut sum = 0u64;
                for key in &keys {
                    sum += map.get(key.as_str()).copied().unwrap_or(0);
                }
                black_box((sum, map, keys))
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_churn_with_expiry_10k(c: &mut Criterion) {
    c.bench_function("weak_set::churn_with_expiry_10k", |b| {
        b.iter_batched(
            || keys(10_000),
            |mut keys| {
                let mut set: WeakHashSet<Weak<String>> = WeakHashSet::new();
                for key in &keys {
                    set.insert(Rc::clone(key));
                }
                // Drop half the referents behind the table's back, then
                // make it reconcile.
                keys.truncate(5_000);
                set.remove_expired();
                black_box((set.len(), set, keys))
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_set_insert_10k,
    bench_map_lookup_hit_10k,
    bench_churn_with_expiry_10k
);
criterion_main!(benches);
