use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazyseg::ops::{Add, Min};
use lazyseg::{NaiveRangeArray, RangeAggregateTree};

fn bench_range_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_add");
    let n = 100_000;
    let values: Vec<i64> = (0..n as i64).map(|i| (i * 7919) % 10_007).collect();
    let ranges: Vec<(usize, usize)> = (0..1000)
        .map(|k| {
            let l = (k * 131) % n;
            let r = l + (k * 977) % (n - l) + 1;
            (l, r)
        })
        .collect();

    let (min, add) = (Min::<i64>::new(), Add::<i64>::new());
    let mut tree = RangeAggregateTree::from_values(values.clone(), min, add);
    group.bench_function("tree_apply_query", |b| {
        b.iter(|| {
            for &(l, r) in &ranges {
                tree.apply_range(l, r, 1).unwrap();
                black_box(tree.query(l, r).unwrap());
            }
        })
    });

    let mut naive = NaiveRangeArray::new(values, min, add);
    group.sample_size(10);
    group.bench_function("naive_apply_query", |b| {
        b.iter(|| {
            for &(l, r) in &ranges {
                naive.apply_range(l, r, &1).unwrap();
                black_box(naive.query(l, r).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_range_ops);
criterion_main!(benches);
