#![no_main]
use libfuzzer_sys::fuzz_target;
use lazyseg::ops::{Affine, Counted, CountedSum};
use lazyseg::{NaiveRangeArray, RangeAggregateTree};

fuzz_target!(|data: (Vec<i64>, Vec<(u8, usize, usize, i64, i64)>)| {
    let (values, ops) = data;
    if values.is_empty() {
        return;
    }
    let n = values.len();

    let values: Vec<Counted<i64>> = values.into_iter().map(Counted::single).collect();
    let (sum, affine) = (CountedSum::<i64>::new(), Affine::<i64>::new());
    let mut tree = RangeAggregateTree::from_values(values.clone(), sum, affine);
    let mut naive = NaiveRangeArray::new(values, sum, affine);

    for (kind, a, b, x, y) in ops {
        let (l, r) = (a % (n + 1), b % (n + 1));
        let (l, r) = (l.min(r), l.max(r));
        match kind % 3 {
            0 => {
                let i = a % n;
                tree.update(i, Counted::single(x)).unwrap();
                naive.update(i, Counted::single(x)).unwrap();
            }
            1 => {
                tree.apply_range(l, r, (x, y)).unwrap();
                naive.apply_range(l, r, &(x, y)).unwrap();
            }
            _ => {
                assert_eq!(tree.query(l, r).unwrap(), naive.query(l, r).unwrap());
            }
        }
    }

    assert_eq!(tree.snapshot(), naive.as_slice().to_vec());
});
