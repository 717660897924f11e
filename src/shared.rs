//! A range tree shared between threads behind one exclusive lock.
//!
//! Queries push pending actions down the tree, so reads mutate just like
//! writes. There is no shared-read path: every call, queries included, takes
//! the same mutex. Separate instances never contend with each other.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::lazy::RangeAggregateTree;
use crate::monoid::{ActionMonoid, ValueMonoid};

/// Cloneable handle to a mutex-guarded [`RangeAggregateTree`].
pub struct SharedRangeTree<M, A>
where
    M: ValueMonoid,
    A: ActionMonoid<M::Value>,
{
    inner: Arc<Mutex<RangeAggregateTree<M, A>>>,
}

impl<M, A> Clone for SharedRangeTree<M, A>
where
    M: ValueMonoid,
    A: ActionMonoid<M::Value>,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M, A> From<RangeAggregateTree<M, A>> for SharedRangeTree<M, A>
where
    M: ValueMonoid,
    A: ActionMonoid<M::Value>,
{
    fn from(tree: RangeAggregateTree<M, A>) -> Self {
        Self::new(tree)
    }
}

impl<M, A> SharedRangeTree<M, A>
where
    M: ValueMonoid,
    A: ActionMonoid<M::Value>,
{
    /// Take ownership of `tree`.
    pub fn new(tree: RangeAggregateTree<M, A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Return true if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// See [`RangeAggregateTree::build`].
    pub fn build(&self, values: Vec<M::Value>) -> Result<()> {
        self.inner.lock().build(values)
    }

    /// See [`RangeAggregateTree::update`].
    pub fn update(&self, i: usize, x: M::Value) -> Result<()> {
        self.inner.lock().update(i, x)
    }

    /// See [`RangeAggregateTree::apply_range`].
    pub fn apply_range(&self, l: usize, r: usize, a: A::Action) -> Result<()> {
        self.inner.lock().apply_range(l, r, a)
    }

    /// See [`RangeAggregateTree::query`].
    pub fn query(&self, l: usize, r: usize) -> Result<M::Value> {
        self.inner.lock().query(l, r)
    }

    /// See [`RangeAggregateTree::get`].
    pub fn get(&self, i: usize) -> Result<M::Value> {
        self.inner.lock().get(i)
    }

    /// Run `f` with the lock held, for sequences of calls that must not
    /// interleave with other callers.
    pub fn with_tree<R>(&self, f: impl FnOnce(&mut RangeAggregateTree<M, A>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Recover the tree if this is the last handle.
    pub fn try_unwrap(self) -> std::result::Result<RangeAggregateTree<M, A>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Add, Counted, CountedSum};
    use std::thread;

    #[test]
    fn test_concurrent_callers_serialize() {
        let values = vec![Counted::single(0u64); 64];
        let tree =
            RangeAggregateTree::from_values(values, CountedSum::<u64>::new(), Add::<u64>::new());
        let shared = SharedRangeTree::new(tree);

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for k in 0..100 {
                        let l = (t * 7 + k) % 64;
                        shared.apply_range(l, 64, 1).unwrap();
                        shared.query(0, l).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let expected: u64 = (0..8u64)
            .flat_map(|t| (0..100u64).map(move |k| 64 - (t * 7 + k) % 64))
            .sum();
        assert_eq!(shared.query(0, 64).unwrap().sum, expected);
        assert_eq!(shared.len(), 64);
    }

    #[test]
    fn test_with_tree_and_unwrap() {
        let tree = RangeAggregateTree::from_values(
            vec![Counted::single(1i32); 5],
            CountedSum::<i32>::new(),
            Add::<i32>::new(),
        );
        let shared = SharedRangeTree::from(tree);
        let total = shared.with_tree(|tree| {
            tree.apply_range(0, 5, 2).unwrap();
            tree.query_all()
        });
        assert_eq!(total.sum, 15);
        assert!(shared.update(5, Counted::single(0)).is_err());

        let mut tree = shared.try_unwrap().ok().unwrap();
        assert_eq!(tree.get(4).unwrap().sum, 3);
    }
}
