//! Naive range array: the plain sequence with no index.
//!
//! Every operation walks the affected elements one by one, so updates and
//! folds cost $O(N)$. It serves as the reference model the tree is tested
//! against and as the baseline in benchmarks.

use crate::error::{Error, Result};
use crate::monoid::{ActionMonoid, ValueMonoid};

/// A flat array applying actions element by element.
#[derive(Clone)]
pub struct NaiveRangeArray<M, A>
where
    M: ValueMonoid,
    A: ActionMonoid<M::Value>,
{
    data: Vec<M::Value>,
    values: M,
    actions: A,
}

impl<M, A> NaiveRangeArray<M, A>
where
    M: ValueMonoid,
    A: ActionMonoid<M::Value>,
{
    /// Create an array holding `data`.
    pub fn new(data: Vec<M::Value>, values: M, actions: A) -> Self {
        Self {
            data,
            values,
            actions,
        }
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The current contents.
    pub fn as_slice(&self) -> &[M::Value] {
        &self.data
    }

    /// Replace the contents; the length must not change.
    pub fn build(&mut self, data: Vec<M::Value>) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(Error::InvalidArgument(format!(
                "build expects {} values, got {}",
                self.data.len(),
                data.len()
            )));
        }
        self.data = data;
        Ok(())
    }

    /// Set element `i` to `x`. O(1).
    pub fn update(&mut self, i: usize, x: M::Value) -> Result<()> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(i)
            .ok_or(Error::OutOfRange { index: i, len })?;
        *slot = x;
        Ok(())
    }

    /// Apply `a` to each element of `[l, r)`. O(N).
    pub fn apply_range(&mut self, l: usize, r: usize, a: &A::Action) -> Result<()> {
        self.check_range(l, r)?;
        for x in &mut self.data[l..r] {
            *x = self.actions.act(x, a);
        }
        Ok(())
    }

    /// Fold `[l, r)` left to right. O(N).
    pub fn query(&self, l: usize, r: usize) -> Result<M::Value> {
        self.check_range(l, r)?;
        Ok(self.data[l..r]
            .iter()
            .fold(self.values.identity(), |acc, x| self.values.op(&acc, x)))
    }

    fn check_range(&self, l: usize, r: usize) -> Result<()> {
        if l > r {
            return Err(Error::InvalidArgument(format!(
                "range start {} is after range end {}",
                l, r
            )));
        }
        if r > self.data.len() {
            return Err(Error::OutOfRange {
                index: r,
                len: self.data.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Add, Min};

    #[test]
    fn test_naive_worked_example() {
        let mut arr = NaiveRangeArray::new(
            vec![5i64, 3, 8, 1, 9],
            Min::<i64>::new(),
            Add::<i64>::new(),
        );
        arr.apply_range(1, 4, &10).unwrap();
        assert_eq!(arr.as_slice(), &[5, 13, 18, 11, 9]);
        assert_eq!(arr.query(0, 5).unwrap(), 5);
        assert_eq!(arr.query(1, 4).unwrap(), 11);
        assert_eq!(arr.query(2, 2).unwrap(), i64::MAX);
    }

    #[test]
    fn test_naive_errors() {
        let mut arr = NaiveRangeArray::new(vec![1i64, 2], Min::<i64>::new(), Add::<i64>::new());
        assert!(matches!(arr.update(2, 0), Err(Error::OutOfRange { .. })));
        assert!(matches!(arr.query(2, 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(arr.build(vec![1]), Err(Error::InvalidArgument(_))));
    }
}
