//! Lazy-propagation range tree over a value monoid and an action monoid.
//!
//! # Layout
//!
//! Two parallel arrays of length $2N$ form an implicit binary tree:
//!
//! ```text
//! node 1          root
//! node i          children 2i and 2i + 1
//! node N + k      leaf for logical index k
//! slot 0          unused
//! ```
//!
//! `N` does not have to be a power of two. In that case some internal nodes
//! (the root among them) cover leaves that are not contiguous in index order;
//! the bottom-up sweep never selects such a node, so range folds stay ordered.
//!
//! # Invariant
//!
//! For every node `i` whose ancestors hold no pending action, the true
//! aggregate of its subtree is `act(val[i], pending[i])`. A node's action is
//! pushed to its children (`commit_and_push`) before anything below it is
//! read or written.
//!
//! # Complexity
//!
//! | operation      | time         |
//! |----------------|--------------|
//! | `new`, `build` | $O(N)$       |
//! | `update`       | $O(\log N)$  |
//! | `apply_range`  | $O(\log N)$  |
//! | `query`, `get` | $O(\log N)$  |
//!
//! Queries push pending actions along their boundary paths, so every
//! operation takes `&mut self`.

use std::fmt;

use crate::error::{Error, Result};
use crate::monoid::{ActionMonoid, FnAction, FnMonoid, ValueMonoid};

/// Array-backed lazy segment tree.
///
/// `M` folds values, `A` acts on them. Both are supplied by the caller and
/// their laws (see [`crate::monoid`]) are trusted, not checked.
#[derive(Clone)]
pub struct RangeAggregateTree<M, A>
where
    M: ValueMonoid,
    A: ActionMonoid<M::Value>,
{
    len: usize,
    /// Node aggregates, excluding the node's own pending action.
    val: Vec<M::Value>,
    /// Actions owed to each node's subtree.
    pending: Vec<A::Action>,
    values: M,
    actions: A,
}

impl<M, A> RangeAggregateTree<M, A>
where
    M: ValueMonoid,
    A: ActionMonoid<M::Value>,
{
    /// Create a tree of `len` elements, each set to the value identity.
    pub fn new(len: usize, values: M, actions: A) -> Self {
        let val = (0..2 * len).map(|_| values.identity()).collect();
        let pending = (0..2 * len).map(|_| actions.identity()).collect();
        log::trace!("allocated range tree (len = {})", len);
        Self {
            len,
            val,
            pending,
            values,
            actions,
        }
    }

    /// Create a tree holding `values`.
    pub fn from_values(values: Vec<M::Value>, monoid: M, actions: A) -> Self {
        let mut tree = Self::new(values.len(), monoid, actions);
        tree.fill(values);
        tree
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replace the whole sequence with `values`. O(N).
    ///
    /// Fails with [`Error::InvalidArgument`] unless exactly `len()` values are
    /// given; the tree is left untouched in that case.
    pub fn build<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = M::Value>,
    {
        let values: Vec<M::Value> = values.into_iter().collect();
        if values.len() != self.len {
            log::debug!(
                "rejected build: expected {} values, got {}",
                self.len,
                values.len()
            );
            return Err(Error::InvalidArgument(format!(
                "build expects {} values, got {}",
                self.len,
                values.len()
            )));
        }
        self.fill(values);
        Ok(())
    }

    fn fill(&mut self, values: Vec<M::Value>) {
        let n = self.len;
        for (slot, x) in self.val[n..].iter_mut().zip(values) {
            *slot = x;
        }
        for i in (1..n).rev() {
            self.val[i] = self.values.op(&self.val[2 * i], &self.val[2 * i + 1]);
        }
        for a in self.pending.iter_mut() {
            *a = self.actions.identity();
        }
        log::trace!("built range tree (len = {})", n);
    }

    /// Set element `i` to `x`. O(log N).
    pub fn update(&mut self, i: usize, x: M::Value) -> Result<()> {
        self.check_index(i)?;
        let pos = i + self.len;
        self.push_ancestors(pos);
        self.val[pos] = x;
        self.pending[pos] = self.actions.identity();
        self.recalc_ancestors(pos);
        Ok(())
    }

    /// Apply `a` to every element in `[l, r)`. O(log N).
    ///
    /// An empty range is a no-op. Fails with [`Error::InvalidArgument`] if
    /// `l > r` and with [`Error::OutOfRange`] if `r > len()`.
    pub fn apply_range(&mut self, l: usize, r: usize, a: A::Action) -> Result<()> {
        self.check_range(l, r)?;
        if l == r {
            return Ok(());
        }
        let n = self.len;
        let (mut lo, mut hi) = (l + n, r + n);
        let (left, right) = (boundary(lo), boundary(hi));
        self.push_boundaries(l, r, left, right);

        while lo < hi {
            if lo & 1 == 1 {
                self.pending[lo] = self.actions.compose(&self.pending[lo], &a);
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                self.pending[hi] = self.actions.compose(&self.pending[hi], &a);
            }
            lo >>= 1;
            hi >>= 1;
        }

        self.recalc_ancestors(left);
        self.recalc_ancestors(right);
        Ok(())
    }

    /// Fold the elements of `[l, r)` in index order. O(log N).
    ///
    /// An empty range folds to the value identity. Errors as
    /// [`apply_range`](Self::apply_range).
    pub fn query(&mut self, l: usize, r: usize) -> Result<M::Value> {
        self.check_range(l, r)?;
        Ok(self.fold(l, r))
    }

    /// Return element `i`. O(log N).
    pub fn get(&mut self, i: usize) -> Result<M::Value> {
        self.check_index(i)?;
        Ok(self.fold(i, i + 1))
    }

    /// Fold the whole sequence.
    ///
    /// The root is not read directly: for sizes that are not powers of two it
    /// aggregates its leaves out of index order.
    pub fn query_all(&mut self) -> M::Value {
        self.fold(0, self.len)
    }

    /// Materialize the logical sequence. O(N).
    ///
    /// Pushes every pending action down to the leaves on the way.
    pub fn snapshot(&mut self) -> Vec<M::Value> {
        let n = self.len;
        // Parents precede their children, so this is a root-to-leaf push.
        for i in 1..n {
            self.commit_and_push(i);
        }
        (n..2 * n).map(|pos| self.eval(pos)).collect()
    }

    /// Iterate over `(node, val, pending)` for every node in `1..2N`.
    ///
    /// Raw storage, for debugging; `val` excludes the node's own pending action.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, &M::Value, &A::Action)> + '_ {
        (1..self.val.len()).map(move |i| (i, &self.val[i], &self.pending[i]))
    }

    fn fold(&mut self, l: usize, r: usize) -> M::Value {
        if l == r {
            return self.values.identity();
        }
        let n = self.len;
        let (mut lo, mut hi) = (l + n, r + n);
        self.push_boundaries(l, r, boundary(lo), boundary(hi));

        let mut acc_left = self.values.identity();
        let mut acc_right = self.values.identity();
        while lo < hi {
            if lo & 1 == 1 {
                acc_left = self.values.op(&acc_left, &self.eval(lo));
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                acc_right = self.values.op(&self.eval(hi), &acc_right);
            }
            lo >>= 1;
            hi >>= 1;
        }
        self.values.op(&acc_left, &acc_right)
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.len {
            log::debug!("rejected index {} (len = {})", i, self.len);
            return Err(Error::OutOfRange {
                index: i,
                len: self.len,
            });
        }
        Ok(())
    }

    fn check_range(&self, l: usize, r: usize) -> Result<()> {
        if l > r {
            log::debug!("rejected range [{}, {}): start after end", l, r);
            return Err(Error::InvalidArgument(format!(
                "range start {} is after range end {}",
                l, r
            )));
        }
        if r > self.len {
            log::debug!("rejected range [{}, {}) (len = {})", l, r, self.len);
            return Err(Error::OutOfRange {
                index: r,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Push the ancestor chains of both sweep boundaries.
    ///
    /// The strict ancestors of `boundary(N)` never hold a pending action:
    /// every node the sweep selects lies at or below that chain's bottom, or
    /// off it entirely. A range starting at 0 or ending at `N` therefore has
    /// nothing to push on that side.
    fn push_boundaries(&mut self, l: usize, r: usize, left: usize, right: usize) {
        if l > 0 {
            self.push_ancestors(left);
        }
        if r < self.len {
            self.push_ancestors(right);
        }
    }

    fn eval(&self, i: usize) -> M::Value {
        self.actions.act(&self.val[i], &self.pending[i])
    }

    fn commit_and_push(&mut self, i: usize) {
        let a = std::mem::replace(&mut self.pending[i], self.actions.identity());
        self.val[i] = self.actions.act(&self.val[i], &a);
        for child in [2 * i, 2 * i + 1] {
            self.pending[child] = self.actions.compose(&self.pending[child], &a);
        }
    }

    /// Push pending actions from the root down to the parent of `i`.
    fn push_ancestors(&mut self, i: usize) {
        let height = bit_length(i);
        for h in (1..height).rev() {
            self.commit_and_push(i >> h);
        }
    }

    fn recalc_ancestors(&mut self, mut i: usize) {
        while i > 1 {
            i >>= 1;
            self.val[i] = self.values.op(&self.eval(2 * i), &self.eval(2 * i + 1));
        }
    }
}

impl<X, T, OpX, OpA, Act> RangeAggregateTree<FnMonoid<X, OpX>, FnAction<T, OpA, Act>>
where
    X: Clone,
    T: Clone,
    OpX: Fn(&X, &X) -> X,
    OpA: Fn(&T, &T) -> T,
    Act: Fn(&X, &T) -> X,
{
    /// Create a tree of `len` identity elements from plain closures.
    ///
    /// `op_a(older, newer)` must compose actions in application order.
    pub fn from_fns(len: usize, op_x: OpX, id_x: X, op_a: OpA, id_a: T, act: Act) -> Self {
        Self::new(len, FnMonoid::new(op_x, id_x), FnAction::new(op_a, id_a, act))
    }
}

impl<M, A> fmt::Debug for RangeAggregateTree<M, A>
where
    M: ValueMonoid,
    A: ActionMonoid<M::Value>,
    M::Value: fmt::Debug,
    A::Action: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeAggregateTree")
            .field("len", &self.len)
            .field("nodes", &self.nodes().collect::<Vec<_>>())
            .finish()
    }
}

/// Number of bits needed to represent `i`.
fn bit_length(i: usize) -> u32 {
    usize::BITS - i.leading_zeros()
}

/// Highest node on the chain of `pos` whose subtree starts at `pos`.
///
/// `pos` is a leaf position in `[N, 2N]`, hence non-zero.
fn boundary(pos: usize) -> usize {
    pos >> pos.trailing_zeros()
}
