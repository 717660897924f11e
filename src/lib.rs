//! # Lazy Segment Trees
//!
//! *Range updates and range folds in logarithmic time.*
//!
//! ## Intuition First
//!
//! Picture a manager who is told "give everyone in rooms 3 through 17 a raise".
//! Walking to every desk would take forever. Instead the manager leaves a sticky
//! note on the door of each floor that lies entirely inside the range, and only
//! passes the note on to the individual rooms when somebody actually asks what
//! happens inside that floor.
//!
//! A lazy segment tree does exactly this: updates stop at the largest subtrees
//! they fully cover and leave a *pending* note there; the note is pushed one level
//! down only when an operation needs to look inside.
//!
//! ## The Problem
//!
//! Given an array of $N$ values, support an arbitrary interleaving of:
//! - **Point update**: set $x_i$.
//! - **Range action**: replace $x_k$ by $f(x_k)$ for every $k \in [l, r)$.
//! - **Range fold**: compute $x_l \cdot x_{l+1} \cdots x_{r-1}$.
//!
//! A plain array answers folds in $O(N)$; prefix sums break down as soon as
//! updates appear; a plain segment tree handles point updates but not range ones.
//!
//! ## Historical Context
//!
//! ```text
//! 1977  Bentley     Segment trees for rectangle-union problems
//! 1980s Folklore    Range-update / range-query trees in computational geometry
//! 2000s Contests    Lazy propagation becomes a standard competitive technique
//! 2015  Al.Cash     Bottom-up, non-recursive trees over arbitrary N
//! 2020  ACL         AtCoder Library generalizes to (monoid, action) pairs
//! ```
//!
//! ## Mathematical Formulation
//!
//! Let $(X, \cdot, e_X)$ be a monoid and $(A, \circ, e_A)$ a monoid acting on $X$
//! through $\mathrm{act}: X \times A \to X$ such that
//!
//! - $\mathrm{act}(x, e_A) = x$,
//! - $\mathrm{act}(\mathrm{act}(x, a), b) = \mathrm{act}(x, a \circ b)$,
//! - $\mathrm{act}(x \cdot y, a) = \mathrm{act}(x, a) \cdot \mathrm{act}(y, a)$.
//!
//! The last law is what allows one pending action to stand in for its effect on
//! every element below it.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(\log N)$ for point update, range action and range fold;
//!   $O(N)$ to build.
//! - **Space**: $2N$ values and $2N$ actions; no per-node allocation.
//!
//! ## What Could Go Wrong
//!
//! 1. **Reads mutate**: a query pushes pending actions along its boundaries, so
//!    it needs `&mut self`. Shared access must go through one exclusive lock
//!    ([`SharedRangeTree`]).
//! 2. **Composition order**: `compose(older, newer)`. Swapping the arguments is
//!    invisible for commutative actions (addition) and wrong for the rest
//!    (affine maps, assignment).
//! 3. **Unchecked laws**: a monoid that is not associative, or an action that does
//!    not distribute over the fold, silently produces wrong aggregates.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`RangeAggregateTree`**: the lazy tree itself.
//! - **`ValueMonoid` / `ActionMonoid`**: the algebra it is generic over, plus
//!   closure adapters.
//! - **`ops`**: min/max/sum monoids with add/assign/affine actions.
//! - **`NaiveRangeArray`**: the $O(N)$ baseline.
//! - **`SharedRangeTree`**: a mutex-guarded handle.
//!
//! ```
//! use lazyseg::ops::{Add, Min};
//! use lazyseg::RangeAggregateTree;
//!
//! let mut tree = RangeAggregateTree::from_values(
//!     vec![5i64, 3, 8, 1, 9],
//!     Min::<i64>::new(),
//!     Add::<i64>::new(),
//! );
//! tree.apply_range(1, 4, 10)?;
//! assert_eq!(tree.query(0, 5)?, 5);
//! assert_eq!(tree.query(1, 4)?, 11);
//! # Ok::<(), lazyseg::Error>(())
//! ```
//!
//! ## References
//!
//! - Bentley, J. L. (1977). "Solutions to Klee's rectangle problems."
//! - de Berg, M., et al. (2008). "Computational Geometry", ch. 10.
//! - Al.Cash (2015). "Efficient and easy segment trees." Codeforces blog 18051.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod lazy;
pub mod monoid;
pub mod naive;
pub mod ops;
pub mod shared;

pub use error::{Error, Result};
pub use lazy::RangeAggregateTree;
pub use monoid::{ActionMonoid, FnAction, FnMonoid, ValueMonoid};
pub use naive::NaiveRangeArray;
pub use shared::SharedRangeTree;
