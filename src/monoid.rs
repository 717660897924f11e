//! Capability traits for the value monoid and the action monoid.
//!
//! A range tree is configured by two pieces of algebra supplied by the caller:
//!
//! - a **value monoid** $(X, \cdot, e_X)$ whose operator folds adjacent
//!   elements into an aggregate, and
//! - an **action monoid** $(A, \circ, e_A)$ together with a map
//!   $\mathrm{act}: X \times A \to X$ describing how an update transforms an
//!   aggregate.
//!
//! # Laws
//!
//! The tree relies on the following and never checks them:
//!
//! ```text
//! op(op(x, y), z)         == op(x, op(y, z))            (associativity, both monoids)
//! op(e, x) == op(x, e)    == x                           (identity, both monoids)
//! act(x, e_A)             == x
//! act(act(x, a), b)       == act(x, compose(a, b))       (older action first)
//! act(op(x, y), a)        == op(act(x, a), act(y, a))    (action distributes over the fold)
//! ```
//!
//! Breaking any of them yields wrong aggregates, not an error.

/// A monoid over the values stored in the tree.
///
/// The operator need not be commutative: folds always combine in index order.
pub trait ValueMonoid {
    /// Element type.
    type Value: Clone;

    /// The identity element; the result of folding an empty range.
    fn identity(&self) -> Self::Value;

    /// Combine two adjacent aggregates, `a` to the left of `b`.
    fn op(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;
}

/// A monoid of actions acting on values of type `X`.
pub trait ActionMonoid<X> {
    /// Action type.
    type Action: Clone;

    /// The action that leaves every value unchanged.
    fn identity(&self) -> Self::Action;

    /// Compose two actions into one.
    ///
    /// `older` was applied first. The result must satisfy
    /// `act(act(x, older), newer) == act(x, compose(older, newer))`.
    fn compose(&self, older: &Self::Action, newer: &Self::Action) -> Self::Action;

    /// Apply `a` to the aggregate `x`.
    fn act(&self, x: &X, a: &Self::Action) -> X;
}

/// A [`ValueMonoid`] assembled from a closure and an identity value.
#[derive(Clone)]
pub struct FnMonoid<X, Op> {
    op: Op,
    identity: X,
}

impl<X, Op> FnMonoid<X, Op>
where
    X: Clone,
    Op: Fn(&X, &X) -> X,
{
    /// Create a value monoid from its operator and identity.
    pub fn new(op: Op, identity: X) -> Self {
        Self { op, identity }
    }
}

impl<X, Op> ValueMonoid for FnMonoid<X, Op>
where
    X: Clone,
    Op: Fn(&X, &X) -> X,
{
    type Value = X;

    fn identity(&self) -> X {
        self.identity.clone()
    }

    fn op(&self, a: &X, b: &X) -> X {
        (self.op)(a, b)
    }
}

/// An [`ActionMonoid`] assembled from closures and an identity action.
#[derive(Clone)]
pub struct FnAction<A, Op, Act> {
    compose: Op,
    act: Act,
    identity: A,
}

impl<A, Op, Act> FnAction<A, Op, Act>
where
    A: Clone,
    Op: Fn(&A, &A) -> A,
{
    /// Create an action monoid from its composition, identity and action map.
    pub fn new<X>(compose: Op, identity: A, act: Act) -> Self
    where
        Act: Fn(&X, &A) -> X,
    {
        Self {
            compose,
            act,
            identity,
        }
    }
}

impl<X, A, Op, Act> ActionMonoid<X> for FnAction<A, Op, Act>
where
    A: Clone,
    Op: Fn(&A, &A) -> A,
    Act: Fn(&X, &A) -> X,
{
    type Action = A;

    fn identity(&self) -> A {
        self.identity.clone()
    }

    fn compose(&self, older: &A, newer: &A) -> A {
        (self.compose)(older, newer)
    }

    fn act(&self, x: &X, a: &A) -> X {
        (self.act)(x, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_monoid_min() {
        let m = FnMonoid::new(|a: &i64, b: &i64| *a.min(b), i64::MAX);
        assert_eq!(m.identity(), i64::MAX);
        assert_eq!(m.op(&3, &7), 3);
        assert_eq!(m.op(&m.identity(), &7), 7);
    }

    #[test]
    fn test_fn_action_add() {
        let a = FnAction::new(|x: &i64, y: &i64| x + y, 0i64, |x: &i64, a: &i64| x + a);
        assert_eq!(ActionMonoid::<i64>::identity(&a), 0);
        assert_eq!(ActionMonoid::<i64>::compose(&a, &2, &5), 7);
        let act = |x: i64, v: i64| ActionMonoid::<i64>::act(&a, &x, &v);
        assert_eq!(act(10, 5), 15);
        assert_eq!(act(act(10, 2), 5), act(10, ActionMonoid::<i64>::compose(&a, &2, &5)));
    }
}
