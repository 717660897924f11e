//! Ready-made monoids and actions for primitive integers.
//!
//! | value monoid      | fold          | identity      |
//! |-------------------|---------------|---------------|
//! | [`Min`]           | minimum       | `T::MAX`      |
//! | [`Max`]           | maximum       | `T::MIN`      |
//! | [`Sum`]           | wrapping sum  | `0`           |
//! | [`CountedSum`]    | sum and length| `(0, 0)`      |
//!
//! | action       | acts on                         | composition        |
//! |--------------|---------------------------------|--------------------|
//! | [`Add`]      | `Min`, `Max`, `CountedSum`      | wrapping sum       |
//! | [`Assign`]   | `Min`, `Max`, `CountedSum`      | latest wins        |
//! | [`Affine`]   | `CountedSum`                    | function composition |
//! | [`NoAction`] | anything                        | trivial            |
//!
//! Sums use wrapping arithmetic so the laws hold exactly over $\mathbb{Z}/2^k$.
//! [`Add`] on `Min`/`Max` saturates instead, so the identity of `Min` survives
//! non-negative additions (and that of `Max` non-positive ones). Keep values
//! away from the bounds when the laws have to hold exactly.

use std::fmt;
use std::marker::PhantomData;

use crate::monoid::{ActionMonoid, ValueMonoid};

macro_rules! marker {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<T>(PhantomData<fn() -> T>);

        impl<T> $name<T> {
            /// Create the marker.
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

marker! {
    /// Range minimum.
    Min
}
marker! {
    /// Range maximum.
    Max
}
marker! {
    /// Range sum.
    Sum
}
marker! {
    /// Range sum that also tracks how many elements it covers.
    ///
    /// Needed by actions whose effect on a sum depends on the range length.
    CountedSum
}
marker! {
    /// Add a constant to every element.
    Add
}
marker! {
    /// Overwrite every element with a constant. `None` is the identity.
    Assign
}
marker! {
    /// Replace every element `x` with `b * x + c`, written as the pair `(b, c)`.
    Affine
}

/// The trivial action: turns the tree into a plain (non-lazy) segment tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAction;

impl<X> ActionMonoid<X> for NoAction
where
    X: Clone,
{
    type Action = ();

    fn identity(&self) {}

    fn compose(&self, _older: &(), _newer: &()) {}

    fn act(&self, x: &X, _a: &()) -> X {
        x.clone()
    }
}

/// An element of [`CountedSum`]: a sum and the number of elements it covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Counted<T> {
    /// Sum of the covered elements.
    pub sum: T,
    /// Number of covered elements.
    pub len: T,
}

impl<T> Counted<T> {
    /// Wrap a single element.
    pub fn single(value: T) -> Self
    where
        T: From<u8>,
    {
        Self {
            sum: value,
            len: T::from(1),
        }
    }
}

macro_rules! impl_int_ops {
    ($($t:ty),* $(,)?) => {$(
        impl ValueMonoid for Min<$t> {
            type Value = $t;

            fn identity(&self) -> $t {
                <$t>::MAX
            }

            fn op(&self, a: &$t, b: &$t) -> $t {
                *a.min(b)
            }
        }

        impl ValueMonoid for Max<$t> {
            type Value = $t;

            fn identity(&self) -> $t {
                <$t>::MIN
            }

            fn op(&self, a: &$t, b: &$t) -> $t {
                *a.max(b)
            }
        }

        impl ValueMonoid for Sum<$t> {
            type Value = $t;

            fn identity(&self) -> $t {
                0
            }

            fn op(&self, a: &$t, b: &$t) -> $t {
                a.wrapping_add(*b)
            }
        }

        impl ValueMonoid for CountedSum<$t> {
            type Value = Counted<$t>;

            fn identity(&self) -> Counted<$t> {
                Counted { sum: 0, len: 0 }
            }

            fn op(&self, a: &Counted<$t>, b: &Counted<$t>) -> Counted<$t> {
                Counted {
                    sum: a.sum.wrapping_add(b.sum),
                    len: a.len.wrapping_add(b.len),
                }
            }
        }

        impl ActionMonoid<$t> for Add<$t> {
            type Action = $t;

            fn identity(&self) -> $t {
                0
            }

            fn compose(&self, older: &$t, newer: &$t) -> $t {
                older.wrapping_add(*newer)
            }

            fn act(&self, x: &$t, a: &$t) -> $t {
                x.saturating_add(*a)
            }
        }

        impl ActionMonoid<Counted<$t>> for Add<$t> {
            type Action = $t;

            fn identity(&self) -> $t {
                0
            }

            fn compose(&self, older: &$t, newer: &$t) -> $t {
                older.wrapping_add(*newer)
            }

            fn act(&self, x: &Counted<$t>, a: &$t) -> Counted<$t> {
                Counted {
                    sum: x.sum.wrapping_add(a.wrapping_mul(x.len)),
                    len: x.len,
                }
            }
        }

        impl ActionMonoid<$t> for Assign<$t> {
            type Action = Option<$t>;

            fn identity(&self) -> Option<$t> {
                None
            }

            fn compose(&self, older: &Option<$t>, newer: &Option<$t>) -> Option<$t> {
                newer.or(*older)
            }

            fn act(&self, x: &$t, a: &Option<$t>) -> $t {
                a.unwrap_or(*x)
            }
        }

        impl ActionMonoid<Counted<$t>> for Assign<$t> {
            type Action = Option<$t>;

            fn identity(&self) -> Option<$t> {
                None
            }

            fn compose(&self, older: &Option<$t>, newer: &Option<$t>) -> Option<$t> {
                newer.or(*older)
            }

            fn act(&self, x: &Counted<$t>, a: &Option<$t>) -> Counted<$t> {
                match a {
                    Some(v) => Counted {
                        sum: v.wrapping_mul(x.len),
                        len: x.len,
                    },
                    None => *x,
                }
            }
        }

        impl ActionMonoid<Counted<$t>> for Affine<$t> {
            type Action = ($t, $t);

            fn identity(&self) -> ($t, $t) {
                (1, 0)
            }

            // x -> b2 * (b1 * x + c1) + c2
            fn compose(&self, older: &($t, $t), newer: &($t, $t)) -> ($t, $t) {
                let (b1, c1) = *older;
                let (b2, c2) = *newer;
                (b2.wrapping_mul(b1), b2.wrapping_mul(c1).wrapping_add(c2))
            }

            fn act(&self, x: &Counted<$t>, a: &($t, $t)) -> Counted<$t> {
                let (b, c) = *a;
                Counted {
                    sum: b.wrapping_mul(x.sum).wrapping_add(c.wrapping_mul(x.len)),
                    len: x.len,
                }
            }
        }
    )*};
}

impl_int_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_identities() {
        let min = Min::<i64>::new();
        let max = Max::<i64>::new();
        assert_eq!(min.op(&min.identity(), &-4), -4);
        assert_eq!(max.op(&7, &max.identity()), 7);
    }

    #[test]
    fn test_add_saturates() {
        let add = Add::<i32>::new();
        assert_eq!(ActionMonoid::<i32>::act(&add, &i32::MAX, &5), i32::MAX);
        assert_eq!(ActionMonoid::<i32>::act(&add, &i32::MIN, &-5), i32::MIN);
        assert_eq!(ActionMonoid::<i32>::act(&add, &3, &5), 8);
    }

    #[test]
    fn test_assign_latest_wins() {
        let assign = Assign::<u8>::new();
        let composed = ActionMonoid::<u8>::compose(&assign, &Some(1), &Some(2));
        assert_eq!(composed, Some(2));
        let composed = ActionMonoid::<u8>::compose(&assign, &Some(1), &None);
        assert_eq!(composed, Some(1));
        assert_eq!(ActionMonoid::<u8>::act(&assign, &9, &None), 9);
    }

    #[test]
    fn test_affine_composition_order() {
        let affine = Affine::<i64>::new();
        let x = Counted { sum: 10, len: 2 };
        let f = (2, 1);
        let g = (3, -4);
        let sequential = affine.act(&affine.act(&x, &f), &g);
        let composed = affine.act(&x, &affine.compose(&f, &g));
        assert_eq!(sequential, composed);
        // (3 * (2 * 10 + 1 * 2) - 4 * 2)
        assert_eq!(sequential.sum, 58);
        assert_eq!(sequential.len, 2);
    }

    #[test]
    fn test_counted_add_scales_by_len() {
        let add = Add::<u64>::new();
        let x = Counted { sum: 6, len: 3 };
        assert_eq!(add.act(&x, &2), Counted { sum: 12, len: 3 });
        assert_eq!(Counted::single(5u64), Counted { sum: 5, len: 1 });
    }
}
