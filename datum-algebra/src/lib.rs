#![deny(missing_docs)]
//! # datum-algebra — semigroups and monoids for progressive values
//!
//! **Part of the [datum workspace](../index.html)**
//!
//! The combinators in the `datum` crate never know how to merge two
//! payloads on their own. Whenever two valued states meet, the merge
//! is delegated to one of the traits defined here:
//!
//! - [`Semigroup`]: associative binary operation
//! - [`Monoid`]: semigroup with identity element
//!
//! ## Quick start
//!
//! ```rust
//! use datum_algebra::{Monoid, Semigroup, Sum};
//!
//! let x = Sum(3);
//! let y = Sum(5);
//! assert_eq!(x.combine(&y), Sum(8));
//! assert_eq!(Sum::empty().combine(&x), x);
//!
//! // Strings are the usual error accumulator
//! let e = String::from("timeout; ").combine(&String::from("refused"));
//! assert_eq!(e, "timeout; refused");
//! ```
//!
//! ## Provided instances
//!
//! - **[`String`]**, **[`Vec<T>`](Vec)**: concatenation, empty is
//!   the empty collection.
//! - **[`Option<S>`](Option)**: lifted semigroup, `None` is the
//!   identity, `Some(a) <> Some(b) = Some(a <> b)`.
//! - **`()`** and tuples up to arity 4: componentwise.
//! - Wrappers: [`Sum`], [`Product`] (numeric, via `num-traits`),
//!   [`First`], [`Last`], [`Max`], [`Min`].

use std::ops::Add;
use std::ops::Mul;

use num_traits::One;
use num_traits::Zero;

/// A **semigroup**: a type with an associative binary operation.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Example
///
/// ```rust
/// use datum_algebra::Semigroup;
///
/// #[derive(Clone, Debug, PartialEq, Eq)]
/// struct Warnings(Vec<&'static str>);
///
/// impl Semigroup for Warnings {
///     fn combine(&self, other: &Self) -> Self {
///         Warnings(self.0.combine(&other.0))
///     }
/// }
///
/// let a = Warnings(vec!["stale cache"]);
/// let b = Warnings(vec!["slow upstream"]);
/// assert_eq!(a.combine(&b), Warnings(vec!["stale cache", "slow upstream"]));
/// ```
pub trait Semigroup: Sized {
    /// Combine two elements associatively.
    fn combine(&self, other: &Self) -> Self;

    /// In-place combine.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }

    /// Combine a finite iterator of values left to right. Returns
    /// `None` for empty iterators.
    fn combine_all<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter().reduce(|acc, x| acc.combine(&x))
    }
}

/// A **monoid**: a semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Left identity**: `empty().combine(a) == a`
/// - **Right identity**: `a.combine(empty()) == a`
///
/// # Example
///
/// ```rust
/// use datum_algebra::{Monoid, Product, Semigroup};
///
/// let x = Product(3);
/// assert_eq!(Product::empty().combine(&x), x);
/// assert_eq!(Product::concat([Product(2), Product(3), Product(4)]), Product(24));
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Fold an iterator using combine, starting from empty.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::empty(), |acc, x| acc.combine(&x))
    }
}

/// Numeric addition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T> + Clone> Semigroup for Sum<T> {
    fn combine(&self, other: &Self) -> Self {
        Sum(self.0.clone() + other.0.clone())
    }
}

impl<T: Zero + Clone> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::zero())
    }
}

/// Numeric multiplication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<T>(pub T);

impl<T: Mul<Output = T> + Clone> Semigroup for Product<T> {
    fn combine(&self, other: &Self) -> Self {
        Product(self.0.clone() * other.0.clone())
    }
}

impl<T: One + Clone> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

/// Keeps the left-most value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<T>(pub T);

impl<T: Clone> Semigroup for First<T> {
    fn combine(&self, _other: &Self) -> Self {
        self.clone()
    }
}

/// Keeps the right-most value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Last<T>(pub T);

impl<T: Clone> Semigroup for Last<T> {
    fn combine(&self, other: &Self) -> Self {
        other.clone()
    }
}

/// Keeps the greater value; ties keep the left operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<T>(pub T);

impl<T: Ord + Clone> Semigroup for Max<T> {
    fn combine(&self, other: &Self) -> Self {
        if other.0 > self.0 {
            other.clone()
        } else {
            self.clone()
        }
    }
}

/// Keeps the lesser value; ties keep the left operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<T>(pub T);

impl<T: Ord + Clone> Semigroup for Min<T> {
    fn combine(&self, other: &Self) -> Self {
        if other.0 < self.0 {
            other.clone()
        } else {
            self.clone()
        }
    }
}

// Collections: concatenation

impl Semigroup for String {
    fn combine(&self, other: &Self) -> Self {
        let mut out = String::with_capacity(self.len() + other.len());
        out.push_str(self);
        out.push_str(other);
        out
    }

    fn combine_assign(&mut self, other: &Self) {
        self.push_str(other);
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len() + other.len());
        out.extend_from_slice(self);
        out.extend_from_slice(other);
        out
    }

    fn combine_assign(&mut self, other: &Self) {
        self.extend_from_slice(other);
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

// Option: lifted semigroup

impl<S: Semigroup + Clone> Semigroup for Option<S> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (None, x) | (x, None) => x.clone(),
            (Some(a), Some(b)) => Some(a.combine(b)),
        }
    }
}

impl<S: Semigroup + Clone> Monoid for Option<S> {
    fn empty() -> Self {
        None
    }
}

// Unit type

impl Semigroup for () {
    fn combine(&self, _other: &Self) -> Self {}
}

impl Monoid for () {
    fn empty() -> Self {}
}

// Tuples: product monoids

macro_rules! impl_product_monoid {
    ( $( $T:ident : $idx:tt ),+ ) => {
        impl<$( $T ),+> Semigroup for ( $( $T, )+ )
        where
            $( $T: Semigroup ),+
        {
            fn combine(&self, other: &Self) -> Self {
                (
                    $( self.$idx.combine(&other.$idx), )+
                )
            }
        }

        impl<$( $T ),+> Monoid for ( $( $T, )+ )
        where
            $( $T: Monoid ),+
        {
            fn empty() -> Self {
                (
                    $( $T::empty(), )+
                )
            }
        }
    }
}

impl_product_monoid!(A:0);
impl_product_monoid!(A:0, B:1);
impl_product_monoid!(A:0, B:1, C:2);
impl_product_monoid!(A:0, B:1, C:2, D:3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_combines_and_has_zero() {
        assert_eq!(Sum(3).combine(&Sum(5)), Sum(8));
        assert_eq!(Sum::<i32>::empty(), Sum(0));
        assert_eq!(Sum::concat(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    }

    #[test]
    fn product_has_one() {
        assert_eq!(Product(4).combine(&Product::empty()), Product(4));
        assert_eq!(Product(2.5_f64).combine(&Product(2.0)), Product(5.0));
    }

    #[test]
    fn string_concat_is_associative() {
        let a = String::from("a");
        let b = String::from("b");
        let c = String::from("c");
        assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
        assert_eq!(a.combine(&b), "ab");
    }

    #[test]
    fn string_combine_assign_appends() {
        let mut s = String::from("x");
        s.combine_assign(&String::from("y"));
        assert_eq!(s, "xy");
    }

    #[test]
    fn vec_identity() {
        let v = vec![1, 2];
        assert_eq!(Vec::empty().combine(&v), v);
        assert_eq!(v.combine(&Vec::empty()), v);
    }

    #[test]
    fn option_none_is_identity() {
        let x = Some(Sum(2));
        assert_eq!(None.combine(&x), x);
        assert_eq!(x.combine(&None), x);
        assert_eq!(x.combine(&Some(Sum(3))), Some(Sum(5)));
    }

    #[test]
    fn first_last_max_min() {
        assert_eq!(First(1).combine(&First(2)), First(1));
        assert_eq!(Last(1).combine(&Last(2)), Last(2));
        assert_eq!(Max(1).combine(&Max(2)), Max(2));
        assert_eq!(Min(1).combine(&Min(2)), Min(1));
    }

    #[test]
    fn combine_all_empty_iterator_is_none() {
        let empty: Vec<Sum<i32>> = vec![];
        assert_eq!(Sum::combine_all(empty), None);
        assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2)]), Some(Sum(3)));
    }

    #[test]
    fn tuples_are_componentwise() {
        let x = (Sum(1), String::from("a"));
        let y = (Sum(2), String::from("b"));
        assert_eq!(x.combine(&y), (Sum(3), String::from("ab")));
        assert_eq!(<(Sum<i32>, String)>::empty(), (Sum(0), String::new()));
    }
}
