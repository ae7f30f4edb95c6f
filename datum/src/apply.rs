//! Applicative semigroups for progressive values.
//!
//! The [`Semigroup`] instances on [`Datum`] and [`OneShot`] are biased
//! toward progress: `Empty` is neutral. Wrapping a value in [`Apply`]
//! selects the other combination instead, the one used by `zip_with`,
//! where `Empty` annihilates, then `Loading` wins, then staleness.
//!
//! ```rust
//! use datum::{Apply, Datum};
//! use datum_algebra::{Monoid, Semigroup, Sum};
//!
//! let progress = Datum::Empty.combine(&Datum::fresh(Sum(1)));
//! assert_eq!(progress, Datum::fresh(Sum(1)));
//!
//! let apply = Apply(Datum::Empty).combine(&Apply(Datum::fresh(Sum(1))));
//! assert_eq!(apply, Apply(Datum::Empty));
//!
//! assert_eq!(Apply::<Datum<Sum<i32>>>::empty(), Apply(Datum::fresh(Sum(0))));
//! ```
use datum_algebra::Monoid;
use datum_algebra::Semigroup;

use crate::datum::Datum;
use crate::one_shot::OneShot;

/// Selects the applicative semigroup of the wrapped container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Apply<T>(pub T);

impl<T> Apply<T> {
    /// Unwrap.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<A: Semigroup + Clone> Semigroup for Apply<Datum<A>> {
    fn combine(&self, other: &Self) -> Self {
        Apply(self.0.as_ref().zip_with(other.0.as_ref(), |a, b| a.combine(b)))
    }
}

impl<A: Monoid + Clone> Monoid for Apply<Datum<A>> {
    fn empty() -> Self {
        Apply(Datum::Fresh(A::empty()))
    }
}

/// The apply identity `Fresh(A::empty())`, not `Empty`.
impl<A: Monoid + Clone> Default for Apply<Datum<A>> {
    fn default() -> Self {
        <Self as Monoid>::empty()
    }
}

impl<A: Semigroup + Clone> Semigroup for Apply<OneShot<A>> {
    fn combine(&self, other: &Self) -> Self {
        Apply(self.0.as_ref().zip_with(other.0.as_ref(), |a, b| a.combine(b)))
    }
}

impl<A: Monoid + Clone> Monoid for Apply<OneShot<A>> {
    fn empty() -> Self {
        Apply(OneShot::Done(A::empty()))
    }
}

/// The apply identity `Done(A::empty())`.
impl<A: Monoid + Clone> Default for Apply<OneShot<A>> {
    fn default() -> Self {
        <Self as Monoid>::empty()
    }
}
