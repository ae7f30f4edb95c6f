//! The four-state **progressive value**.
//!
//! A [`Datum`] records where a fetched value is in its lifecycle:
//!
//! | variant   | value? | request in flight? |
//! |-----------|--------|--------------------|
//! | `Empty`   | no     | no                 |
//! | `Loading` | no     | yes                |
//! | `Stale`   | yes    | yes                |
//! | `Fresh`   | yes    | no                 |
//!
//! # Precedence
//!
//! When two datums meet in [`Datum::zip_with`] (and everything built on
//! it), the *least settled* side wins:
//!
//! `Empty` ≻ `Loading` ≻ any `Stale` ≻ `Fresh`
//!
//! The [`Semigroup`] instance is different: it is biased toward
//! progress, so `Empty` is neutral and a `Loading` side only marks the
//! other side's value as `Stale`. The applicative behaviour is
//! available as a semigroup through [`Apply`](crate::Apply).
//!
//! # Example
//!
//! ```rust
//! use datum::Datum;
//!
//! let user = Datum::fresh("ada");
//! let posts = Datum::stale(3);
//!
//! let summary = user.zip_with(posts, |u, n| format!("{u}: {n} posts"));
//! assert_eq!(summary, Datum::stale("ada: 3 posts".to_string()));
//!
//! // Requesting a refresh keeps the value visible
//! assert_eq!(Datum::fresh(1).to_stale(), Datum::stale(1));
//! ```
use std::cmp::Ordering;
use std::fmt;
#[cfg(feature = "async")]
use std::future::Future;

use datum_algebra::Monoid;
use datum_algebra::Semigroup;

use crate::error::NotValued;

/// A value that may be absent, loading, being refreshed, or settled.
///
/// Derived ordering is `Empty < Loading < Stale(_) < Fresh(_)`, with
/// payloads compared only inside the same variant. In particular
/// `Stale(x) < Fresh(y)` for every `x` and `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Datum<A> {
    /// No value, no activity.
    #[default]
    Empty,
    /// Activity in flight, no value yet.
    Loading,
    /// A value exists and is being refreshed.
    Stale(A),
    /// A value exists and is not being refreshed.
    Fresh(A),
}

impl<A> Datum<A> {
    /// The `Empty` state.
    pub const fn empty() -> Self {
        Datum::Empty
    }

    /// The `Loading` state.
    pub const fn loading() -> Self {
        Datum::Loading
    }

    /// A value that is being refreshed.
    pub const fn stale(value: A) -> Self {
        Datum::Stale(value)
    }

    /// A settled value.
    pub const fn fresh(value: A) -> Self {
        Datum::Fresh(value)
    }

    /// `None` becomes `Empty`, `Some(a)` becomes `Fresh(a)`.
    pub fn from_option(value: Option<A>) -> Self {
        match value {
            Some(a) => Datum::Fresh(a),
            None => Datum::Empty,
        }
    }

    /// `Err(_)` becomes `Empty`, `Ok(a)` becomes `Fresh(a)`.
    ///
    /// `Datum` has no error channel; use
    /// [`DatumEither`](crate::DatumEither) to keep the error.
    pub fn from_result<E>(value: Result<A, E>) -> Self {
        match value {
            Ok(a) => Datum::Fresh(a),
            Err(_) => Datum::Empty,
        }
    }

    /// Raising an error in a container without an error channel
    /// always yields `Empty`.
    pub fn throw_error<E>(_error: E) -> Self {
        Datum::Empty
    }

    /// Total case analysis. Exactly one handler runs.
    pub fn fold<B>(
        self,
        on_empty: impl FnOnce() -> B,
        on_loading: impl FnOnce() -> B,
        on_stale: impl FnOnce(A) -> B,
        on_fresh: impl FnOnce(A) -> B,
    ) -> B {
        match self {
            Datum::Empty => on_empty(),
            Datum::Loading => on_loading(),
            Datum::Stale(a) => on_stale(a),
            Datum::Fresh(a) => on_fresh(a),
        }
    }

    /// `true` for `Empty`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Datum::Empty)
    }

    /// `true` for `Loading`.
    pub fn is_loading(&self) -> bool {
        matches!(self, Datum::Loading)
    }

    /// `true` for `Stale`.
    pub fn is_stale(&self) -> bool {
        matches!(self, Datum::Stale(_))
    }

    /// `true` for `Fresh`.
    pub fn is_fresh(&self) -> bool {
        matches!(self, Datum::Fresh(_))
    }

    /// `true` for `Stale` or `Fresh`.
    pub fn is_valued(&self) -> bool {
        self.value().is_some()
    }

    /// `true` when a request is in flight (`Loading` or `Stale`).
    pub fn is_in_flight(&self) -> bool {
        match self {
            Datum::Loading | Datum::Stale(_) => true,
            Datum::Empty | Datum::Fresh(_) => false,
        }
    }

    /// Borrow the payload, keeping the tag.
    pub fn as_ref(&self) -> Datum<&A> {
        match self {
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(a) => Datum::Stale(a),
            Datum::Fresh(a) => Datum::Fresh(a),
        }
    }

    /// Mutably borrow the payload, keeping the tag.
    pub fn as_mut(&mut self) -> Datum<&mut A> {
        match self {
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(a) => Datum::Stale(a),
            Datum::Fresh(a) => Datum::Fresh(a),
        }
    }

    /// The payload of a valued datum.
    pub fn value(&self) -> Option<&A> {
        self.as_ref().into_value()
    }

    /// Discard the tag and keep the payload, if any.
    pub fn into_value(self) -> Option<A> {
        self.fold(|| None, || None, Some, Some)
    }

    /// Like [`Datum::into_value`], reporting which non-valued state
    /// was found.
    pub fn try_into_value(self) -> Result<A, NotValued> {
        self.fold(
            || Err(NotValued::Empty),
            || Err(NotValued::Loading),
            Ok,
            Ok,
        )
    }

    /// Total extraction with a fallback for each non-valued state.
    pub fn get_or_else(
        self,
        on_empty: impl FnOnce() -> A,
        on_loading: impl FnOnce() -> A,
    ) -> A {
        self.fold(on_empty, on_loading, |a| a, |a| a)
    }

    /// `true` if valued and the payload equals `x`.
    pub fn contains(&self, x: &A) -> bool
    where
        A: PartialEq,
    {
        self.is_valued_and(|a| a == x)
    }

    /// `true` if valued and the payload satisfies `predicate`.
    pub fn is_valued_and(&self, predicate: impl FnOnce(&A) -> bool) -> bool {
        self.value().is_some_and(predicate)
    }

    /// Transform the payload, keeping the tag.
    ///
    /// Functor laws: `d.map(|x| x) == d` and
    /// `d.map(f).map(g) == d.map(|x| g(f(x)))`.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Datum<B> {
        match self {
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(a) => Datum::Stale(f(a)),
            Datum::Fresh(a) => Datum::Fresh(f(a)),
        }
    }

    /// Chain a datum-producing continuation.
    ///
    /// The continuation's shape decides the outcome: the caller's own
    /// stale/fresh tag is discarded. `Empty` and `Loading`
    /// short-circuit.
    ///
    /// ```rust
    /// use datum::Datum;
    ///
    /// assert_eq!(Datum::stale(1).and_then(|n| Datum::fresh(n * 2)), Datum::fresh(2));
    /// assert_eq!(Datum::fresh(1).and_then(|_| Datum::<i32>::Empty), Datum::Empty);
    /// ```
    pub fn and_then<B>(self, f: impl FnOnce(A) -> Datum<B>) -> Datum<B> {
        match self {
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(a) | Datum::Fresh(a) => f(a),
        }
    }

    /// Run a continuation for its shape and keep the original
    /// payload.
    pub fn chain_first<B>(self, f: impl FnOnce(&A) -> Datum<B>) -> Datum<A> {
        self.and_then(|a| f(&a).map(move |_| a))
    }

    /// Combine two datums with the applicative precedence.
    ///
    /// `Empty` dominates `Loading`, which dominates any `Stale`; the
    /// result is `Fresh` only when both sides are `Fresh`.
    pub fn zip_with<B, C>(self, other: Datum<B>, f: impl FnOnce(A, B) -> C) -> Datum<C> {
        match (self, other) {
            (Datum::Empty, _) | (_, Datum::Empty) => Datum::Empty,
            (Datum::Loading, _) | (_, Datum::Loading) => Datum::Loading,
            (Datum::Fresh(a), Datum::Fresh(b)) => Datum::Fresh(f(a, b)),
            (Datum::Stale(a), Datum::Stale(b) | Datum::Fresh(b))
            | (Datum::Fresh(a), Datum::Stale(b)) => Datum::Stale(f(a, b)),
        }
    }

    /// Pair two datums with the applicative precedence.
    pub fn zip<B>(self, other: Datum<B>) -> Datum<(A, B)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Keep this payload, taking the combined shape of both sides.
    pub fn ap_first<B>(self, other: Datum<B>) -> Datum<A> {
        self.zip_with(other, |a, _| a)
    }

    /// Keep the other payload, taking the combined shape of both
    /// sides.
    pub fn ap_second<B>(self, other: Datum<B>) -> Datum<B> {
        self.zip_with(other, |_, b| b)
    }

    /// `self` if valued, otherwise the fallback.
    pub fn alt(self, fallback: impl FnOnce() -> Datum<A>) -> Datum<A> {
        match self {
            Datum::Empty | Datum::Loading => fallback(),
            Datum::Stale(a) => Datum::Stale(a),
            Datum::Fresh(a) => Datum::Fresh(a),
        }
    }

    /// Mark a refresh as started.
    ///
    /// `Empty` and `Loading` become `Loading`; `Fresh(x)` becomes
    /// `Stale(x)`; `Stale` is unchanged.
    pub fn to_stale(self) -> Self {
        self.fold(Datum::loading, Datum::loading, Datum::Stale, Datum::Stale)
    }

    /// Mark a refresh as finished.
    ///
    /// `Empty` and `Loading` become `Empty`; `Stale(x)` becomes
    /// `Fresh(x)`; `Fresh` is unchanged.
    pub fn to_fresh(self) -> Self {
        self.fold(Datum::empty, Datum::empty, Datum::Fresh, Datum::Fresh)
    }

    /// Apply a function to the whole datum and store the result as
    /// `Fresh`.
    pub fn extend<B>(self, f: impl FnOnce(Datum<A>) -> B) -> Datum<B> {
        Datum::Fresh(f(self))
    }

    /// `Fresh(self)`.
    pub fn duplicate(self) -> Datum<Datum<A>> {
        self.extend(|d| d)
    }

    /// Keep a valued datum whose payload passes `predicate`; a
    /// failing payload demotes to `Empty`, never `Loading`.
    pub fn filter(self, predicate: impl FnOnce(&A) -> bool) -> Self {
        match self {
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(a) => {
                if predicate(&a) {
                    Datum::Stale(a)
                } else {
                    Datum::Empty
                }
            }
            Datum::Fresh(a) => {
                if predicate(&a) {
                    Datum::Fresh(a)
                } else {
                    Datum::Empty
                }
            }
        }
    }

    /// Map and filter in one step.
    pub fn filter_map<B>(self, f: impl FnOnce(A) -> Option<B>) -> Datum<B> {
        self.map(f).compact()
    }

    /// Split by `predicate` into `(failing, passing)`.
    ///
    /// A valued payload lands on one side and the other side is
    /// `Empty`. `Empty` and `Loading` are copied to both sides.
    pub fn partition(self, predicate: impl FnOnce(&A) -> bool) -> (Datum<A>, Datum<A>) {
        self.partition_map(|a| if predicate(&a) { Ok(a) } else { Err(a) })
    }

    /// Split by a function returning `Err` for the left side and `Ok`
    /// for the right side.
    pub fn partition_map<B, C>(self, f: impl FnOnce(A) -> Result<C, B>) -> (Datum<B>, Datum<C>) {
        self.map(f).separate()
    }

    /// Left fold over the (zero or one) payload.
    pub fn reduce<B>(self, init: B, f: impl FnOnce(B, A) -> B) -> B {
        match self.into_value() {
            Some(a) => f(init, a),
            None => init,
        }
    }

    /// Right fold over the (zero or one) payload.
    pub fn reduce_right<B>(self, init: B, f: impl FnOnce(A, B) -> B) -> B {
        match self.into_value() {
            Some(a) => f(a, init),
            None => init,
        }
    }

    /// Map the payload into a monoid; non-valued states give
    /// `M::empty()`.
    pub fn fold_map<M: Monoid>(self, f: impl FnOnce(A) -> M) -> M {
        self.into_value().map_or_else(M::empty, f)
    }

    /// Traverse with an `Option` effect, keeping the tag.
    pub fn traverse_option<B>(self, f: impl FnOnce(A) -> Option<B>) -> Option<Datum<B>> {
        match self {
            Datum::Empty => Some(Datum::Empty),
            Datum::Loading => Some(Datum::Loading),
            Datum::Stale(a) => f(a).map(Datum::Stale),
            Datum::Fresh(a) => f(a).map(Datum::Fresh),
        }
    }

    /// Traverse with a `Result` effect, keeping the tag.
    pub fn traverse_result<B, E>(self, f: impl FnOnce(A) -> Result<B, E>) -> Result<Datum<B>, E> {
        match self {
            Datum::Empty => Ok(Datum::Empty),
            Datum::Loading => Ok(Datum::Loading),
            Datum::Stale(a) => f(a).map(Datum::Stale),
            Datum::Fresh(a) => f(a).map(Datum::Fresh),
        }
    }

    /// Traverse with a `Vec` (non-determinism) effect.
    ///
    /// Non-valued states give a single-element vector.
    pub fn traverse_vec<B>(self, f: impl FnOnce(A) -> Vec<B>) -> Vec<Datum<B>> {
        match self {
            Datum::Empty => vec![Datum::Empty],
            Datum::Loading => vec![Datum::Loading],
            Datum::Stale(a) => f(a).into_iter().map(Datum::Stale).collect(),
            Datum::Fresh(a) => f(a).into_iter().map(Datum::Fresh).collect(),
        }
    }

    /// Filter inside an `Option` effect.
    ///
    /// `Some(None)` from `f` demotes the datum to `Empty`; the tag is
    /// kept otherwise.
    pub fn wither_option<B>(self, f: impl FnOnce(A) -> Option<Option<B>>) -> Option<Datum<B>> {
        self.traverse_option(f).map(Datum::compact)
    }

    /// Filter inside a `Result` effect.
    pub fn wither_result<B, E>(
        self,
        f: impl FnOnce(A) -> Result<Option<B>, E>,
    ) -> Result<Datum<B>, E> {
        self.traverse_result(f).map(Datum::compact)
    }

    /// Partition inside an `Option` effect, halves as in
    /// [`Datum::separate`].
    pub fn wilt_option<L, R>(
        self,
        f: impl FnOnce(A) -> Option<Result<R, L>>,
    ) -> Option<(Datum<L>, Datum<R>)> {
        self.traverse_option(f).map(Datum::separate)
    }

    /// Partition inside a `Result` effect, halves as in
    /// [`Datum::separate`].
    pub fn wilt_result<L, R, E>(
        self,
        f: impl FnOnce(A) -> Result<Result<R, L>, E>,
    ) -> Result<(Datum<L>, Datum<R>), E> {
        self.traverse_result(f).map(Datum::separate)
    }

    /// Traverse with a future effect: await the continuation on the
    /// payload and keep the tag.
    #[cfg(feature = "async")]
    pub async fn traverse_future<B, Fut>(self, f: impl FnOnce(A) -> Fut) -> Datum<B>
    where
        Fut: Future<Output = B>,
    {
        match self {
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(a) => Datum::Stale(f(a).await),
            Datum::Fresh(a) => Datum::Fresh(f(a).await),
        }
    }

    /// Structural equality with an explicit payload comparison.
    pub fn eq_by<B>(&self, other: &Datum<B>, eq: impl FnOnce(&A, &B) -> bool) -> bool {
        match (self, other) {
            (Datum::Empty, Datum::Empty) | (Datum::Loading, Datum::Loading) => true,
            (Datum::Stale(a), Datum::Stale(b)) | (Datum::Fresh(a), Datum::Fresh(b)) => eq(a, b),
            (Datum::Empty | Datum::Loading | Datum::Stale(_) | Datum::Fresh(_), _) => false,
        }
    }

    /// Total ordering with an explicit payload comparison.
    ///
    /// Same order as the derived [`Ord`]: variants first, payloads
    /// only within the same variant.
    pub fn cmp_by(&self, other: &Datum<A>, cmp: impl FnOnce(&A, &A) -> Ordering) -> Ordering {
        match (self, other) {
            (Datum::Stale(a), Datum::Stale(b)) | (Datum::Fresh(a), Datum::Fresh(b)) => cmp(a, b),
            (
                Datum::Empty | Datum::Loading | Datum::Stale(_) | Datum::Fresh(_),
                Datum::Empty | Datum::Loading | Datum::Stale(_) | Datum::Fresh(_),
            ) => self.rank().cmp(&other.rank()),
        }
    }

    /// Partial ordering with an explicit payload comparison.
    ///
    /// `None` only when two payloads in the same variant are
    /// incomparable.
    pub fn partial_cmp_by(
        &self,
        other: &Datum<A>,
        cmp: impl FnOnce(&A, &A) -> Option<Ordering>,
    ) -> Option<Ordering> {
        match (self, other) {
            (Datum::Stale(a), Datum::Stale(b)) | (Datum::Fresh(a), Datum::Fresh(b)) => cmp(a, b),
            (
                Datum::Empty | Datum::Loading | Datum::Stale(_) | Datum::Fresh(_),
                Datum::Empty | Datum::Loading | Datum::Stale(_) | Datum::Fresh(_),
            ) => Some(self.rank().cmp(&other.rank())),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Datum::Empty => 0,
            Datum::Loading => 1,
            Datum::Stale(_) => 2,
            Datum::Fresh(_) => 3,
        }
    }
}

impl<F> Datum<F> {
    /// Apply a datum of functions to a datum of arguments.
    ///
    /// Same precedence as [`Datum::zip_with`].
    pub fn ap<A, B>(self, fa: Datum<A>) -> Datum<B>
    where
        F: FnOnce(A) -> B,
    {
        self.zip_with(fa, |f, a| f(a))
    }
}

impl<A> Datum<Datum<A>> {
    /// Remove one level of nesting; the inner shape wins.
    pub fn flatten(self) -> Datum<A> {
        self.and_then(|inner| inner)
    }
}

impl<A> Datum<Option<A>> {
    /// Drop `None` payloads, demoting them to `Empty`.
    pub fn compact(self) -> Datum<A> {
        match self {
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(a) => a.map_or(Datum::Empty, Datum::Stale),
            Datum::Fresh(a) => a.map_or(Datum::Empty, Datum::Fresh),
        }
    }

    /// Sequence with the `Option` effect:
    /// `Datum<Option<A>>` → `Option<Datum<A>>`.
    pub fn transpose(self) -> Option<Datum<A>> {
        self.traverse_option(|a| a)
    }
}

impl<L, R> Datum<Result<R, L>> {
    /// Split `Err` payloads to the left and `Ok` payloads to the
    /// right, keeping the tag. The side that receives nothing is
    /// `Empty`; `Empty` and `Loading` are copied to both sides.
    pub fn separate(self) -> (Datum<L>, Datum<R>) {
        match self {
            Datum::Empty => (Datum::Empty, Datum::Empty),
            Datum::Loading => (Datum::Loading, Datum::Loading),
            Datum::Stale(Err(l)) => (Datum::Stale(l), Datum::Empty),
            Datum::Stale(Ok(r)) => (Datum::Empty, Datum::Stale(r)),
            Datum::Fresh(Err(l)) => (Datum::Fresh(l), Datum::Empty),
            Datum::Fresh(Ok(r)) => (Datum::Empty, Datum::Fresh(r)),
        }
    }
}

impl<A> Datum<Vec<A>> {
    /// Sequence with the `Vec` effect:
    /// `Datum<Vec<A>>` → `Vec<Datum<A>>`.
    pub fn sequence_vec(self) -> Vec<Datum<A>> {
        self.traverse_vec(|v| v)
    }
}

#[cfg(feature = "async")]
impl<Fut: Future> Datum<Fut> {
    /// Sequence with the future effect:
    /// `Datum<impl Future<Output = A>>` → `impl Future<Output = Datum<A>>`.
    pub async fn sequence_future(self) -> Datum<Fut::Output> {
        self.traverse_future(|fut| fut).await
    }
}

/// Progress semigroup.
///
/// `Empty` is neutral, `Loading` marks the other side's value as
/// `Stale`, and two values are combined with `A`'s semigroup, staying
/// `Fresh` only when both are `Fresh`:
///
/// ```rust
/// use datum::Datum;
/// use datum_algebra::{Semigroup, Sum};
///
/// assert_eq!(Datum::Loading.combine(&Datum::fresh(Sum(1))), Datum::stale(Sum(1)));
/// assert_eq!(Datum::Empty.combine(&Datum::fresh(Sum(1))), Datum::fresh(Sum(1)));
/// ```
impl<A: Semigroup + Clone> Semigroup for Datum<A> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Datum::Empty, x) | (x, Datum::Empty) => x.clone(),
            (Datum::Loading, Datum::Loading) => Datum::Loading,
            (Datum::Loading, Datum::Stale(x) | Datum::Fresh(x))
            | (Datum::Stale(x) | Datum::Fresh(x), Datum::Loading) => Datum::Stale(x.clone()),
            (Datum::Fresh(x), Datum::Fresh(y)) => Datum::Fresh(x.combine(y)),
            (Datum::Stale(x), Datum::Stale(y) | Datum::Fresh(y))
            | (Datum::Fresh(x), Datum::Stale(y)) => Datum::Stale(x.combine(y)),
        }
    }
}

/// Progress monoid: identity `Empty`.
impl<A: Semigroup + Clone> Monoid for Datum<A> {
    fn empty() -> Self {
        Datum::Empty
    }
}

/// Sequence an iterator of datums with the applicative precedence.
///
/// Stops at the first `Empty`. Any `Loading` makes the result
/// `Loading`; otherwise the payloads are collected, `Stale` if any
/// element was `Stale`. An empty iterator gives `Fresh` of an empty
/// collection.
impl<A, V: FromIterator<A>> FromIterator<Datum<A>> for Datum<V> {
    fn from_iter<I: IntoIterator<Item = Datum<A>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut loading = false;
        let mut stale = false;
        for (index, item) in iter.into_iter().enumerate() {
            match item {
                Datum::Empty => {
                    tracing::trace!(index, "datum sequence short-circuited on empty");
                    return Datum::Empty;
                }
                Datum::Loading => loading = true,
                Datum::Stale(a) => {
                    stale = true;
                    if !loading {
                        values.push(a);
                    }
                }
                Datum::Fresh(a) => {
                    if !loading {
                        values.push(a);
                    }
                }
            }
        }
        if loading {
            return Datum::Loading;
        }
        let collected = values.into_iter().collect();
        if stale {
            Datum::Stale(collected)
        } else {
            Datum::Fresh(collected)
        }
    }
}

impl<A> From<Option<A>> for Datum<A> {
    fn from(value: Option<A>) -> Self {
        Datum::from_option(value)
    }
}

impl<A: fmt::Display> fmt::Display for Datum<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Empty => f.write_str("empty"),
            Datum::Loading => f.write_str("loading"),
            Datum::Stale(a) => write!(f, "stale({a})"),
            Datum::Fresh(a) => write!(f, "fresh({a})"),
        }
    }
}
